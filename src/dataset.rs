use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::na::DataValue;

/// エンティティ: 属性名から生の値へのマッピング
///
/// 1件の名前付きレコード（人物・フライトなど）を表します。属性の参照は
/// `Option`を返すルックアップで行い、存在しない属性でエラーにはなりません。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    attributes: BTreeMap<String, DataValue>,
}

impl Entity {
    /// 空のエンティティを作成
    pub fn new() -> Self {
        Entity {
            attributes: BTreeMap::new(),
        }
    }

    /// 属性名と値のペアからエンティティを作成するヘルパー関数
    pub fn from_pairs<K, V>(pairs: Vec<(K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<DataValue>,
    {
        let mut entity = Entity::new();
        for (name, value) in pairs {
            entity.set(name, value);
        }
        entity
    }

    /// 属性値を取得（存在しない場合はNone）
    pub fn get(&self, name: &str) -> Option<&DataValue> {
        self.attributes.get(name)
    }

    /// 属性値を設定する
    pub fn set<K, V>(&mut self, name: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<DataValue>,
    {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// 属性名の一覧を取得（名前順）
    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes.keys().map(|k| k.as_str()).collect()
    }

    /// 属性数を取得
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// 属性が空かどうかをチェック
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// 属性のイテレータを取得（名前順）
    pub fn iter(&self) -> btree_map::Iter<'_, String, DataValue> {
        self.attributes.iter()
    }
}

/// データセット: エンティティ名からエンティティへのマッピング
///
/// エンティティ名はデータセット内で一意です。内部はBTreeMapのため、
/// イテレーションは常に名前順となり、抽出結果の行順は決定的です。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    entities: BTreeMap<String, Entity>,
}

impl Dataset {
    /// 空のデータセットを作成
    pub fn new() -> Self {
        Dataset {
            entities: BTreeMap::new(),
        }
    }

    /// エンティティを追加する（同名のエンティティは置き換えられる）
    pub fn insert<K: Into<String>>(&mut self, name: K, entity: Entity) -> &mut Self {
        self.entities.insert(name.into(), entity);
        self
    }

    /// エンティティを取得（存在しない場合はNone）
    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// エンティティが存在するかどうかをチェック
    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    /// エンティティ数を取得
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// データセットが空かどうかをチェック
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// エンティティ名の一覧を取得（名前順）
    pub fn entity_names(&self) -> Vec<&str> {
        self.entities.keys().map(|k| k.as_str()).collect()
    }

    /// エンティティのイテレータを取得（名前順）
    pub fn iter(&self) -> btree_map::Iter<'_, String, Entity> {
        self.entities.iter()
    }
}
