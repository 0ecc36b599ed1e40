//! レコード抽出モジュール
//!
//! データセットと属性リストから、外部の統計・学習ライブラリへ渡すための
//! 矩形の数値行列を構築します。

use std::collections::HashSet;

use crate::dataset::Dataset;
use crate::error::{PrepRSError, Result};

/// 抽出の動作を制御する設定
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// 欠損値の代わりに埋める数値
    pub fill_value: f64,
    /// 要求した属性が全て欠損しているエンティティを行から除外するか
    pub skip_all_missing: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            fill_value: 0.0,
            skip_all_missing: true,
        }
    }
}

/// 抽出結果の数値行列
///
/// 全ての行は列名リストと同じ長さを持ちます。行順はデータセットの
/// エンティティ名順に対応し、同じ入力からは常に同じ行列が得られます。
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    column_names: Vec<String>,
    entity_names: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    /// 列名の一覧を取得
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// 各行に対応するエンティティ名を取得
    pub fn entity_names(&self) -> &[String] {
        &self.entity_names
    }

    /// 行データを取得
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// 行数を取得
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 列数を取得
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// 行列が空かどうかをチェック
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 先頭列をターゲットベクトルとして分離する
    ///
    /// ターゲットは各行の第0列、特徴行列は第1列以降です。行数と行順は
    /// 変わらず、ターゲットの第i要素は特徴行列の第i行に対応します。
    pub fn split_target_feature(&self) -> Result<(Vec<f64>, FeatureMatrix)> {
        if self.column_names.is_empty() {
            return Err(PrepRSError::EmptyData(
                "分離すべき列がありません".to_string(),
            ));
        }

        let target: Vec<f64> = self.rows.iter().map(|row| row[0]).collect();
        let features = FeatureMatrix {
            column_names: self.column_names[1..].to_vec(),
            entity_names: self.entity_names.clone(),
            rows: self.rows.iter().map(|row| row[1..].to_vec()).collect(),
        };

        Ok((target, features))
    }
}

/// データセットから数値行列を抽出する
///
/// エンティティごとに属性リストの順で値を引き、数値として解釈できる値は
/// そのまま、欠損・非数値は`fill_value`で埋めた行を構築します。
/// `skip_all_missing`が有効な場合、要求した属性が1つも存在しない
/// エンティティは行ごと除外されます（埋めた行にはなりません）。
pub fn extract(
    dataset: &Dataset,
    attributes: &[String],
    options: &ExtractOptions,
) -> Result<FeatureMatrix> {
    if attributes.is_empty() {
        return Err(PrepRSError::EmptyData("属性リストが空です".to_string()));
    }

    let mut seen = HashSet::new();
    for name in attributes {
        if !seen.insert(name.as_str()) {
            return Err(PrepRSError::DuplicateAttribute(name.clone()));
        }
    }

    // どのエンティティにも存在しない属性は列全体が埋め値になる
    for name in attributes {
        if dataset.iter().all(|(_, entity)| entity.get(name).is_none()) {
            log::warn!("属性 {} はどのエンティティにも存在しません", name);
        }
    }

    let mut entity_names = Vec::new();
    let mut rows = Vec::new();

    for (entity_name, entity) in dataset.iter() {
        let mut row = Vec::with_capacity(attributes.len());
        let mut present = 0usize;

        for attribute in attributes {
            match entity.get(attribute).and_then(|value| value.as_f64()) {
                Some(value) => {
                    present += 1;
                    row.push(value);
                }
                None => row.push(options.fill_value),
            }
        }

        if options.skip_all_missing && present == 0 {
            continue;
        }

        entity_names.push(entity_name.clone());
        rows.push(row);
    }

    Ok(FeatureMatrix {
        column_names: attributes.to_vec(),
        entity_names,
        rows,
    })
}
