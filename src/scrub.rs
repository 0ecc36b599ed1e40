//! 外れ値スクラブモジュール
//!
//! ドメイン的にあり得ない属性値を持つエンティティを、抽出の前に
//! データセットから除外します。除外は例外ではなく構造化された
//! レポートとして報告され、致命的かどうかの判断は呼び出し側に委ねます。

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::na::DataValue;

/// 属性値に課すドメイン制約を表す列挙型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constraint {
    /// 0以上であること
    NonNegative,
    /// 0以下であること
    NonPositive,
    /// 0より大きいこと
    Positive,
    /// 範囲内（両端を含む）であること
    Bounded { min: f64, max: f64 },
}

impl Constraint {
    /// 数値が制約を満たすかどうかを判定する
    pub fn check(&self, value: f64) -> bool {
        match self {
            Constraint::NonNegative => value >= 0.0,
            Constraint::NonPositive => value <= 0.0,
            Constraint::Positive => value > 0.0,
            Constraint::Bounded { min, max } => *min <= value && value <= *max,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::NonNegative => write!(f, "非負"),
            Constraint::NonPositive => write!(f, "非正"),
            Constraint::Positive => write!(f, "正"),
            Constraint::Bounded { min, max } => write!(f, "範囲 [{}, {}]", min, max),
        }
    }
}

/// 除外されたエンティティ1件の理由
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrubEntry {
    /// 除外されたエンティティ名
    pub entity: String,
    /// 制約に違反した属性名
    pub attribute: String,
    /// 違反時の生の値
    pub value: DataValue,
    /// 違反した制約
    pub constraint: Constraint,
}

/// スクラブ処理の除外レポート
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrubReport {
    entries: Vec<ScrubEntry>,
}

impl ScrubReport {
    /// レポートの項目一覧を取得
    pub fn entries(&self) -> &[ScrubEntry] {
        &self.entries
    }

    /// 項目数を取得
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// レポートが空（違反なし）かどうかをチェック
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 項目のイテレータを取得
    pub fn iter(&self) -> std::slice::Iter<'_, ScrubEntry> {
        self.entries.iter()
    }
}

/// ドメイン制約に違反するエンティティを除外する
///
/// 制約が課された属性のうち、値が存在しかつ数値として解釈できるものを
/// 検査します。欠損や非数値は違反とはみなしません（欠損は数値範囲制約の
/// 違反ではない）。入力のデータセットは変更されず、残されたエンティティの
/// 複製からなる新しいデータセットと除外レポートを返します。
pub fn scrub(
    dataset: &Dataset,
    constraints: &HashMap<String, Constraint>,
) -> (Dataset, ScrubReport) {
    // レポートの順序を決定的にするため属性名順に検査する
    let mut constrained: Vec<(&String, &Constraint)> = constraints.iter().collect();
    constrained.sort_by(|a, b| a.0.cmp(b.0));

    let mut cleaned = Dataset::new();
    let mut report = ScrubReport::default();

    for (entity_name, entity) in dataset.iter() {
        let mut violations = Vec::new();

        for &(attribute, constraint) in &constrained {
            if let Some(value) = entity.get(attribute) {
                if let Some(number) = value.as_f64() {
                    if !constraint.check(number) {
                        violations.push(ScrubEntry {
                            entity: entity_name.clone(),
                            attribute: attribute.clone(),
                            value: value.clone(),
                            constraint: constraint.clone(),
                        });
                    }
                }
            }
        }

        if violations.is_empty() {
            cleaned.insert(entity_name.clone(), entity.clone());
        } else {
            log::debug!(
                "エンティティ {} を除外しました（違反 {} 件）",
                entity_name,
                violations.len()
            );
            report.entries.extend(violations);
        }
    }

    (cleaned, report)
}
