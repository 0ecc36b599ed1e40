//! データ準備パイプラインモジュール
//!
//! スクラブ→抽出→ターゲット分離の各段階を、明示的な設定構造体に従って
//! 順に実行します。各段階は独立した関数としても呼び出せます。

use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::error::Result;
use crate::extract::{extract, ExtractOptions, FeatureMatrix};
use crate::scrub::{scrub, Constraint, ScrubReport};

/// データ準備パイプラインの設定
///
/// どの属性を抽出するか・どの制約でスクラブするか・欠損の扱いを
/// まとめて指定します。属性リストの先頭はターゲット分離を有効にした
/// 場合にターゲット列として扱われます。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrepConfig {
    /// 抽出する属性名（この順で列になる）
    pub attributes: Vec<String>,
    /// 属性名ごとのドメイン制約
    pub constraints: HashMap<String, Constraint>,
    /// 抽出の設定
    pub extract: ExtractOptions,
    /// 先頭列をターゲットベクトルとして分離するか
    pub split_target: bool,
}

impl PrepConfig {
    /// 抽出対象の属性名からパイプライン設定を作成
    pub fn new<S: Into<String>>(attributes: Vec<S>) -> Self {
        PrepConfig {
            attributes: attributes.into_iter().map(|s| s.into()).collect(),
            ..Default::default()
        }
    }

    /// 属性に制約を追加する
    pub fn add_constraint<S: Into<String>>(
        &mut self,
        attribute: S,
        constraint: Constraint,
    ) -> &mut Self {
        self.constraints.insert(attribute.into(), constraint);
        self
    }

    /// 欠損の埋め値を設定する
    pub fn set_fill_value(&mut self, fill_value: f64) -> &mut Self {
        self.extract.fill_value = fill_value;
        self
    }

    /// 全属性が欠損のエンティティも埋め値の行として残す
    pub fn keep_all_missing(&mut self) -> &mut Self {
        self.extract.skip_all_missing = false;
        self
    }

    /// 先頭列のターゲット分離を有効にする
    pub fn enable_split_target(&mut self) -> &mut Self {
        self.split_target = true;
        self
    }
}

/// パイプラインの実行結果
#[derive(Debug, Clone)]
pub struct PrepOutput {
    /// スクラブ後のデータセット
    pub dataset: Dataset,
    /// スクラブの除外レポート
    pub report: ScrubReport,
    /// 抽出された数値行列
    pub matrix: FeatureMatrix,
    /// ターゲットベクトル（分離を有効にした場合）
    pub target: Option<Vec<f64>>,
    /// ターゲットを除いた特徴行列（分離を有効にした場合）
    pub features: Option<FeatureMatrix>,
}

/// パイプラインの全段階を順に実行する
pub fn run(dataset: &Dataset, config: &PrepConfig) -> Result<PrepOutput> {
    log::debug!("スクラブ段階: {} 件のエンティティを検査", dataset.len());
    let (cleaned, report) = scrub(dataset, &config.constraints);

    log::debug!(
        "抽出段階: {} 件のエンティティから {} 列を抽出",
        cleaned.len(),
        config.attributes.len()
    );
    let matrix = extract(&cleaned, &config.attributes, &config.extract)?;

    let (target, features) = if config.split_target {
        let (target, features) = matrix.split_target_feature()?;
        (Some(target), Some(features))
    } else {
        (None, None)
    };

    Ok(PrepOutput {
        dataset: cleaned,
        report,
        matrix,
        target,
        features,
    })
}
