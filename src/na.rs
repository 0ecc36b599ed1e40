use std::fmt::{self, Debug, Display};

use num_traits::NumCast;
use serde::{Deserialize, Serialize};

/// 欠損値（NA, Not Available）を表現する型
///
/// 解析に失敗した値や元データに存在しない値を、エラーではなく
/// 通常の値として型システム上で表現します。変換関数は常に
/// `Value` か `NA` のどちらかを返し、途中で失敗することはありません。
#[derive(Clone, Copy)]
pub enum NA<T> {
    /// 値が存在する場合
    Value(T),
    /// 値が存在しない場合
    NA,
}

impl<T> NA<T> {
    /// 値が欠損しているかどうかをチェック
    pub fn is_na(&self) -> bool {
        match self {
            NA::Value(_) => false,
            NA::NA => true,
        }
    }

    /// 値が存在するかどうかをチェック
    pub fn is_value(&self) -> bool {
        !self.is_na()
    }

    /// 値を取得（存在する場合）
    pub fn value(&self) -> Option<&T> {
        match self {
            NA::Value(v) => Some(v),
            NA::NA => None,
        }
    }

    /// 値を取得（存在する場合）、存在しない場合はデフォルト値を返す
    pub fn value_or<'a>(&'a self, default: &'a T) -> &'a T {
        match self {
            NA::Value(v) => v,
            NA::NA => default,
        }
    }

    /// 値を変換する（欠損はそのまま伝播する）
    pub fn map<U, F>(&self, f: F) -> NA<U>
    where
        F: FnOnce(&T) -> U,
    {
        match self {
            NA::Value(v) => NA::Value(f(v)),
            NA::NA => NA::NA,
        }
    }
}

// From実装：T型からNA<T>への自動変換
impl<T> From<T> for NA<T> {
    fn from(value: T) -> Self {
        NA::Value(value)
    }
}

// From実装：Option<T>からNA<T>への自動変換
impl<T> From<Option<T>> for NA<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => NA::Value(v),
            None => NA::NA,
        }
    }
}

// Into実装：NA<T>からOption<T>への自動変換
impl<T> From<NA<T>> for Option<T> {
    fn from(na: NA<T>) -> Self {
        match na {
            NA::Value(v) => Some(v),
            NA::NA => None,
        }
    }
}

impl<T: Debug> Debug for NA<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NA::Value(v) => write!(f, "{:?}", v),
            NA::NA => write!(f, "NA"),
        }
    }
}

impl<T: Display> Display for NA<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NA::Value(v) => write!(f, "{}", v),
            NA::NA => write!(f, "NA"),
        }
    }
}

impl<T: PartialEq> PartialEq for NA<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (NA::Value(a), NA::Value(b)) => a == b,
            (NA::NA, NA::NA) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for NA<T> {}

/// 生の属性値を表現する列挙型
///
/// 外部から読み込んだ表形式データのセルには整数・実数・文字列・欠損が
/// 混在するため、型付けされた列挙型として保持します。JSONとの相互変換では
/// 欠損はnullに対応します。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    /// 整数値
    Int64(i64),
    /// 浮動小数点値
    Float64(f64),
    /// 文字列値
    Text(String),
    /// 欠損値
    NA,
}

impl DataValue {
    /// 値が欠損しているかどうかをチェック
    pub fn is_na(&self) -> bool {
        matches!(self, DataValue::NA)
    }

    /// 数値として取得（数値でない場合はNone）
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Int64(v) => NumCast::from(*v),
            DataValue::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// 文字列として取得（文字列でない場合はNone）
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// 文字列セルから値を推測して作成
    ///
    /// 整数→実数→文字列の順で解釈を試み、空文字列は欠損とみなします。
    pub fn parse(s: &str) -> DataValue {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return DataValue::NA;
        }
        if let Ok(v) = trimmed.parse::<i64>() {
            return DataValue::Int64(v);
        }
        if let Ok(v) = trimmed.parse::<f64>() {
            return DataValue::Float64(v);
        }
        DataValue::Text(trimmed.to_string())
    }
}

impl From<i64> for DataValue {
    fn from(value: i64) -> Self {
        DataValue::Int64(value)
    }
}

impl From<i32> for DataValue {
    fn from(value: i32) -> Self {
        DataValue::Int64(value as i64)
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Float64(value)
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::Text(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::Text(value)
    }
}

impl Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Int64(v) => write!(f, "{}", v),
            DataValue::Float64(v) => write!(f, "{}", v),
            DataValue::Text(s) => write!(f, "{}", s),
            DataValue::NA => write!(f, "NA"),
        }
    }
}
