use thiserror::Error;

/// エラー型の定義
#[derive(Error, Debug)]
pub enum PrepRSError {
    #[error("入出力エラー")]
    Io(#[source] std::io::Error),

    #[error("CSVエラー")]
    Csv(#[source] csv::Error),

    #[error("JSONエラー")]
    Json(#[source] serde_json::Error),

    #[error("属性が見つかりません: {0}")]
    AttributeNotFound(String),

    #[error("属性名が重複しています: {0}")]
    DuplicateAttribute(String),

    #[error("エンティティ名が重複しています: {0}")]
    DuplicateEntity(String),

    #[error("データがありません: {0}")]
    EmptyData(String),

    #[error("データ形式エラー: {0}")]
    Format(String),
}

/// Result型のエイリアス
pub type Result<T> = std::result::Result<T, PrepRSError>;

impl From<std::io::Error> for PrepRSError {
    fn from(err: std::io::Error) -> Self {
        PrepRSError::Io(err)
    }
}

impl From<csv::Error> for PrepRSError {
    fn from(err: csv::Error) -> Self {
        PrepRSError::Csv(err)
    }
}

impl From<serde_json::Error> for PrepRSError {
    fn from(err: serde_json::Error) -> Self {
        PrepRSError::Json(err)
    }
}
