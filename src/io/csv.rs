use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Writer};

use crate::dataset::{Dataset, Entity};
use crate::error::{PrepRSError, Result};
use crate::na::DataValue;

/// CSV読み込みの設定
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// エンティティ名として使う列（Noneの場合は行番号から生成）
    pub key_column: Option<String>,
    /// 欠損値とみなすトークン
    pub na_tokens: Vec<String>,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        CsvReadOptions {
            key_column: None,
            na_tokens: vec!["".to_string(), "NA".to_string(), "NaN".to_string()],
        }
    }
}

/// CSVファイルからデータセットを読み込む
///
/// ヘッダー行を属性名として、各行を1エンティティに変換します。
/// セルは整数→実数→文字列の順で推測され、欠損トークンに一致する
/// セルは欠損値になります。
pub fn read_csv<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> Result<Dataset> {
    let file = File::open(path.as_ref()).map_err(PrepRSError::Io)?;

    // CSVリーダーを設定
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    // ヘッダー行を取得
    let headers: Vec<String> = rdr
        .headers()
        .map_err(PrepRSError::Csv)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    // キー列の位置を解決
    let key_index = match &options.key_column {
        Some(name) => Some(
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| PrepRSError::AttributeNotFound(name.clone()))?,
        ),
        None => None,
    };

    let mut dataset = Dataset::new();

    // 各行を処理
    for (row_number, result) in rdr.records().enumerate() {
        let record = result.map_err(PrepRSError::Csv)?;

        let name = match key_index {
            Some(index) => {
                let key = record.get(index).unwrap_or("").to_string();
                if key.is_empty() {
                    return Err(PrepRSError::Format(format!(
                        "行 {} のキー列が空です",
                        row_number
                    )));
                }
                key
            }
            None => format!("row_{:06}", row_number),
        };

        if dataset.contains(&name) {
            return Err(PrepRSError::DuplicateEntity(name));
        }

        let mut entity = Entity::new();
        for (index, header) in headers.iter().enumerate() {
            if Some(index) == key_index {
                continue;
            }
            // 行の長さが足りない場合、欠損として扱う
            let cell = record.get(index).unwrap_or("");
            entity.set(header.clone(), parse_cell(cell, &options.na_tokens));
        }

        dataset.insert(name, entity);
    }

    Ok(dataset)
}

// 欠損トークンの照合と型推測を行う
fn parse_cell(cell: &str, na_tokens: &[String]) -> DataValue {
    let trimmed = cell.trim();
    if na_tokens.iter().any(|token| token == trimmed) {
        return DataValue::NA;
    }
    DataValue::parse(trimmed)
}

/// データセットをCSVファイルに書き込む
///
/// 全エンティティの属性名の和集合（名前順）をヘッダーとし、先頭に
/// エンティティ名の`name`列を置きます。欠損値は空セルになります。
pub fn write_csv<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(PrepRSError::Io)?;
    let mut wtr = Writer::from_writer(file);

    // 属性名の和集合を収集
    let mut attributes = BTreeSet::new();
    for (_, entity) in dataset.iter() {
        for (attribute, _) in entity.iter() {
            attributes.insert(attribute.clone());
        }
    }

    // ヘッダー行を書き込む
    let mut header = vec!["name".to_string()];
    header.extend(attributes.iter().cloned());
    wtr.write_record(&header).map_err(PrepRSError::Csv)?;

    for (name, entity) in dataset.iter() {
        let mut row = vec![name.clone()];
        for attribute in &attributes {
            let cell = match entity.get(attribute) {
                Some(DataValue::NA) | None => String::new(),
                Some(value) => value.to_string(),
            };
            row.push(cell);
        }
        wtr.write_record(&row).map_err(PrepRSError::Csv)?;
    }

    wtr.flush().map_err(PrepRSError::Io)?;
    Ok(())
}
