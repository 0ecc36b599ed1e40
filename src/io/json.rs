use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde_json::{Map, Value};

use crate::dataset::{Dataset, Entity};
use crate::error::{PrepRSError, Result};
use crate::na::DataValue;

/// JSONファイルからデータセットを読み込む
///
/// エンティティ名をキーとし、属性マッピングを値とするオブジェクトの
/// オブジェクト形式のみ受け付けます。nullは欠損値、真偽値は0/1の
/// 整数に変換されます。
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let file = File::open(path.as_ref()).map_err(PrepRSError::Io)?;
    let reader = BufReader::new(file);

    // JSONを解析
    let json_value: Value = serde_json::from_reader(reader).map_err(PrepRSError::Json)?;

    let map = match json_value {
        Value::Object(map) => map,
        _ => {
            return Err(PrepRSError::Format(
                "JSONはエンティティ名をキーとするオブジェクトである必要があります".to_string(),
            ))
        }
    };

    let mut dataset = Dataset::new();
    for (name, attributes) in map {
        let object = match attributes {
            Value::Object(object) => object,
            _ => {
                return Err(PrepRSError::Format(format!(
                    "エンティティ {} の属性はオブジェクトである必要があります",
                    name
                )))
            }
        };

        let mut entity = Entity::new();
        for (attribute, value) in object {
            entity.set(attribute, value_to_data(&value)?);
        }
        dataset.insert(name, entity);
    }

    Ok(dataset)
}

// JSON値を生の属性値に変換する
fn value_to_data(value: &Value) -> Result<DataValue> {
    match value {
        Value::Null => Ok(DataValue::NA),
        Value::Bool(b) => Ok(DataValue::Int64(*b as i64)),
        Value::Number(number) => {
            if let Some(v) = number.as_i64() {
                Ok(DataValue::Int64(v))
            } else if let Some(v) = number.as_f64() {
                Ok(DataValue::Float64(v))
            } else {
                Err(PrepRSError::Format(format!(
                    "数値を解釈できません: {}",
                    number
                )))
            }
        }
        Value::String(s) => Ok(DataValue::Text(s.clone())),
        _ => Err(PrepRSError::Format(
            "ネストした配列・オブジェクトはサポートされません".to_string(),
        )),
    }
}

/// データセットをレコード形式のJSONとして書き出す
///
/// ドキュメントストアへの投入を想定し、各エンティティを`name`
/// フィールドを持つレコードとする配列に直列化します。欠損値は
/// nullになります。
pub fn write_records<P: AsRef<Path>>(dataset: &Dataset, path: P) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(PrepRSError::Io)?;
    let writer = BufWriter::new(file);

    let mut records = Vec::with_capacity(dataset.len());
    for (name, entity) in dataset.iter() {
        let mut record = Map::new();
        record.insert("name".to_string(), Value::String(name.clone()));
        for (attribute, value) in entity.iter() {
            record.insert(attribute.clone(), data_to_value(value));
        }
        records.push(Value::Object(record));
    }

    serde_json::to_writer_pretty(writer, &Value::Array(records)).map_err(PrepRSError::Json)?;
    Ok(())
}

// 生の属性値をJSON値に変換する
fn data_to_value(value: &DataValue) -> Value {
    match value {
        DataValue::Int64(v) => Value::from(*v),
        // 非有限の実数はJSONで表現できないため欠損として書き出す
        DataValue::Float64(v) if v.is_finite() => Value::from(*v),
        DataValue::Float64(_) => Value::Null,
        DataValue::Text(s) => Value::String(s.clone()),
        DataValue::NA => Value::Null,
    }
}
