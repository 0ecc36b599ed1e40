//! フィールド変換モジュール
//!
//! 生の属性値を型付きの値（整数・時刻・経過時間）へ変換する全域関数を
//! 提供します。解析できない入力は常に欠損（NA）となり、エラーには
//! なりません。ノイズを含む実データを欠落なく通すための設計です。

use chrono::{Duration, NaiveDate, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

use crate::na::{DataValue, NA};

lazy_static! {
    // 4桁にゼロ埋めしたHHMM表記を時・分に分割するパターン
    static ref HHMM_PATTERN: Regex = Regex::new(r"^(\d{2})(\d{2})$").unwrap();
}

/// 生の値を整数へ変換する
///
/// 小数部を持たない浮動小数点値は整数とみなします。解析できない
/// 文字列・欠損・小数はNAを返します。
pub fn to_integer(raw: &DataValue) -> NA<i64> {
    match raw {
        DataValue::Int64(v) => NA::Value(*v),
        DataValue::Float64(v) => {
            if v.is_finite() && v.fract() == 0.0 && *v >= i64::MIN as f64 && *v <= i64::MAX as f64
            {
                NA::Value(*v as i64)
            } else {
                NA::NA
            }
        }
        DataValue::Text(s) => match s.trim().parse::<i64>() {
            Ok(v) => NA::Value(v),
            Err(_) => NA::NA,
        },
        DataValue::NA => NA::NA,
    }
}

/// HHMM形式の整数的な値を時刻へ変換する
///
/// 1〜4桁の値を4桁にゼロ埋めし、前半2桁を時・後半2桁を分として
/// 解釈します（"930" → 09:30）。整数として解釈できない場合や、
/// 時が0〜23・分が0〜59の範囲外の場合はNAを返します。
pub fn to_clock_time(raw: &DataValue) -> NA<NaiveTime> {
    let encoded = match to_integer(raw) {
        NA::Value(v) => v,
        NA::NA => return NA::NA,
    };
    if encoded < 0 {
        return NA::NA;
    }

    // 5桁以上はパターンに一致しない
    let padded = format!("{:04}", encoded);
    let caps = match HHMM_PATTERN.captures(&padded) {
        Some(caps) => caps,
        None => return NA::NA,
    };

    let hour = caps[1].parse::<u32>().ok();
    let minute = caps[2].parse::<u32>().ok();
    match (hour, minute) {
        (Some(h), Some(m)) => NaiveTime::from_hms_opt(h, m, 0).into(),
        _ => NA::NA,
    }
}

/// 分単位の値を経過時間へ変換する
pub fn to_duration(raw: &DataValue) -> NA<Duration> {
    to_integer(raw).map(|minutes| Duration::minutes(*minutes))
}

/// 到着日を解決する
///
/// 通常は出発日をそのまま返します。出発時刻と到着時刻が共に有効で、
/// かつ到着時刻が出発時刻より早い場合は日を跨いだ便とみなし、
/// 出発日の翌日を返します。
pub fn resolve_arrival_date(
    depart_date: NaiveDate,
    depart_time: &NA<NaiveTime>,
    arrive_time: &NA<NaiveTime>,
) -> NaiveDate {
    if let (NA::Value(depart), NA::Value(arrive)) = (depart_time, arrive_time) {
        if arrive < depart {
            return depart_date + Duration::days(1);
        }
    }
    depart_date
}
