use chrono::{NaiveDate, NaiveTime};
use preprs::coerce::{resolve_arrival_date, to_clock_time, to_duration, to_integer};
use preprs::{DataValue, NA};

#[test]
fn test_to_integer() {
    assert_eq!(to_integer(&DataValue::Int64(42)), NA::Value(42));
    assert_eq!(to_integer(&DataValue::Text("17".to_string())), NA::Value(17));
    assert_eq!(
        to_integer(&DataValue::Text(" -5 ".to_string())),
        NA::Value(-5)
    );

    // 小数部のない実数は整数として扱う（CSV由来の数値列は実数になりがち）
    assert_eq!(to_integer(&DataValue::Float64(930.0)), NA::Value(930));
    assert_eq!(to_integer(&DataValue::Float64(9.5)), NA::NA);
}

#[test]
fn test_to_integer_malformed_inputs() {
    // 解析できない入力は全てNAになり、決してエラーにならない
    assert_eq!(to_integer(&DataValue::Text("".to_string())), NA::NA);
    assert_eq!(to_integer(&DataValue::Text("NA".to_string())), NA::NA);
    assert_eq!(to_integer(&DataValue::Text("abc".to_string())), NA::NA);
    assert_eq!(to_integer(&DataValue::NA), NA::NA);
    assert_eq!(to_integer(&DataValue::Float64(f64::NAN)), NA::NA);
    assert_eq!(to_integer(&DataValue::Float64(f64::INFINITY)), NA::NA);
}

#[test]
fn test_to_clock_time() {
    // "930"は4桁にゼロ埋めされ09:30になる
    assert_eq!(
        to_clock_time(&DataValue::Text("930".to_string())),
        NA::Value(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
    );
    assert_eq!(
        to_clock_time(&DataValue::Int64(2350)),
        NA::Value(NaiveTime::from_hms_opt(23, 50, 0).unwrap())
    );
    assert_eq!(
        to_clock_time(&DataValue::Int64(5)),
        NA::Value(NaiveTime::from_hms_opt(0, 5, 0).unwrap())
    );
    assert_eq!(
        to_clock_time(&DataValue::Int64(0)),
        NA::Value(NaiveTime::from_hms_opt(0, 0, 0).unwrap())
    );
}

#[test]
fn test_to_clock_time_out_of_range() {
    // 時が0〜23の範囲外
    assert_eq!(to_clock_time(&DataValue::Int64(2401)), NA::NA);
    assert_eq!(to_clock_time(&DataValue::Int64(2400)), NA::NA);
    // 分が0〜59の範囲外
    assert_eq!(to_clock_time(&DataValue::Int64(1299)), NA::NA);
    // 5桁以上
    assert_eq!(to_clock_time(&DataValue::Int64(12345)), NA::NA);
    // 負値
    assert_eq!(to_clock_time(&DataValue::Int64(-930)), NA::NA);
}

#[test]
fn test_to_clock_time_malformed_inputs() {
    assert_eq!(to_clock_time(&DataValue::Text("".to_string())), NA::NA);
    assert_eq!(to_clock_time(&DataValue::Text("NA".to_string())), NA::NA);
    assert_eq!(to_clock_time(&DataValue::Text("x930".to_string())), NA::NA);
    assert_eq!(to_clock_time(&DataValue::NA), NA::NA);
}

#[test]
fn test_to_duration() {
    assert_eq!(
        to_duration(&DataValue::Int64(90)),
        NA::Value(chrono::Duration::minutes(90))
    );
    assert_eq!(
        to_duration(&DataValue::Text("15".to_string())),
        NA::Value(chrono::Duration::minutes(15))
    );

    assert_eq!(to_duration(&DataValue::Text("NA".to_string())), NA::NA);
    assert_eq!(to_duration(&DataValue::NA), NA::NA);
}

#[test]
fn test_resolve_arrival_date_overnight() {
    // 到着時刻が出発時刻より早ければ日を跨いだ便とみなす
    let depart_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let depart_time = NA::Value(NaiveTime::from_hms_opt(23, 50, 0).unwrap());
    let arrive_time = NA::Value(NaiveTime::from_hms_opt(0, 10, 0).unwrap());

    assert_eq!(
        resolve_arrival_date(depart_date, &depart_time, &arrive_time),
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    );
}

#[test]
fn test_resolve_arrival_date_same_day() {
    let depart_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let depart_time = NA::Value(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    let arrive_time = NA::Value(NaiveTime::from_hms_opt(10, 0, 0).unwrap());

    assert_eq!(
        resolve_arrival_date(depart_date, &depart_time, &arrive_time),
        depart_date
    );
}

#[test]
fn test_resolve_arrival_date_missing_times() {
    // どちらかの時刻が欠損なら出発日をそのまま返す
    let depart_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let valid = NA::Value(NaiveTime::from_hms_opt(23, 50, 0).unwrap());
    let missing: NA<NaiveTime> = NA::NA;

    assert_eq!(
        resolve_arrival_date(depart_date, &missing, &valid),
        depart_date
    );
    assert_eq!(
        resolve_arrival_date(depart_date, &valid, &missing),
        depart_date
    );
    assert_eq!(
        resolve_arrival_date(depart_date, &missing, &missing),
        depart_date
    );
}

#[test]
fn test_coercion_from_csv_cells() {
    // CSVセル推測とフィールド変換の組み合わせ
    assert_eq!(to_clock_time(&DataValue::parse("1536")).is_value(), true);
    assert_eq!(to_clock_time(&DataValue::parse("")), NA::NA);
    assert_eq!(to_duration(&DataValue::parse("75")).is_value(), true);
    assert_eq!(to_integer(&DataValue::parse("NaN")), NA::NA);
}
