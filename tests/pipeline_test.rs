use preprs::pipeline::run;
use preprs::{extract, scrub, Constraint, DataValue, Dataset, Entity, ExtractOptions, PrepConfig};

fn flight_dataset() -> Dataset {
    // フライト→数値属性の小さなデータセット
    let mut dataset = Dataset::new();
    dataset.insert(
        "DL1001",
        Entity::from_pairs(vec![
            ("delayed", DataValue::Int64(1)),
            ("distance", DataValue::Int64(588)),
            ("taxi_out", DataValue::Int64(14)),
        ]),
    );
    dataset.insert(
        "DL1002",
        Entity::from_pairs(vec![
            ("delayed", DataValue::Int64(0)),
            ("distance", DataValue::Int64(-10)),
            ("taxi_out", DataValue::Int64(11)),
        ]),
    );
    dataset.insert(
        "DL1003",
        Entity::from_pairs(vec![
            ("delayed", DataValue::Int64(0)),
            ("distance", DataValue::Int64(847)),
            ("taxi_out", DataValue::NA),
        ]),
    );
    dataset
}

#[test]
fn test_pipeline_full_run() {
    let dataset = flight_dataset();

    let mut config = PrepConfig::new(vec!["delayed", "distance", "taxi_out"]);
    config
        .add_constraint("distance", Constraint::NonNegative)
        .enable_split_target();

    let output = run(&dataset, &config).unwrap();

    // 距離が負のDL1002はスクラブで除外される
    assert_eq!(output.dataset.len(), 2);
    assert_eq!(output.report.len(), 1);
    assert_eq!(output.report.entries()[0].entity, "DL1002");

    // 行列は残った2件、先頭列がターゲットに分離される
    assert_eq!(output.matrix.row_count(), 2);
    let target = output.target.unwrap();
    let features = output.features.unwrap();
    assert_eq!(target, vec![1.0, 0.0]);
    assert_eq!(features.column_names(), &["distance", "taxi_out"]);
    assert_eq!(features.rows()[0], vec![588.0, 14.0]);
    assert_eq!(features.rows()[1], vec![847.0, 0.0]);
}

#[test]
fn test_pipeline_without_split() {
    let dataset = flight_dataset();
    let config = PrepConfig::new(vec!["delayed", "distance"]);

    let output = run(&dataset, &config).unwrap();

    assert!(output.target.is_none());
    assert!(output.features.is_none());
    assert_eq!(output.matrix.row_count(), 3);
    assert!(output.report.is_empty());
}

#[test]
fn test_pipeline_matches_manual_stages() {
    // パイプラインは各段階を個別に呼んだ場合と同じ結果になる
    let dataset = flight_dataset();

    let mut config = PrepConfig::new(vec!["delayed", "distance", "taxi_out"]);
    config.add_constraint("distance", Constraint::NonNegative);

    let output = run(&dataset, &config).unwrap();

    let (cleaned, _) = scrub(&dataset, &config.constraints);
    let matrix = extract(&cleaned, &config.attributes, &ExtractOptions::default()).unwrap();

    assert_eq!(output.dataset, cleaned);
    assert_eq!(output.matrix, matrix);
}

#[test]
fn test_pipeline_config_setters() {
    let mut config = PrepConfig::new(vec!["delayed", "distance"]);
    config.set_fill_value(-1.0).keep_all_missing();

    assert_eq!(config.extract.fill_value, -1.0);
    assert!(!config.extract.skip_all_missing);

    let dataset = flight_dataset();
    let output = run(&dataset, &config).unwrap();
    assert_eq!(output.matrix.row_count(), 3);
}

#[test]
fn test_pipeline_is_repeatable() {
    // 同じ設定での再実行は同一の結果になる（入力は変更されない）
    let dataset = flight_dataset();

    let mut config = PrepConfig::new(vec!["delayed", "distance", "taxi_out"]);
    config.add_constraint("distance", Constraint::NonNegative);

    let first = run(&dataset, &config).unwrap();
    let second = run(&dataset, &config).unwrap();

    assert_eq!(dataset.len(), 3);
    assert_eq!(first.matrix, second.matrix);
    assert_eq!(first.dataset, second.dataset);
}
