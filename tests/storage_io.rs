use chartcfg::models::{ChartDataset, Series};
use chartcfg::{resolve, storage, to_table};
use std::fs;

fn sample() -> ChartDataset {
    ChartDataset::new(
        vec!["Q1".into(), "Q2".into()],
        vec![Series::numbers("Sales", &[100.0, -5.0])],
    )
}

#[test]
fn dataset_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ds.json");
    fs::write(&path, serde_json::to_string(&sample()).unwrap()).unwrap();
    let loaded = storage::load_dataset(&path).unwrap();
    assert_eq!(loaded, sample());
}

#[test]
fn load_reports_missing_file() {
    let err = storage::load_dataset("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("opening"));
}

#[test]
fn configuration_is_saved_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    let cfg = resolve("barchart", &sample()).unwrap();
    storage::save_configuration_json(&cfg, &path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["chartKind"], "bar");
    assert_eq!(v["options"]["dataLabels"]["formatter"]["number"]["locale"], "it-CH");
}

// Table cells that a spreadsheet would evaluate as formulas are prefixed with a single quote.
#[test]
fn csv_cells_are_prefixed_to_avoid_formulas() {
    let ds = ChartDataset::new(
        vec!["=HYPERLINK(\"http://evil\")".into(), "@foo".into()],
        vec![Series::numbers("+SUM(A1:A9)", &[1.0, -2.0])],
    );
    let table = to_table(&ds).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.csv");
    storage::save_table_csv(&table, &path).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(&headers[1], "'+SUM(A1:A9)");
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(&rows[0][0], "'=HYPERLINK(\"http://evil\")");
    assert_eq!(&rows[1][0], "'@foo");
    // negative numbers are data, not formulas
    assert_eq!(&rows[1][1], "-2");
}
