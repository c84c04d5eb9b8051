use chartcfg::models::{ChartDataset, DataValue, Scalar, SecondaryGroup};

#[test]
fn id_accepts_string_or_number() {
    let ds: ChartDataset = serde_json::from_str(r#"{"id": 17, "labels": [], "datasets": []}"#).unwrap();
    assert_eq!(ds.id.as_deref(), Some("17"));
    let ds: ChartDataset = serde_json::from_str(r#"{"id": "w-3"}"#).unwrap();
    assert_eq!(ds.id.as_deref(), Some("w-3"));
    let ds: ChartDataset = serde_json::from_str(r#"{"id": null}"#).unwrap();
    assert_eq!(ds.id, None);
}

#[test]
fn missing_fields_stay_none() {
    let ds: ChartDataset = serde_json::from_str(r#"{"name": "Empty"}"#).unwrap();
    assert_eq!(ds.labels, None);
    assert_eq!(ds.datasets, None);
    assert!(ds.secondary().is_empty());
}

#[test]
fn secondary_group_accepts_object_or_array() {
    let one: ChartDataset = serde_json::from_str(
        r#"{"labels": ["a"], "datasets": [], "datasets2": {"label": "L", "data": [1]}}"#,
    )
    .unwrap();
    assert!(matches!(one.datasets2, Some(SecondaryGroup::One(_))));
    assert_eq!(one.secondary().len(), 1);

    let many: ChartDataset = serde_json::from_str(
        r#"{"labels": ["a"], "datasets": [],
            "datasets2": [{"label": "L1", "data": [1]}, {"label": "L2", "data": [2]}]}"#,
    )
    .unwrap();
    assert_eq!(many.secondary().len(), 2);
    assert_eq!(many.datasets2.unwrap().first().unwrap().label, "L1");
}

#[test]
fn data_entries_may_mix_shapes() {
    let ds: ChartDataset = serde_json::from_str(
        r##"{
          "labels": ["Jan", "Feb", "Mar", "Apr"],
          "datasets": [{"label": "S", "data": [10, {"x": "Feb", "y": 20.5}, null, "7"]}],
          "colors": ["#123456"],
          "numeric_format": "de-CH"
        }"##,
    )
    .unwrap();
    let data = &ds.datasets.as_ref().unwrap()[0].data;
    assert_eq!(data[0], DataValue::from(10.0));
    assert_eq!(data[1], DataValue::pair("Feb", 20.5));
    assert_eq!(data[2], DataValue::Scalar(Scalar::Missing));
    assert_eq!(data[3].value().as_f64(), Some(7.0));
    assert_eq!(ds.numeric_format.as_deref(), Some("de-CH"));
}

#[test]
fn category_lookup_takes_first_match() {
    let ds: ChartDataset = serde_json::from_str(
        r#"{"labels": ["a"], "datasets": [{"label": "S",
            "data": [{"x": "a", "y": 1}, {"x": "a", "y": 2}]}]}"#,
    )
    .unwrap();
    let s = &ds.datasets.unwrap()[0];
    let index = s.category_index();
    assert_eq!(index.get("a").copied(), Some(&Scalar::Number(1.0)));
    assert_eq!(index.get("b"), None);
}
