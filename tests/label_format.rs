use chartcfg::chart::format::{Label, LocalLabel, NumberFormat, TooltipFormat};
use chartcfg::chart::resolve;
use chartcfg::models::{ChartDataset, DataValue, Scalar, SecondaryGroup, Series};
use num_format::Locale;

fn five_months() -> Vec<String> {
    ["Jan", "Feb", "Mar", "Apr", "May"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn it_ch_groups_thousands_and_caps_decimals() {
    let nf = NumberFormat::new("it-CH");
    let sep = Locale::it_CH.separator();
    assert_eq!(nf.format(1234.5), format!("1{sep}234.5"));
    assert_eq!(nf.format(1000.0), format!("1{sep}000"));
    assert_eq!(nf.format(0.125), "0.13");
}

#[test]
fn other_locales_use_their_own_separators() {
    assert_eq!(NumberFormat::new("en").format(1234567.891), "1,234,567.89");
    assert_eq!(NumberFormat::new("de").format(1234.5), "1.234,5");
    assert_eq!(NumberFormat::new("en").format(-1500.0), "-1,500");
}

#[test]
fn stage_two_only_touches_numbers() {
    let nf = NumberFormat::new("en");
    assert_eq!(nf.finish(LocalLabel::Number(1500.0)), Label::Text("1,500".into()));
    assert_eq!(nf.finish(LocalLabel::Raw("n/a".into())), Label::Text("n/a".into()));
    assert_eq!(nf.finish(LocalLabel::Hidden), Label::Text(String::new()));
    assert_eq!(
        nf.finish(LocalLabel::Numbers(vec![1.0, 2000.0])),
        Label::Lines(vec!["1".into(), "2,000".into()])
    );
}

#[test]
fn non_numeric_values_pass_through_unformatted() {
    assert_eq!(
        LocalLabel::from_scalar(&Scalar::Text("12.5".into())),
        LocalLabel::Number(12.5)
    );
    assert_eq!(
        LocalLabel::from_scalar(&Scalar::Text("pending".into())),
        LocalLabel::Raw("pending".into())
    );
    assert_eq!(LocalLabel::from_scalar(&Scalar::Missing), LocalLabel::Hidden);

    let tip = TooltipFormat::Number(NumberFormat::new("en"));
    assert_eq!(tip.format(&Scalar::Text("pending".into())), "pending");
}

#[test]
fn dataset_locale_drives_labels_and_default_is_it_ch() {
    let ds = ChartDataset::new(
        vec!["a".into()],
        vec![Series::numbers("A", &[1234.5])],
    );
    let cfg = resolve("barchart", &ds).unwrap();
    let sep = Locale::it_CH.separator();
    assert_eq!(cfg.data_label(0, 0).to_string(), format!("1{sep}234.5"));

    let cfg = resolve("barchart", &ds.clone().with_numeric_format("de")).unwrap();
    assert_eq!(cfg.data_label(0, 0).to_string(), "1.234,5");
    assert_eq!(cfg.tooltip_label(1234.5), "1.234,5");
    assert_eq!(cfg.axis_label(1000.0), "1.000");
}

#[test]
fn mixed_line_labels_only_its_last_point() {
    let ds = ChartDataset::new(
        five_months(),
        vec![Series::numbers("Units", &[1.0, 2.0, 3.0, 4.0, 5.0])],
    )
    .with_secondary(SecondaryGroup::Many(vec![Series::numbers(
        "Margin",
        &[10.0, 20.0, 30.0, 40.0, 50.0],
    )]))
    .with_numeric_format("en");
    let cfg = resolve("multibarlinechart", &ds).unwrap();

    for i in 0..4 {
        assert!(cfg.data_label(1, i).is_empty(), "line label at {i}");
    }
    assert_eq!(cfg.data_label(1, 4).to_string(), "50");

    for i in 0..5 {
        assert!(!cfg.data_label(0, i).is_empty(), "bar label at {i}");
    }
}

#[test]
fn percent_stacked_tooltip_ignores_locale() {
    let ds = ChartDataset::new(
        vec!["a".into()],
        vec![Series::numbers("A", &[42.5])],
    )
    .with_numeric_format("de");
    for kind in ["stackedpercentbarchart", "horizontalstackedpercentbarchart"] {
        let cfg = resolve(kind, &ds).unwrap();
        assert_eq!(cfg.tooltip_label(42.5), "42.50%");
        // data labels still follow the dataset locale
        assert_eq!(cfg.axis_label(1234.5), "1.234,5");
    }

    let plain = resolve("stackedbarchart", &ds).unwrap();
    assert_eq!(plain.tooltip_label(42.5), "42,5");
}

#[test]
fn axis_formatter_is_shared_by_both_axes() {
    let ds = ChartDataset::new(vec!["a".into()], vec![Series::numbers("A", &[1.0])])
        .with_secondary(SecondaryGroup::One(Series::numbers("B", &[2.0])))
        .with_numeric_format("en");
    let cfg = resolve("multibarlinechart", &ds).unwrap();
    let axes = cfg.options.y_axis.as_ref().unwrap().axes();
    assert_eq!(axes.len(), 2);
    assert_eq!(axes[0].labels.formatter, axes[1].labels.formatter);
    assert_eq!(axes[0].labels.formatter.as_ref().unwrap().locale, "en");
}

#[test]
fn category_label_lists_every_series_value() {
    let ds = ChartDataset::new(
        vec!["a".into(), "b".into()],
        vec![
            Series::numbers("A", &[1000.0, 1.0]),
            Series::new("B", vec![DataValue::from(2.5), DataValue::Scalar(Scalar::Missing)]),
        ],
    )
    .with_numeric_format("en");
    let cfg = resolve("stackedbarchart", &ds).unwrap();
    assert_eq!(
        cfg.category_label(0),
        Label::Lines(vec!["1,000".into(), "2.5".into()])
    );
    assert_eq!(cfg.category_label(1).to_string(), "1");
}

#[test]
fn missing_values_give_empty_labels() {
    let ds = ChartDataset::new(
        vec!["a".into(), "b".into()],
        vec![Series::new("A", vec![DataValue::from(1.0), DataValue::Scalar(Scalar::Missing)])],
    );
    let cfg = resolve("linechart", &ds).unwrap();
    assert!(cfg.data_label(0, 1).is_empty());
    assert!(cfg.data_label(5, 0).is_empty());
}

#[test]
fn labels_round_the_stored_value_not_a_rescaled_copy() {
    let ds = ChartDataset::new(
        vec!["a".into(), "b".into(), "c".into()],
        vec![Series::numbers("A", &[1.115, 2.675, 0.125])],
    )
    .with_numeric_format("en");
    let cfg = resolve("linechart", &ds).unwrap();
    assert_eq!(cfg.data_label(0, 0).to_string(), "1.11");
    assert_eq!(cfg.data_label(0, 1).to_string(), "2.67");
    assert_eq!(cfg.data_label(0, 2).to_string(), "0.13");
    assert_eq!(cfg.tooltip_label(2.675), "2.67");
}
