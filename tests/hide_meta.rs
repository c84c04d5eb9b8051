use chartcfg::chart::{resolve, strip_chrome};
use chartcfg::models::{ChartDataset, SecondaryGroup, Series};

fn dataset() -> ChartDataset {
    ChartDataset::new(
        vec!["A".into(), "B".into()],
        vec![Series::numbers("Bars", &[1.0, 2.0])],
    )
    .with_secondary(SecondaryGroup::One(Series::numbers("Line", &[3.0, 4.0])))
}

#[test]
fn strips_legend_tooltip_and_labels_for_every_kind() {
    let ds = dataset();
    for kind in chartcfg::ChartKind::ALL {
        let cfg = strip_chrome(resolve(kind.tag(), &ds).unwrap());
        let o = &cfg.options;
        assert!(!o.legend.show, "{kind}");
        assert!(!o.tooltip.enabled, "{kind}");
        assert!(!o.data_labels.enabled, "{kind}");
        if let Some(x) = &o.x_axis {
            assert!(!x.labels.show && !x.axis_border.show && !x.axis_ticks.show, "{kind}");
            assert!(x.title.text.is_none(), "{kind}");
        }
        if let Some(y) = &o.y_axis {
            for axis in y.axes() {
                assert!(!axis.labels.show, "{kind}");
                assert!(!axis.axis_border.show, "{kind}");
                assert!(!axis.axis_ticks.show, "{kind}");
                assert!(axis.title.text.is_none(), "{kind}");
            }
        }
    }
}

#[test]
fn dual_axis_list_is_cleared_axis_by_axis() {
    let cfg = resolve("multibarlinechart", &dataset()).unwrap().without_chrome();
    let axes = cfg.options.y_axis.as_ref().unwrap().axes();
    assert_eq!(axes.len(), 2);
    assert!(axes.iter().all(|a| !a.labels.show && a.title.text.is_none()));
}

#[test]
fn data_is_untouched() {
    let full = resolve("barchart", &dataset()).unwrap();
    let bare = full.clone().without_chrome();
    assert_eq!(full.series, bare.series);
    assert_eq!(full.options.colors, bare.options.colors);
    assert_eq!(
        full.options.x_axis.as_ref().unwrap().categories,
        bare.options.x_axis.as_ref().unwrap().categories
    );
}
