use chartcfg::chart::colors::{OFFICE10, axis_color, colors_for};
use chartcfg::chart::{ChartResolver, ColorMode, PaletteCycle, ResolveOptions, SampledPalette};
use chartcfg::models::{ChartDataset, Series};

fn three_series() -> ChartDataset {
    ChartDataset::new(
        vec!["a".into(), "b".into()],
        vec![
            Series::numbers("A", &[1.0, 2.0]),
            Series::numbers("B", &[1.0, 2.0]),
            Series::numbers("C", &[1.0, 2.0]),
        ],
    )
}

#[test]
fn explicit_palette_is_used_verbatim() {
    let ds = three_series().with_colors(["#010101", "#020202"]);
    let cfg = chartcfg::resolve("linechart", &ds).unwrap();
    assert_eq!(cfg.options.colors, vec!["#010101", "#020202"]);
}

#[test]
fn default_fallback_cycles_the_office_palette() {
    let cfg = chartcfg::resolve("linechart", &three_series()).unwrap();
    assert_eq!(cfg.options.colors, OFFICE10[..3].to_vec());
}

#[test]
fn seeded_sampling_is_reproducible() {
    let opts = ResolveOptions {
        color_mode: ColorMode::Sampled { seed: Some(7) },
        ..ResolveOptions::default()
    };
    let r = ChartResolver::new(opts);
    let a = r.resolve("barchart", &three_series()).unwrap();
    let b = r.resolve("barchart", &three_series()).unwrap();
    assert_eq!(a.options.colors, b.options.colors);
    assert_eq!(a.options.colors.len(), 3);
    assert!(a.options.colors.iter().all(|c| OFFICE10.contains(&c.as_str())));
}

#[test]
fn injected_source_supplies_fallbacks() {
    let mut src = PaletteCycle::new(vec!["#abcdef".into()]);
    let cfg = ChartResolver::default()
        .resolve_with_source("radarchart", &three_series(), &mut src)
        .unwrap();
    assert_eq!(cfg.options.colors, vec!["#abcdef"; 3]);

    let mut sampled = SampledPalette::seeded(vec!["#000000".into()], 1);
    let ds = three_series();
    assert_eq!(colors_for(&ds, 2, &mut sampled), vec!["#000000", "#000000"]);
}

#[test]
fn pie_colors_are_per_category() {
    let cfg = chartcfg::resolve("piechart", &three_series()).unwrap();
    assert_eq!(cfg.options.colors.len(), 2);
}

#[test]
fn axis_color_falls_back_when_palette_is_short() {
    let colors = vec!["#111111".to_string()];
    assert_eq!(axis_color(Some(colors.as_slice()), 0, "#fff"), "#111111");
    assert_eq!(axis_color(Some(colors.as_slice()), 3, "#fff"), "#fff");
    assert_eq!(axis_color(None, 0, "#fff"), "#fff");
}
