//! Chart configuration engine: dataset + chart kind in, renderer configuration out.
//!
//! - Fourteen chart kinds grouped into six archetypes (cartesian, radial, heatmap, scatter,
//!   mixed bar+line, stacked)
//! - Explicit palettes or pluggable fallback color sources
//! - Locale-aware data labels, tooltips and axis ticks
//! - Inline error markers instead of panics for malformed input or unknown kinds
//!
//! The transformation is synchronous and side-effect free; every call works on its own data.

pub mod archetype;
pub mod axis;
pub mod chrome;
pub mod colors;
pub mod format;
pub mod series;
pub mod types;

// Re-export types for public API
pub use chrome::strip_chrome;
pub use colors::{ColorSource, PaletteCycle, SampledPalette};
pub use format::{DEFAULT_LOCALE, Label, LabelFormatter, LocalLabel, LocalRule, NumberFormat};
pub use types::{ChartKind, ChartOptions, NamedSeries, RendererKind, SeriesOutput, SeriesType};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use archetype::{BuildContext, strategy_for};
use colors::{SECONDARY_AXIS_FALLBACK, office_palette};
use format::TooltipFormat;
use types::{ChartSection, DataLabels, Legend, TitleOptions, Tooltip};

use crate::error::{ChartError, ChartResult};
use crate::models::{ChartDataset, DataValue, Scalar, Series};

/// How fallback colors are produced when a dataset has no palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorMode {
    /// Next palette entry, wrapping. Deterministic.
    Cycle,
    /// Sampling with replacement. Reproducible only with a seed.
    Sampled { seed: Option<u64> },
}

/// Resolver settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Locale for datasets without `numeric_format`.
    pub default_locale: String,
    pub palette: Vec<String>,
    pub color_mode: ColorMode,
    /// Color of the secondary axis when the palette has no entry for it.
    pub secondary_fallback: String,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            palette: office_palette(),
            color_mode: ColorMode::Cycle,
            secondary_fallback: SECONDARY_AXIS_FALLBACK.to_string(),
        }
    }
}

/// Finished renderer configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub chart_kind: RendererKind,
    pub series: SeriesOutput,
    pub options: ChartOptions,
}

impl Configuration {
    /// Data label for point `index` of series `series_index`; empty when suppressed.
    pub fn data_label(&self, series_index: usize, index: usize) -> Label {
        let (value, len) = match &self.series {
            SeriesOutput::Named(list) => match list.get(series_index) {
                Some(s) => (s.data.get(index).map(DataValue::value), s.data.len()),
                None => (None, 0),
            },
            SeriesOutput::Values(values) => (values.get(index), values.len()),
        };
        match value {
            Some(v) => self.options.data_labels.formatter.format(series_index, index, len, v),
            None => Label::Text(String::new()),
        }
    }

    /// Tooltip text for a hovered value.
    pub fn tooltip_label(&self, value: impl Into<Scalar>) -> String {
        self.options.tooltip.y.format(&value.into())
    }

    /// Value-axis tick label; identical for every axis of a dual-axis chart.
    pub fn axis_label(&self, value: impl Into<Scalar>) -> String {
        let nf = &self.options.data_labels.formatter.number;
        nf.finish(LocalLabel::from_scalar(&value.into())).to_string()
    }

    /// Multi-point label for bar-type charts: every series' value at category `index`.
    /// Entries without a numeric value are skipped.
    pub fn category_label(&self, index: usize) -> Label {
        let values: Vec<f64> = match &self.series {
            SeriesOutput::Named(list) => list
                .iter()
                .filter_map(|s| s.data.get(index))
                .filter_map(|d| d.value().as_f64())
                .collect(),
            SeriesOutput::Values(values) => values.get(index).and_then(Scalar::as_f64).into_iter().collect(),
        };
        let nf = &self.options.data_labels.formatter.number;
        nf.finish(LocalLabel::Numbers(values))
    }

    /// Compact preview variant without legend, tooltip, data labels or axis chrome.
    pub fn without_chrome(self) -> Self {
        strip_chrome(self)
    }
}

/// Dispatches a chart kind to its archetype and assembles the configuration.
#[derive(Debug, Clone, Default)]
pub struct ChartResolver {
    options: ResolveOptions,
}

impl ChartResolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    /// Resolve with the configured color mode.
    pub fn resolve(&self, kind: &str, dataset: &ChartDataset) -> ChartResult<Configuration> {
        let mut source: Box<dyn ColorSource> = match self.options.color_mode {
            ColorMode::Cycle => Box::new(PaletteCycle::new(self.options.palette.clone())),
            ColorMode::Sampled { seed: Some(seed) } => {
                Box::new(SampledPalette::seeded(self.options.palette.clone(), seed))
            }
            ColorMode::Sampled { seed: None } => {
                Box::new(SampledPalette::from_entropy(self.options.palette.clone()))
            }
        };
        self.resolve_with_source(kind, dataset, source.as_mut())
    }

    /// Resolve untyped JSON; anything that does not parse as a dataset is malformed input.
    pub fn resolve_json(&self, kind: &str, value: &serde_json::Value) -> ChartResult<Configuration> {
        kind.parse::<ChartKind>()?;
        let dataset = ChartDataset::deserialize(value)
            .map_err(|e| ChartError::MalformedInput(format!("dataset does not parse: {e}")))?;
        self.resolve(kind, &dataset)
    }

    /// Resolve drawing fallback colors from `source`.
    pub fn resolve_with_source(
        &self,
        kind: &str,
        dataset: &ChartDataset,
        source: &mut dyn ColorSource,
    ) -> ChartResult<Configuration> {
        let kind: ChartKind = kind.parse()?;
        let labels = dataset
            .labels
            .as_deref()
            .ok_or_else(|| ChartError::MalformedInput("missing labels".into()))?;
        let primary = dataset
            .datasets
            .as_deref()
            .ok_or_else(|| ChartError::MalformedInput("missing datasets".into()))?;
        let secondary = dataset.secondary();
        check_lengths(labels, primary.iter().chain(secondary.iter()));

        let locale = dataset
            .numeric_format
            .clone()
            .unwrap_or_else(|| self.options.default_locale.clone());
        let ctx = BuildContext {
            kind,
            dataset,
            labels,
            primary,
            secondary,
            number: NumberFormat::new(locale),
            secondary_fallback: &self.options.secondary_fallback,
        };
        debug!(
            "resolving {kind} with {} primary / {} secondary series over {} categories",
            primary.len(),
            secondary.len(),
            labels.len()
        );

        let strategy = strategy_for(kind);
        let series = strategy.build_series(&ctx);
        let colors = strategy.build_colors(&ctx, source);
        let axes = strategy.build_axes(&ctx, &colors);
        let stack_type = strategy.stacking(&ctx);

        let tooltip = if kind.is_percent_stacked() {
            TooltipFormat::FixedPercent { decimals: 2 }
        } else {
            TooltipFormat::Number(ctx.number.clone())
        };

        let options = ChartOptions {
            chart: ChartSection {
                id: dataset.id.clone(),
                kind: kind.renderer_kind(),
                stacked: kind.is_stacked(),
                stack_type,
            },
            title: dataset.name.clone().map(|text| TitleOptions { text }),
            labels: strategy.slice_labels(&ctx),
            colors,
            plot_options: strategy.plot_options(&ctx),
            x_axis: axes.x,
            y_axis: axes.y,
            data_labels: DataLabels {
                enabled: true,
                formatter: LabelFormatter {
                    local: strategy.label_rules(&ctx),
                    number: ctx.number.clone(),
                },
            },
            tooltip: Tooltip {
                enabled: true,
                y: tooltip,
            },
            legend: Legend { show: true },
            stroke: strategy.stroke(&ctx),
        };

        Ok(Configuration {
            chart_kind: kind.renderer_kind(),
            series,
            options,
        })
    }
}

/// Tolerated anomalies: logged, never fatal.
fn check_lengths<'a>(labels: &[String], series: impl Iterator<Item = &'a Series>) {
    for s in series {
        if s.has_pairs() {
            for d in &s.data {
                if let DataValue::Pair { x, .. } = d
                    && !labels.contains(x)
                {
                    warn!("series {:?}: x value {x:?} is not a category label", s.label);
                }
            }
        } else if s.data.len() != labels.len() {
            warn!(
                "series {:?} has {} values for {} categories",
                s.label,
                s.data.len(),
                labels.len()
            );
        }
    }
}

/// Resolve with default options.
pub fn resolve(kind: &str, dataset: &ChartDataset) -> ChartResult<Configuration> {
    ChartResolver::default().resolve(kind, dataset)
}

/// Resolve untyped JSON with default options.
pub fn resolve_json(kind: &str, value: &serde_json::Value) -> ChartResult<Configuration> {
    ChartResolver::default().resolve_json(kind, value)
}
