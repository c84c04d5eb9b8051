//! Public types for the chart engine: chart kinds and the renderer option tree.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::format::{LabelFormatter, NumberFormat, TooltipFormat};
use crate::error::ChartError;
use crate::models::{DataValue, Scalar};

/// Chart archetypes understood by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Vertical bars, one bar series per dataset.
    Bar,
    /// Horizontal bars; a single series is colored per category.
    HorizontalBar,
    Line,
    Pie,
    Donut,
    /// Polar area chart.
    Polar,
    Radar,
    /// Heatmap; every point is normalized to `{x, y}`.
    Heatmap,
    /// Categorical scatter: labels are reused as x for every series.
    Scatter,
    /// Bars for the primary group, one line for the secondary group, dual y-axis.
    MixedBarLine,
    StackedBar,
    StackedPercentBar,
    HorizontalStackedBar,
    HorizontalStackedPercentBar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 14] = [
        ChartKind::Bar,
        ChartKind::HorizontalBar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Donut,
        ChartKind::Polar,
        ChartKind::Radar,
        ChartKind::Heatmap,
        ChartKind::Scatter,
        ChartKind::MixedBarLine,
        ChartKind::StackedBar,
        ChartKind::StackedPercentBar,
        ChartKind::HorizontalStackedBar,
        ChartKind::HorizontalStackedPercentBar,
    ];

    /// Canonical tag as sent by the dashboard layer.
    pub fn tag(self) -> &'static str {
        match self {
            ChartKind::Bar => "barchart",
            ChartKind::HorizontalBar => "horizontalbarchart",
            ChartKind::Line => "linechart",
            ChartKind::Pie => "piechart",
            ChartKind::Donut => "donutchart",
            ChartKind::Polar => "polarchart",
            ChartKind::Radar => "radarchart",
            ChartKind::Heatmap => "heatmapchart",
            ChartKind::Scatter => "scatterchart",
            ChartKind::MixedBarLine => "multibarlinechart",
            ChartKind::StackedBar => "stackedbarchart",
            ChartKind::StackedPercentBar => "stackedpercentbarchart",
            ChartKind::HorizontalStackedBar => "horizontalstackedbarchart",
            ChartKind::HorizontalStackedPercentBar => "horizontalstackedpercentbarchart",
        }
    }

    /// Short hyphenated alias (`bar`, `horizontal-bar`, ...).
    pub fn alias(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::HorizontalBar => "horizontal-bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Donut => "donut",
            ChartKind::Polar => "polar",
            ChartKind::Radar => "radar",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Scatter => "scatter",
            ChartKind::MixedBarLine => "mixed-bar-line",
            ChartKind::StackedBar => "stacked-bar",
            ChartKind::StackedPercentBar => "stacked-percent-bar",
            ChartKind::HorizontalStackedBar => "horizontal-stacked-bar",
            ChartKind::HorizontalStackedPercentBar => "horizontal-stacked-percent-bar",
        }
    }

    pub fn renderer_kind(self) -> RendererKind {
        match self {
            ChartKind::Bar
            | ChartKind::HorizontalBar
            | ChartKind::StackedBar
            | ChartKind::StackedPercentBar
            | ChartKind::HorizontalStackedBar
            | ChartKind::HorizontalStackedPercentBar => RendererKind::Bar,
            ChartKind::Line | ChartKind::MixedBarLine => RendererKind::Line,
            ChartKind::Pie => RendererKind::Pie,
            ChartKind::Donut => RendererKind::Donut,
            ChartKind::Polar => RendererKind::PolarArea,
            ChartKind::Radar => RendererKind::Radar,
            ChartKind::Heatmap => RendererKind::Heatmap,
            ChartKind::Scatter => RendererKind::Scatter,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(
            self,
            ChartKind::HorizontalBar
                | ChartKind::HorizontalStackedBar
                | ChartKind::HorizontalStackedPercentBar
        )
    }

    pub fn is_stacked(self) -> bool {
        matches!(
            self,
            ChartKind::StackedBar
                | ChartKind::StackedPercentBar
                | ChartKind::HorizontalStackedBar
                | ChartKind::HorizontalStackedPercentBar
        )
    }

    pub fn is_percent_stacked(self) -> bool {
        matches!(
            self,
            ChartKind::StackedPercentBar | ChartKind::HorizontalStackedPercentBar
        )
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        ChartKind::ALL
            .into_iter()
            .find(|k| k.tag() == tag || k.alias() == tag)
            .ok_or_else(|| ChartError::UnsupportedChartType(s.to_string()))
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Chart `type` understood by the declarative renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RendererKind {
    Bar,
    Line,
    Pie,
    Donut,
    PolarArea,
    Radar,
    Heatmap,
    Scatter,
}

/// Per-series type tag, used by mixed charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Bar,
    Line,
}

/// A named series in renderer form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub series_type: Option<SeriesType>,
    pub data: Vec<DataValue>,
}

/// Renderer series: named series for cartesian/radar charts, bare values for radial charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesOutput {
    Named(Vec<NamedSeries>),
    Values(Vec<Scalar>),
}

impl SeriesOutput {
    /// Number of plotted series; a radial chart with values counts as one.
    pub fn len(&self) -> usize {
        match self {
            SeriesOutput::Named(v) => v.len(),
            SeriesOutput::Values(v) => usize::from(!v.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            SeriesOutput::Named(v) => v.is_empty(),
            SeriesOutput::Values(v) => v.is_empty(),
        }
    }

    pub fn named(&self) -> &[NamedSeries] {
        match self {
            SeriesOutput::Named(v) => v,
            SeriesOutput::Values(_) => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StackType {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "100%")]
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: RendererKind,
    pub stacked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_type: Option<StackType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleOptions {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BarOptions {
    pub horizontal: bool,
    pub distributed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlotOptions {
    pub bar: BarOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabels {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<NumberFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLine {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AxisTitle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

/// Shared categorical axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    pub categories: Vec<String>,
    pub labels: AxisLabels,
    pub axis_border: AxisLine,
    pub axis_ticks: AxisLine,
    pub title: AxisTitle,
}

/// One value axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_name: Option<String>,
    pub opposite: bool,
    pub title: AxisTitle,
    pub labels: AxisLabels,
    pub axis_border: AxisLine,
    pub axis_ticks: AxisLine,
}

/// A single value axis or an ordered list (`[primary, secondary]` for dual-axis charts).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum YAxisSpec {
    Single(YAxis),
    Multiple(Vec<YAxis>),
}

impl YAxisSpec {
    pub fn axes(&self) -> Vec<&YAxis> {
        match self {
            YAxisSpec::Single(a) => vec![a],
            YAxisSpec::Multiple(v) => v.iter().collect(),
        }
    }

    pub fn axes_mut(&mut self) -> Vec<&mut YAxis> {
        match self {
            YAxisSpec::Single(a) => vec![a],
            YAxisSpec::Multiple(v) => v.iter_mut().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataLabels {
    pub enabled: bool,
    pub formatter: LabelFormatter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub enabled: bool,
    pub y: TooltipFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stroke {
    pub width: Vec<u32>,
}

/// Full renderer option tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub chart: ChartSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_options: Option<PlotOptions>,
    #[serde(rename = "xaxis", skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<XAxis>,
    #[serde(rename = "yaxis", skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<YAxisSpec>,
    pub data_labels: DataLabels,
    pub tooltip: Tooltip,
    pub legend: Legend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
}
