//! Strategy table: one archetype per family of chart kinds.
//!
//! Each archetype decides how series, colors and axes are built. The resolver
//! composes them; adding a chart kind means adding (or reusing) an archetype here.

use super::axis::{colored_y_axis, x_axis, y_axis};
use super::colors::{ColorSource, OFFICE10, axis_color, colors_for};
use super::format::{LocalRule, LocalRules, NumberFormat};
use super::series;
use super::types::{
    BarOptions, ChartKind, PlotOptions, SeriesOutput, StackType, Stroke, XAxis, YAxisSpec,
};
use crate::models::{ChartDataset, Series};

/// Inputs shared by every build step of one resolution.
pub struct BuildContext<'a> {
    pub kind: ChartKind,
    pub dataset: &'a ChartDataset,
    pub labels: &'a [String],
    pub primary: &'a [Series],
    pub secondary: &'a [Series],
    pub number: NumberFormat,
    pub secondary_fallback: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct Axes {
    pub x: Option<XAxis>,
    pub y: Option<YAxisSpec>,
}

pub trait Archetype: Sync {
    fn build_series(&self, ctx: &BuildContext<'_>) -> SeriesOutput;

    fn build_colors(&self, ctx: &BuildContext<'_>, source: &mut dyn ColorSource) -> Vec<String>;

    /// Axes are built after colors so dual-axis charts can tint them.
    fn build_axes(&self, ctx: &BuildContext<'_>, colors: &[String]) -> Axes;

    fn label_rules(&self, _ctx: &BuildContext<'_>) -> LocalRules {
        LocalRules::Uniform(LocalRule::Value)
    }

    fn plot_options(&self, _ctx: &BuildContext<'_>) -> Option<PlotOptions> {
        None
    }

    fn slice_labels(&self, _ctx: &BuildContext<'_>) -> Option<Vec<String>> {
        None
    }

    fn stacking(&self, _ctx: &BuildContext<'_>) -> Option<StackType> {
        None
    }

    fn stroke(&self, _ctx: &BuildContext<'_>) -> Option<Stroke> {
        None
    }
}

/// Look up the archetype for a chart kind.
pub fn strategy_for(kind: ChartKind) -> &'static dyn Archetype {
    match kind {
        ChartKind::Bar | ChartKind::HorizontalBar | ChartKind::Line | ChartKind::Radar => &Cartesian,
        ChartKind::Pie | ChartKind::Donut | ChartKind::Polar => &Radial,
        ChartKind::Heatmap => &Heatmap,
        ChartKind::Scatter => &Scatter,
        ChartKind::MixedBarLine => &MixedBarLine,
        ChartKind::StackedBar
        | ChartKind::StackedPercentBar
        | ChartKind::HorizontalStackedBar
        | ChartKind::HorizontalStackedPercentBar => &Stacked,
    }
}

/// First dataset label, used as the value-axis title.
fn first_label_title(ctx: &BuildContext<'_>) -> Option<String> {
    ctx.primary.first().map(|s| s.label.clone())
}

fn single_axis(ctx: &BuildContext<'_>, title: Option<String>) -> Axes {
    Axes {
        x: Some(x_axis(ctx.labels)),
        y: Some(YAxisSpec::Single(y_axis(title, &ctx.number))),
    }
}

// ------------------------ Bar / horizontal bar / line / radar ------------------------

struct Cartesian;

impl Cartesian {
    /// A lone horizontal bar series is colored per category.
    fn distributed(ctx: &BuildContext<'_>) -> bool {
        ctx.kind == ChartKind::HorizontalBar && ctx.primary.len() == 1
    }
}

impl Archetype for Cartesian {
    fn build_series(&self, ctx: &BuildContext<'_>) -> SeriesOutput {
        SeriesOutput::Named(series::one_to_one(ctx.primary))
    }

    fn build_colors(&self, ctx: &BuildContext<'_>, source: &mut dyn ColorSource) -> Vec<String> {
        let slots = if Self::distributed(ctx) {
            ctx.labels.len()
        } else {
            ctx.primary.len()
        };
        colors_for(ctx.dataset, slots, source)
    }

    fn build_axes(&self, ctx: &BuildContext<'_>, _colors: &[String]) -> Axes {
        let title = match ctx.kind {
            ChartKind::Radar => None,
            _ => first_label_title(ctx),
        };
        single_axis(ctx, title)
    }

    fn plot_options(&self, ctx: &BuildContext<'_>) -> Option<PlotOptions> {
        match ctx.kind {
            ChartKind::Bar | ChartKind::HorizontalBar => Some(PlotOptions {
                bar: BarOptions {
                    horizontal: ctx.kind.is_horizontal(),
                    distributed: Self::distributed(ctx),
                },
            }),
            _ => None,
        }
    }
}

// ------------------------ Pie / donut / polar ------------------------

struct Radial;

impl Archetype for Radial {
    fn build_series(&self, ctx: &BuildContext<'_>) -> SeriesOutput {
        SeriesOutput::Values(series::radial_values(ctx.primary))
    }

    fn build_colors(&self, ctx: &BuildContext<'_>, source: &mut dyn ColorSource) -> Vec<String> {
        colors_for(ctx.dataset, ctx.labels.len(), source)
    }

    fn build_axes(&self, _ctx: &BuildContext<'_>, _colors: &[String]) -> Axes {
        Axes::default()
    }

    fn slice_labels(&self, ctx: &BuildContext<'_>) -> Option<Vec<String>> {
        Some(ctx.labels.to_vec())
    }
}

// ------------------------ Heatmap ------------------------

struct Heatmap;

impl Archetype for Heatmap {
    fn build_series(&self, ctx: &BuildContext<'_>) -> SeriesOutput {
        SeriesOutput::Named(series::heatmap(ctx.primary, ctx.labels))
    }

    fn build_colors(&self, ctx: &BuildContext<'_>, source: &mut dyn ColorSource) -> Vec<String> {
        colors_for(ctx.dataset, ctx.primary.len(), source)
    }

    fn build_axes(&self, ctx: &BuildContext<'_>, _colors: &[String]) -> Axes {
        single_axis(ctx, None)
    }
}

// ------------------------ Scatter ------------------------

struct Scatter;

impl Archetype for Scatter {
    fn build_series(&self, ctx: &BuildContext<'_>) -> SeriesOutput {
        SeriesOutput::Named(series::scatter(ctx.primary, ctx.labels))
    }

    fn build_colors(&self, ctx: &BuildContext<'_>, source: &mut dyn ColorSource) -> Vec<String> {
        colors_for(ctx.dataset, ctx.primary.len(), source)
    }

    fn build_axes(&self, ctx: &BuildContext<'_>, _colors: &[String]) -> Axes {
        single_axis(ctx, None)
    }
}

// ------------------------ Mixed bar + line ------------------------

struct MixedBarLine;

impl MixedBarLine {
    fn line<'a>(ctx: &BuildContext<'a>) -> Option<&'a Series> {
        ctx.secondary.first()
    }
}

impl Archetype for MixedBarLine {
    fn build_series(&self, ctx: &BuildContext<'_>) -> SeriesOutput {
        SeriesOutput::Named(series::mixed_bar_line(ctx.primary, Self::line(ctx)))
    }

    /// Explicit palette kept verbatim; missing bar slots are drawn from `source` and a
    /// missing line slot gets the secondary-axis fallback, so series and axes agree.
    fn build_colors(&self, ctx: &BuildContext<'_>, source: &mut dyn ColorSource) -> Vec<String> {
        let mut colors = ctx.dataset.colors.clone().unwrap_or_default();
        while colors.len() < ctx.primary.len() {
            colors.push(source.next_color());
        }
        if Self::line(ctx).is_some() && colors.len() == ctx.primary.len() {
            colors.push(ctx.secondary_fallback.to_string());
        }
        colors
    }

    fn build_axes(&self, ctx: &BuildContext<'_>, colors: &[String]) -> Axes {
        let mut axes = Vec::with_capacity(2);
        if let Some(first) = ctx.primary.first() {
            let title = (ctx.primary.len() == 1).then(|| first.label.clone());
            let color = axis_color(Some(colors), 0, OFFICE10[0]);
            axes.push(colored_y_axis(
                Some(first.label.as_str()),
                title,
                &color,
                false,
                &ctx.number,
            ));
        }
        if let Some(line) = Self::line(ctx) {
            let color = axis_color(Some(colors), ctx.primary.len(), ctx.secondary_fallback);
            axes.push(colored_y_axis(
                Some(line.label.as_str()),
                Some(line.label.clone()),
                &color,
                !axes.is_empty(),
                &ctx.number,
            ));
        }
        let y = match axes.len() {
            0 => None,
            1 => axes.pop().map(YAxisSpec::Single),
            _ => Some(YAxisSpec::Multiple(axes)),
        };
        Axes {
            x: Some(x_axis(ctx.labels)),
            y,
        }
    }

    /// Bars label every point; the line labels only its last point.
    fn label_rules(&self, ctx: &BuildContext<'_>) -> LocalRules {
        let mut rules = vec![LocalRule::Value; ctx.primary.len()];
        if Self::line(ctx).is_some() {
            rules.push(LocalRule::LastPointOnly);
        }
        LocalRules::PerSeries(rules)
    }

    fn plot_options(&self, _ctx: &BuildContext<'_>) -> Option<PlotOptions> {
        Some(PlotOptions {
            bar: BarOptions {
                horizontal: false,
                distributed: false,
            },
        })
    }

    fn stroke(&self, ctx: &BuildContext<'_>) -> Option<Stroke> {
        let mut width = vec![0; ctx.primary.len()];
        if Self::line(ctx).is_some() {
            width.push(3);
        }
        Some(Stroke { width })
    }
}

// ------------------------ Stacked bars (plain / percent, vertical / horizontal) ------------------------

struct Stacked;

impl Archetype for Stacked {
    fn build_series(&self, ctx: &BuildContext<'_>) -> SeriesOutput {
        SeriesOutput::Named(series::stacked(ctx.primary, ctx.secondary))
    }

    fn build_colors(&self, ctx: &BuildContext<'_>, source: &mut dyn ColorSource) -> Vec<String> {
        colors_for(ctx.dataset, ctx.primary.len() + ctx.secondary.len(), source)
    }

    fn build_axes(&self, ctx: &BuildContext<'_>, _colors: &[String]) -> Axes {
        single_axis(ctx, first_label_title(ctx))
    }

    fn plot_options(&self, ctx: &BuildContext<'_>) -> Option<PlotOptions> {
        Some(PlotOptions {
            bar: BarOptions {
                horizontal: ctx.kind.is_horizontal(),
                distributed: false,
            },
        })
    }

    fn stacking(&self, ctx: &BuildContext<'_>) -> Option<StackType> {
        if ctx.kind.is_percent_stacked() {
            Some(StackType::Full)
        } else {
            Some(StackType::Normal)
        }
    }
}
