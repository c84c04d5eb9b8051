//! Axis setup: the shared categorical x-axis and one or two value axes.

use super::format::NumberFormat;
use super::types::{AxisLabels, AxisLine, AxisTitle, TextStyle, XAxis, YAxis};

/// Categorical x-axis; categories are `labels` in order.
pub fn x_axis(labels: &[String]) -> XAxis {
    XAxis {
        categories: labels.to_vec(),
        labels: AxisLabels {
            show: true,
            style: None,
            formatter: None,
        },
        axis_border: AxisLine {
            show: true,
            color: None,
        },
        axis_ticks: AxisLine {
            show: true,
            color: None,
        },
        title: AxisTitle::default(),
    }
}

/// Value axis with the numeric tick formatter.
pub fn y_axis(title: Option<String>, number: &NumberFormat) -> YAxis {
    YAxis {
        series_name: None,
        opposite: false,
        title: AxisTitle {
            text: title,
            style: None,
        },
        labels: AxisLabels {
            show: true,
            style: None,
            formatter: Some(number.clone()),
        },
        axis_border: AxisLine {
            show: true,
            color: None,
        },
        axis_ticks: AxisLine {
            show: true,
            color: None,
        },
    }
}

/// Value axis bound to a series group and tinted with that group's color.
pub fn colored_y_axis(
    series_name: Option<&str>,
    title: Option<String>,
    color: &str,
    opposite: bool,
    number: &NumberFormat,
) -> YAxis {
    let style = Some(TextStyle {
        color: color.to_string(),
    });
    let mut axis = y_axis(title, number);
    axis.series_name = series_name.map(str::to_string);
    axis.opposite = opposite;
    axis.title.style = style.clone();
    axis.labels.style = style;
    axis.axis_border.color = Some(color.to_string());
    axis
}
