//! Reshaping input series into the renderer's series list.

use log::warn;

use super::types::{NamedSeries, SeriesType};
use crate::models::{DataValue, Scalar, Series};

/// x-coordinate for position `i`; positions past the end of `labels` use their 1-based index.
fn category_at(labels: &[String], i: usize) -> String {
    match labels.get(i) {
        Some(l) => l.clone(),
        None => {
            warn!("data point {i} has no category label, using its position");
            (i + 1).to_string()
        }
    }
}

fn named(s: &Series, series_type: Option<SeriesType>, data: Vec<DataValue>) -> NamedSeries {
    NamedSeries {
        name: s.label.clone(),
        series_type,
        data,
    }
}

/// One input series in, one renderer series out.
pub fn one_to_one(series: &[Series]) -> Vec<NamedSeries> {
    series.iter().map(|s| named(s, None, s.data.clone())).collect()
}

/// Values of the first series, for pie/donut/polar charts.
pub fn radial_values(series: &[Series]) -> Vec<Scalar> {
    series
        .first()
        .map(|s| s.data.iter().map(|d| d.value().clone()).collect())
        .unwrap_or_default()
}

/// Heatmap normalization, point by point: a bare value at `i` becomes
/// `{x: labels[i], y: value}`, a keyed pair passes through unchanged.
pub fn heatmap(series: &[Series], labels: &[String]) -> Vec<NamedSeries> {
    series
        .iter()
        .map(|s| {
            let data = s
                .data
                .iter()
                .enumerate()
                .map(|(i, d)| match d {
                    DataValue::Pair { .. } => d.clone(),
                    DataValue::Scalar(v) => DataValue::Pair {
                        x: category_at(labels, i),
                        y: v.clone(),
                    },
                })
                .collect();
            named(s, None, data)
        })
        .collect()
}

/// Categorical scatter: every label is reused as the x-coordinate of every series.
pub fn scatter(series: &[Series], labels: &[String]) -> Vec<NamedSeries> {
    series
        .iter()
        .map(|s| {
            let data = s
                .data
                .iter()
                .enumerate()
                .map(|(i, d)| DataValue::Pair {
                    x: category_at(labels, i),
                    y: d.value().clone(),
                })
                .collect();
            named(s, None, data)
        })
        .collect()
}

/// Every primary series as a bar, the first secondary series as a line.
pub fn mixed_bar_line(primary: &[Series], line: Option<&Series>) -> Vec<NamedSeries> {
    primary
        .iter()
        .map(|s| named(s, Some(SeriesType::Bar), s.data.clone()))
        .chain(line.map(|s| named(s, Some(SeriesType::Line), s.data.clone())))
        .collect()
}

/// Primary then secondary, one stack.
pub fn stacked(primary: &[Series], secondary: &[Series]) -> Vec<NamedSeries> {
    primary
        .iter()
        .chain(secondary.iter())
        .map(|s| named(s, None, s.data.clone()))
        .collect()
}
