//! Tabular (transposed) view of a dataset: one row per category, one column per series.
//!
//! Plain series are read by position. Keyed series are read by matching `x` against the
//! row's category label (first match wins); a category with no match renders blank.
//! This differs on purpose from the heatmap path, which wraps bare values by position.

use ahash::AHashMap;
use serde::Serialize;

use crate::error::{ChartError, ChartResult};
use crate::models::{ChartDataset, DataValue, Scalar, Series};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Header of the leading category column.
    pub category_label: String,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            category_label: "Label".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Column reader for one series.
enum Column<'a> {
    Positional(&'a [DataValue]),
    Keyed(AHashMap<&'a str, &'a Scalar>),
}

impl<'a> Column<'a> {
    fn new(series: &'a Series) -> Self {
        if series.has_pairs() {
            Column::Keyed(series.category_index())
        } else {
            Column::Positional(&series.data)
        }
    }

    fn cell(&self, row: usize, category: &str) -> String {
        let value = match self {
            Column::Positional(data) => data.get(row).map(DataValue::value),
            Column::Keyed(by_x) => by_x.get(category).copied(),
        };
        value.map(Scalar::to_string).unwrap_or_default()
    }
}

/// Table view with default options.
pub fn to_table(dataset: &ChartDataset) -> ChartResult<TableView> {
    to_table_with(dataset, &TableOptions::default())
}

/// Header is `[category, ...primary labels, ...secondary labels]`; rows follow `labels`.
pub fn to_table_with(dataset: &ChartDataset, opts: &TableOptions) -> ChartResult<TableView> {
    let labels = dataset
        .labels
        .as_deref()
        .ok_or_else(|| ChartError::MalformedInput("missing labels".into()))?;
    let primary = dataset
        .datasets
        .as_deref()
        .ok_or_else(|| ChartError::MalformedInput("missing datasets".into()))?;

    let all: Vec<&Series> = primary.iter().chain(dataset.secondary().iter()).collect();

    let mut header = Vec::with_capacity(all.len() + 1);
    header.push(opts.category_label.clone());
    header.extend(all.iter().map(|s| s.label.clone()));

    let columns: Vec<Column<'_>> = all.iter().map(|s| Column::new(s)).collect();
    let rows = labels
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let mut row = Vec::with_capacity(columns.len() + 1);
            row.push(category.clone());
            row.extend(columns.iter().map(|c| c.cell(i, category)));
            row
        })
        .collect();

    Ok(TableView { header, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_column_keeps_first_match() {
        let s = Series::new(
            "A",
            vec![DataValue::pair("Jan", 1.0), DataValue::pair("Jan", 2.0)],
        );
        let col = Column::new(&s);
        assert_eq!(col.cell(0, "Jan"), "1");
        assert_eq!(col.cell(0, "Feb"), "");
    }
}
