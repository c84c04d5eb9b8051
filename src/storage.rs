use crate::chart::Configuration;
use crate::error::ErrorMarker;
use crate::models::ChartDataset;
use crate::table::TableView;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Read a dataset from a JSON file.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<ChartDataset> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let ds = serde_json::from_reader(f).with_context(|| format!("parsing {}", path.display()))?;
    Ok(ds)
}

/// Save a configuration as pretty JSON.
pub fn save_configuration_json<P: AsRef<Path>>(config: &Configuration, path: P) -> Result<()> {
    write_pretty(config, path.as_ref())
}

/// Save an error marker as pretty JSON, in place of a configuration.
pub fn save_marker_json<P: AsRef<Path>>(marker: &ErrorMarker, path: P) -> Result<()> {
    write_pretty(marker, path.as_ref())
}

/// Prefix cells that a spreadsheet would evaluate as a formula with a single quote.
/// Negative numbers are left alone.
fn csv_safe(cell: &str) -> Cow<'_, str> {
    let risky = match cell.chars().next() {
        Some('=' | '+' | '@' | '\t' | '\r') => true,
        Some('-') => cell.parse::<f64>().is_err(),
        _ => false,
    };
    if risky {
        Cow::Owned(format!("'{cell}"))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Save a table view as CSV with header.
pub fn save_table_csv<P: AsRef<Path>>(table: &TableView, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(table.header.iter().map(|c| csv_safe(c).into_owned()))?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(|c| csv_safe(c).into_owned()))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save a table view as pretty JSON (`{header, rows}`).
pub fn save_table_json<P: AsRef<Path>>(table: &TableView, path: P) -> Result<()> {
    write_pretty(table, path.as_ref())
}

fn write_pretty<T: serde::Serialize>(value: &T, path: &Path) -> Result<()> {
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let s = serde_json::to_string_pretty(value)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Series;
    use crate::table::to_table;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let ds = ChartDataset::new(
            vec!["Q1".into(), "Q2".into()],
            vec![Series::numbers("Sales", &[100.0, 200.0])],
        );
        let table = to_table(&ds).unwrap();
        save_table_csv(&table, &csvp).unwrap();
        save_table_json(&table, &jsonp).unwrap();
        let csv_text = std::fs::read_to_string(&csvp).unwrap();
        assert_eq!(csv_text, "Label,Sales\nQ1,100\nQ2,200\n");
        assert!(jsonp.exists());
    }
}
