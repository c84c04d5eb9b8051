//! chartcfg
//!
//! A small Rust library that turns an abstract, chart-type-agnostic dataset into a complete
//! configuration for a declarative chart renderer, plus a transposed table view of the same
//! data. Pairs with the `chartcfg` CLI.
//!
//! ### Features
//! - Fourteen chart kinds: bar, horizontal bar, line, pie, donut, polar, radar, heatmap,
//!   scatter, mixed bar+line (dual axis), and four stacked bar variants
//! - Explicit palettes or pluggable fallback color sources
//! - Locale-aware labels (`1’234.5` for `it-CH`, the default), at most two decimals
//! - Hide-meta mode for compact previews
//! - Inline error markers (`invalid chart data`, `unsupported chart type`) instead of panics
//!
//! ### Example
//! ```
//! use chartcfg::models::{ChartDataset, Series};
//!
//! let ds = ChartDataset::new(
//!     vec!["Q1".into(), "Q2".into()],
//!     vec![Series::numbers("Sales", &[100.0, 200.0])],
//! );
//! let cfg = chartcfg::chart::resolve("barchart", &ds)?;
//! assert_eq!(cfg.series.len(), 1);
//! let table = chartcfg::table::to_table(&ds)?;
//! assert_eq!(table.header, vec!["Label", "Sales"]);
//! # Ok::<(), chartcfg::ChartError>(())
//! ```

pub mod chart;
pub mod error;
pub mod models;
pub mod storage;
pub mod table;

pub use chart::{ChartKind, ChartResolver, Configuration, ResolveOptions, resolve};
pub use error::{ChartError, ChartResult, ErrorMarker};
pub use models::{ChartDataset, DataValue, Scalar, SecondaryGroup, Series};
pub use table::{TableOptions, TableView, to_table};
