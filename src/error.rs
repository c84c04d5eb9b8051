use serde::Serialize;
use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Terminal, non-throwing outcomes of a transformation. Callers render them inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("invalid chart data: {0}")]
    MalformedInput(String),

    #[error("unsupported chart type: {0}")]
    UnsupportedChartType(String),
}

impl ChartError {
    /// Short user-facing text, without the diagnostic detail.
    pub fn message(&self) -> &'static str {
        match self {
            ChartError::MalformedInput(_) => "invalid chart data",
            ChartError::UnsupportedChartType(_) => "unsupported chart type",
        }
    }

    pub fn marker(&self) -> ErrorMarker {
        let error = match self {
            ChartError::MalformedInput(_) => "malformedInput",
            ChartError::UnsupportedChartType(_) => "unsupportedChartType",
        };
        ErrorMarker {
            error,
            message: self.message(),
            detail: match self {
                ChartError::MalformedInput(d) | ChartError::UnsupportedChartType(d) => d.clone(),
            },
        }
    }
}

/// Serializable form of a [`ChartError`], shipped to the UI in place of a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMarker {
    pub error: &'static str,
    pub message: &'static str,
    pub detail: String,
}
