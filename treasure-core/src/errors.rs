use crate::constants::MAX_CELLS;

use std::path::PathBuf;

use thiserror::Error;

/// Rejected generation inputs. Raised before any placement happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("rows must be greater than zero, got {0}")]
    NonPositiveRows(i64),
    #[error("columns must be greater than zero, got {0}")]
    NonPositiveColumns(i64),
    #[error("{field} count cannot be negative, got {value}")]
    NegativeCount { field: &'static str, value: i64 },
    #[error(
        "a grid of {rows} rows and {cols} columns is too large, the limit is {} cells",
        MAX_CELLS
    )]
    GridTooLarge { rows: i64, cols: i64 },
}

#[derive(Debug, Error)]
pub enum DescriptionsError {
    #[error("failed to read descriptions from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed descriptions document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("descriptions list is empty")]
    Empty,
}
