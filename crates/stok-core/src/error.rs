//! Error types for stok-core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the query engine.
///
/// These are configuration or programming errors; the engine never returns
/// a partial result alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The name does not resolve to a declared filterable (or searchable)
    /// field.
    #[error("invalid field {name:?}: not a declared field for this query")]
    InvalidField { name: String },
}

/// Errors raised while loading a dataset.
///
/// A failed load never touches the store; the previous snapshot stays live.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The endpoint answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// A local source could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The body is not valid JSON.
    #[error("malformed dataset: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body is JSON but not an array of row objects.
    #[error("unexpected dataset shape: {0}")]
    Shape(String),
}
