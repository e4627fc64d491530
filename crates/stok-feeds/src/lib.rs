//! stok-feeds — dataset loaders for stok.
//!
//! Each loader reads one full dataset from its source and hands it to the
//! store as a [`stok_core::Dataset`]. Both loaders share the same JSON shape:
//! an array of flat row objects keyed by sheet column name.

pub mod file;
pub mod sheet;

pub use file::FileLoader;
pub use sheet::SheetLoader;

use std::time::Duration;
use stok_core::{Dataset, DatasetLoader, FetchError};

/// Decode a JSON body into a dataset, logging any keys the schema drops.
pub fn decode_dataset(bytes: &[u8]) -> Result<Dataset, FetchError> {
    let payload: serde_json::Value = serde_json::from_slice(bytes)?;
    let (dataset, dropped) = Dataset::from_json(payload)?;
    if !dropped.is_empty() {
        tracing::debug!(?dropped, "ignoring columns outside the product schema");
    }
    Ok(dataset)
}

/// Pick a loader for `source`: `http://` and `https://` URLs go to the sheet
/// endpoint, anything else is treated as a local file path.
pub fn loader_for(source: &str, timeout: Duration) -> Result<Box<dyn DatasetLoader>, FetchError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        Ok(Box::new(SheetLoader::new(source, timeout)?))
    } else {
        Ok(Box::new(FileLoader::new(source)))
    }
}
