//! stok-core — core library for the stok inventory viewer.
//!
//! This crate exposes the two architectural components as public modules,
//! plus the record schema shared by both.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► Store ──► Search ──► View
//!              │          ▲
//!              └─ Query ──┘
//! ```
//!
//! The store holds the latest [`Dataset`] snapshot and swaps it wholesale on
//! every successful load. The search layer is stateless: it takes a snapshot
//! and a [`Query`] and recomputes the filtered rows and filter options.

pub mod config;
pub mod error;
pub mod search;
pub mod store;
pub mod types;

pub use error::{FetchError, QueryError};
pub use search::{Query, QueryEngine, View};
pub use store::{DatasetLoader, DatasetStore, Snapshot};
pub use types::{Dataset, Field, Product};
