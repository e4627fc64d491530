//! stok — headless viewer for a spreadsheet-backed product inventory.
//!
//! The binary loads the sheet once, applies a [`Query`](stok_core::Query)
//! built from command-line flags, and prints either the matching rows or the
//! filter options of one field. This crate exposes that flow so the
//! integration harnesses can drive it without spawning a process.
//!
//! # Architecture
//!
//! ```text
//! stok-feeds ──► DatasetStore ──► QueryEngine ──► headless output
//! ```

pub mod headless;
