//! Headless mode: one load, one query, plain text or JSON lines on stdout.

use std::borrow::Cow;
use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use stok_core::config::Config;
use stok_core::{DatasetStore, Field, Query, QueryEngine, QueryError, View};

/// Output format for matching rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated columns with a header and a summary line.
    #[default]
    Table,
    /// One JSON object per row, keyed by sheet column name.
    Jsonl,
}

/// Everything one headless run needs besides the config.
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    /// Overrides `[source] url` from the config.
    pub source: Option<String>,
    pub search: String,
    /// `(field, value)` pairs; field is a sheet key or snake-case identifier.
    pub filters: Vec<(String, String)>,
    /// Print the filter options of this field instead of rows.
    pub options: Option<String>,
    pub format: OutputFormat,
}

/// Parse a `FIELD=VALUE` flag. Splits on the first `=`.
pub fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field.to_string(), value.to_string())),
        _ => Err(format!("expected FIELD=VALUE, got {raw:?}")),
    }
}

/// Build a query from the search term and `(field, value)` selections.
pub fn build_query(search: &str, filters: &[(String, String)]) -> Result<Query, QueryError> {
    filters
        .iter()
        .try_fold(Query::new().search(search), |query, (field, value)| {
            query.select_named(field, value.as_str())
        })
}

/// Load the dataset and write the requested output to `out`.
pub async fn run(opts: &HeadlessOptions, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let engine = QueryEngine::from_config(&config.query).context("invalid [query] config")?;
    let query = build_query(&opts.search, &opts.filters)?;

    let source = opts.source.as_deref().unwrap_or(&config.source.url);
    let loader = stok_feeds::loader_for(source, Duration::from_secs(config.source.timeout_secs))?;

    let store = DatasetStore::new();
    let snapshot = store
        .refresh(loader.as_ref())
        .await
        .with_context(|| format!("failed to load products from {source}"))?;

    if let Some(name) = &opts.options {
        let values = engine.filter_options(&snapshot.dataset, name)?;
        write_options(out, &values)?;
        return Ok(());
    }

    let view = engine.view(&snapshot.dataset, &query)?;
    match opts.format {
        OutputFormat::Table => write_table(out, &view)?,
        OutputFormat::Jsonl => write_jsonl(out, &view)?,
    }
    Ok(())
}

/// One option per line.
pub fn write_options(out: &mut impl Write, values: &[String]) -> std::io::Result<()> {
    for value in values {
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// Header of column keys, one tab-separated line per row, then the summary.
pub fn write_table(out: &mut impl Write, view: &View) -> std::io::Result<()> {
    let header: Vec<&str> = Field::ALL.iter().map(|f| f.key()).collect();
    writeln!(out, "{}", header.join("\t"))?;

    if view.is_empty() {
        writeln!(out, "No products found")?;
    }
    for product in &view.rows {
        let cells: Vec<Cow<'_, str>> = Field::ALL
            .iter()
            .map(|&f| flatten_cell(product.get(f).unwrap_or("")))
            .collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }

    writeln!(out, "{}", view.summary())
}

/// Tabs and line breaks inside a cell would split the row; they print as
/// spaces.
fn flatten_cell(value: &str) -> Cow<'_, str> {
    if value.contains(['\t', '\n', '\r']) {
        Cow::Owned(value.replace(['\t', '\n', '\r'], " "))
    } else {
        Cow::Borrowed(value)
    }
}

/// One JSON object per row.
pub fn write_jsonl(out: &mut impl Write, view: &View) -> std::io::Result<()> {
    for product in &view.rows {
        serde_json::to_writer(&mut *out, product)?;
        writeln!(out)?;
    }
    Ok(())
}
