//! Search layer — stateless query engine over a [`Dataset`] snapshot.
//!
//! A product is kept when every active predicate holds:
//!
//! ```text
//! keep = (search empty OR any searchable field contains search, case-insensitive)
//!      ∧ (for each selected field f: product[f] == selection[f], exact)
//! ```
//!
//! Output order is dataset order. Filter options are the distinct non-empty
//! values of a filterable field, sorted ascending by byte order.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::QueryConfig;
use crate::error::QueryError;
use crate::types::{Dataset, Field, Product};

/// Filter options for every declared filterable field.
pub type FilterOptions = BTreeMap<Field, Vec<String>>;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// The caller-held query: a free-text term plus per-field selections.
///
/// A field with no entry in the selection map is unconstrained. Selecting an
/// empty string clears the selection, matching the "All …" choice of a
/// dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    search: String,
    selections: BTreeMap<Field, String>,
}

impl Query {
    /// An unconstrained query. Matches every product.
    pub fn new() -> Self {
        Query::default()
    }

    /// Builder: set the free-text term.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.set_search(term);
        self
    }

    /// Builder: select `value` for `field`.
    pub fn select(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set_selection(field, value);
        self
    }

    /// Builder: select by field name (sheet key or snake-case identifier).
    pub fn select_named(mut self, name: &str, value: impl Into<String>) -> Result<Self, QueryError> {
        let field: Field = name.parse()?;
        self.set_selection(field, value);
        Ok(self)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn set_selection(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.selections.remove(&field);
        } else {
            self.selections.insert(field, value);
        }
    }

    pub fn clear_selection(&mut self, field: Field) {
        self.selections.remove(&field);
    }

    /// Reset the term and every selection.
    pub fn clear(&mut self) {
        self.search.clear();
        self.selections.clear();
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn selection(&self, field: Field) -> Option<&str> {
        self.selections.get(&field).map(String::as_str)
    }

    pub fn selections(&self) -> impl Iterator<Item = (Field, &str)> {
        self.selections.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// True when neither a term nor any selection is set.
    pub fn is_unconstrained(&self) -> bool {
        self.search.is_empty() && self.selections.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Declares which fields can be selected and which are searched.
///
/// The engine holds no dataset state; every call is a full scan of the
/// snapshot it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEngine {
    filterable: Vec<Field>,
    searchable: Vec<Field>,
}

impl Default for QueryEngine {
    /// Filters on division, category and supplier; searches barcode and
    /// product name.
    fn default() -> Self {
        Self::new(
            [Field::Divisi, Field::Kategori, Field::Supplier],
            [Field::Barcode, Field::NamaProduk],
        )
    }
}

impl QueryEngine {
    /// Duplicate fields are ignored; first occurrence keeps its position.
    pub fn new(
        filterable: impl IntoIterator<Item = Field>,
        searchable: impl IntoIterator<Item = Field>,
    ) -> Self {
        Self {
            filterable: dedup(filterable),
            searchable: dedup(searchable),
        }
    }

    /// Build from the `[query]` config section. Unknown field names fail.
    pub fn from_config(cfg: &QueryConfig) -> Result<Self, QueryError> {
        let filterable = cfg
            .filterable
            .iter()
            .map(|name| name.parse::<Field>())
            .collect::<Result<Vec<_>, _>>()?;
        let searchable = cfg
            .searchable
            .iter()
            .map(|name| name.parse::<Field>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(filterable, searchable))
    }

    pub fn filterable(&self) -> &[Field] {
        &self.filterable
    }

    pub fn searchable(&self) -> &[Field] {
        &self.searchable
    }

    /// Resolve `name` to a declared filterable field.
    pub fn resolve_filterable(&self, name: &str) -> Result<Field, QueryError> {
        name.parse::<Field>()
            .ok()
            .filter(|f| self.filterable.contains(f))
            .ok_or_else(|| QueryError::InvalidField {
                name: name.to_string(),
            })
    }

    /// Distinct non-empty values of the filterable field `name`, ascending.
    ///
    /// Ordering is by UTF-8 bytes (code point order), which differs from a
    /// UTF-16 code unit sort only for astral characters against U+E000..=U+FFFF.
    pub fn filter_options(&self, dataset: &Dataset, name: &str) -> Result<Vec<String>, QueryError> {
        let field = self.resolve_filterable(name)?;
        Ok(distinct_values(dataset, field))
    }

    /// Typed variant of [`filter_options`](Self::filter_options).
    pub fn options_for(&self, dataset: &Dataset, field: Field) -> Result<Vec<String>, QueryError> {
        self.ensure_filterable(field)?;
        Ok(distinct_values(dataset, field))
    }

    /// Options for every declared filterable field.
    pub fn all_options(&self, dataset: &Dataset) -> FilterOptions {
        self.filterable
            .iter()
            .map(|&field| (field, distinct_values(dataset, field)))
            .collect()
    }

    /// Products matching `query`, in dataset order.
    ///
    /// Every selected field is checked against the declared filterable set
    /// before any product is examined.
    pub fn filter<'a>(&self, dataset: &'a Dataset, query: &Query) -> Result<Vec<&'a Product>, QueryError> {
        let matcher = self.matcher(query)?;
        Ok(dataset.iter().filter(|p| matcher.matches(p)).collect())
    }

    /// Number of products matching `query`.
    pub fn count(&self, dataset: &Dataset, query: &Query) -> Result<usize, QueryError> {
        let matcher = self.matcher(query)?;
        Ok(dataset.iter().filter(|p| matcher.matches(p)).count())
    }

    /// Recompute everything a presentation layer needs for `query`.
    pub fn view(&self, dataset: &Dataset, query: &Query) -> Result<View, QueryError> {
        let rows: Vec<Product> = self.filter(dataset, query)?.into_iter().cloned().collect();
        let options = self.all_options(dataset);
        tracing::debug!(
            total = dataset.len(),
            matched = rows.len(),
            search = %query.search_term(),
            "query evaluated"
        );
        Ok(View {
            rows,
            total: dataset.len(),
            options,
        })
    }

    fn ensure_filterable(&self, field: Field) -> Result<(), QueryError> {
        if self.filterable.contains(&field) {
            Ok(())
        } else {
            Err(QueryError::InvalidField {
                name: field.key().to_string(),
            })
        }
    }

    fn matcher<'q>(&'q self, query: &'q Query) -> Result<Matcher<'q>, QueryError> {
        for (field, _) in query.selections() {
            self.ensure_filterable(field)?;
        }
        Ok(Matcher {
            needle: query.search_term().to_lowercase(),
            searchable: &self.searchable,
            query,
        })
    }
}

/// A query compiled against one engine: the lowered needle is computed once.
struct Matcher<'q> {
    needle: String,
    searchable: &'q [Field],
    query: &'q Query,
}

impl Matcher<'_> {
    fn matches(&self, product: &Product) -> bool {
        self.matches_search(product) && self.matches_selections(product)
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        self.searchable.iter().any(|&field| {
            product
                .get(field)
                .is_some_and(|value| value.to_lowercase().contains(&self.needle))
        })
    }

    fn matches_selections(&self, product: &Product) -> bool {
        self.query
            .selections()
            .all(|(field, wanted)| product.get(field) == Some(wanted))
    }
}

fn distinct_values(dataset: &Dataset, field: Field) -> Vec<String> {
    dataset
        .iter()
        .filter_map(|p| p.get(field))
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn dedup(fields: impl IntoIterator<Item = Field>) -> Vec<Field> {
    let mut out: Vec<Field> = Vec::new();
    for field in fields {
        if !out.contains(&field) {
            out.push(field);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// Outbound bundle for a presentation layer: matching rows, the dataset size
/// they were drawn from, and the current filter options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub rows: Vec<Product>,
    pub total: usize,
    pub options: FilterOptions,
}

impl View {
    pub fn matched(&self) -> usize {
        self.rows.len()
    }

    /// No product matched. This is a normal state, not an error.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `Showing N of M products`.
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.matched(), self.total)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
