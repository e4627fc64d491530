//! Core types for stok-core.
//!
//! This module defines the record schema published by the inventory sheet:
//! the closed [`Field`] set, the statically typed [`Product`] row, and the
//! ordered [`Dataset`] that the store swaps on every load.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::error::FetchError;

/// A column of the inventory sheet.
///
/// Declaration order is the table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Barcode,
    NamaProduk,
    HargaBeli,
    HargaJual,
    Margin,
    Divisi,
    Departemen,
    Kategori,
    Subkategori,
    Supplier,
    QtyTerjual,
    QtyPerBulan,
    QtyPerHari,
    Stok,
    Ito,
}

impl Field {
    /// Every field, in table column order.
    pub const ALL: [Field; 15] = [
        Field::Barcode,
        Field::NamaProduk,
        Field::HargaBeli,
        Field::HargaJual,
        Field::Margin,
        Field::Divisi,
        Field::Departemen,
        Field::Kategori,
        Field::Subkategori,
        Field::Supplier,
        Field::QtyTerjual,
        Field::QtyPerBulan,
        Field::QtyPerHari,
        Field::Stok,
        Field::Ito,
    ];

    /// The column key exactly as the sheet publishes it.
    pub fn key(self) -> &'static str {
        match self {
            Field::Barcode => "BARCODE",
            Field::NamaProduk => "NAMA PRODUK",
            Field::HargaBeli => "HBELI",
            Field::HargaJual => "HJUAL",
            Field::Margin => "MARGIN",
            Field::Divisi => "DIVISI",
            Field::Departemen => "DEPARTEMEN",
            Field::Kategori => "KATEGORI",
            Field::Subkategori => "SUBKATEGORI",
            Field::Supplier => "SUPPLIER",
            Field::QtyTerjual => "QTY TERJUAL",
            Field::QtyPerBulan => "QTY TERJUAL PERBULAN",
            // The sheet header really has two spaces here.
            Field::QtyPerHari => "QTY TERJUAL  PERHARI",
            Field::Stok => "STOK",
            Field::Ito => "ITO",
        }
    }

    /// Snake-case identifier, used on the command line.
    pub fn ident(self) -> &'static str {
        match self {
            Field::Barcode => "barcode",
            Field::NamaProduk => "nama_produk",
            Field::HargaBeli => "hbeli",
            Field::HargaJual => "hjual",
            Field::Margin => "margin",
            Field::Divisi => "divisi",
            Field::Departemen => "departemen",
            Field::Kategori => "kategori",
            Field::Subkategori => "subkategori",
            Field::Supplier => "supplier",
            Field::QtyTerjual => "qty_terjual",
            Field::QtyPerBulan => "qty_terjual_perbulan",
            Field::QtyPerHari => "qty_terjual_perhari",
            Field::Stok => "stok",
            Field::Ito => "ito",
        }
    }

    /// Resolve an exact sheet column key.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Field {
    type Err = crate::error::QueryError;

    /// Accepts either the sheet column key (`NAMA PRODUK`) or the snake-case
    /// identifier (`nama_produk`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_key(s)
            .or_else(|| Field::ALL.into_iter().find(|f| f.ident() == s))
            .ok_or_else(|| crate::error::QueryError::InvalidField {
                name: s.to_string(),
            })
    }
}

/// One inventory row.
///
/// Every field is optional; an empty cell in the sheet is stored as `None`.
/// Values are kept verbatim as strings, numeric columns included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Product {
    #[serde(rename = "BARCODE")]
    pub barcode: Option<String>,
    #[serde(rename = "NAMA PRODUK")]
    pub nama_produk: Option<String>,
    #[serde(rename = "HBELI")]
    pub harga_beli: Option<String>,
    #[serde(rename = "HJUAL")]
    pub harga_jual: Option<String>,
    #[serde(rename = "MARGIN")]
    pub margin: Option<String>,
    #[serde(rename = "DIVISI")]
    pub divisi: Option<String>,
    #[serde(rename = "DEPARTEMEN")]
    pub departemen: Option<String>,
    #[serde(rename = "KATEGORI")]
    pub kategori: Option<String>,
    #[serde(rename = "SUBKATEGORI")]
    pub subkategori: Option<String>,
    #[serde(rename = "SUPPLIER")]
    pub supplier: Option<String>,
    #[serde(rename = "QTY TERJUAL")]
    pub qty_terjual: Option<String>,
    #[serde(rename = "QTY TERJUAL PERBULAN")]
    pub qty_per_bulan: Option<String>,
    #[serde(rename = "QTY TERJUAL  PERHARI")]
    pub qty_per_hari: Option<String>,
    #[serde(rename = "STOK")]
    pub stok: Option<String>,
    #[serde(rename = "ITO")]
    pub ito: Option<String>,
}

impl Product {
    /// Value of `field`, or `None` when the cell is absent or was empty.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Set `field`. Empty strings are normalised to `None`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        *self.slot_mut(field) = if value.is_empty() { None } else { Some(value) };
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Convert one raw sheet row into a `Product`.
    ///
    /// Strings are kept verbatim, numbers and booleans are rendered to their
    /// string form, `null` and `""` become absent. Keys outside the schema are
    /// dropped and returned so the loader can report them.
    pub fn from_row(row: &Map<String, Value>) -> (Product, Vec<String>) {
        let mut product = Product::default();
        let mut unknown = Vec::new();

        for (key, value) in row {
            let Some(field) = Field::from_key(key) else {
                unknown.push(key.clone());
                continue;
            };
            match value {
                Value::String(s) => product.set(field, s.as_str()),
                Value::Number(n) => product.set(field, n.to_string()),
                Value::Bool(b) => product.set(field, b.to_string()),
                Value::Null => {}
                // Nested values never occur in a flat sheet export.
                other => product.set(field, other.to_string()),
            }
        }

        (product, unknown)
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Barcode => &self.barcode,
            Field::NamaProduk => &self.nama_produk,
            Field::HargaBeli => &self.harga_beli,
            Field::HargaJual => &self.harga_jual,
            Field::Margin => &self.margin,
            Field::Divisi => &self.divisi,
            Field::Departemen => &self.departemen,
            Field::Kategori => &self.kategori,
            Field::Subkategori => &self.subkategori,
            Field::Supplier => &self.supplier,
            Field::QtyTerjual => &self.qty_terjual,
            Field::QtyPerBulan => &self.qty_per_bulan,
            Field::QtyPerHari => &self.qty_per_hari,
            Field::Stok => &self.stok,
            Field::Ito => &self.ito,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Barcode => &mut self.barcode,
            Field::NamaProduk => &mut self.nama_produk,
            Field::HargaBeli => &mut self.harga_beli,
            Field::HargaJual => &mut self.harga_jual,
            Field::Margin => &mut self.margin,
            Field::Divisi => &mut self.divisi,
            Field::Departemen => &mut self.departemen,
            Field::Kategori => &mut self.kategori,
            Field::Subkategori => &mut self.subkategori,
            Field::Supplier => &mut self.supplier,
            Field::QtyTerjual => &mut self.qty_terjual,
            Field::QtyPerBulan => &mut self.qty_per_bulan,
            Field::QtyPerHari => &mut self.qty_per_hari,
            Field::Stok => &mut self.stok,
            Field::Ito => &mut self.ito,
        }
    }
}

/// The ordered collection of products from one load. Order is source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    products: Vec<Product>,
}

impl Dataset {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// An empty dataset (the store's state before the first load).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalise a decoded JSON payload into a dataset.
    ///
    /// The payload must be an array of objects. Returns the dataset plus the
    /// distinct keys that were dropped because they are not part of the
    /// schema, sorted.
    pub fn from_json(payload: Value) -> Result<(Dataset, Vec<String>), FetchError> {
        let Value::Array(rows) = payload else {
            return Err(FetchError::Shape(format!(
                "expected a JSON array of rows, got {}",
                json_kind(&payload)
            )));
        };

        let mut dropped = BTreeSet::new();
        let mut products = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let Value::Object(map) = row else {
                return Err(FetchError::Shape(format!(
                    "row {index} is {}, expected an object",
                    json_kind(row)
                )));
            };
            let (product, unknown) = Product::from_row(map);
            dropped.extend(unknown);
            products.push(product);
        }

        Ok((Dataset::new(products), dropped.into_iter().collect()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }
}

impl FromIterator<Product> for Dataset {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Dataset::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
