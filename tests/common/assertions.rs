//! Domain-specific assertion macros for stok harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! filtering guarantee was violated.

/// Assert that every product in `rows` has `field == value` exactly.
///
/// ```rust
/// assert_all_selected!(rows, Field::Divisi, "Minuman");
/// ```
#[macro_export]
macro_rules! assert_all_selected {
    ($rows:expr, $field:expr, $value:expr) => {{
        let field: stok_core::Field = $field;
        let expected: &str = $value;
        for product in $rows.iter() {
            let product: &stok_core::Product = product;
            if product.get(field) != Some(expected) {
                panic!(
                    "assert_all_selected! failed:\n  field:    {}\n  expected: {:?}\n  actual:   {:?}\n  barcode:  {:?}",
                    field,
                    expected,
                    product.get(field),
                    product.get(stok_core::Field::Barcode)
                );
            }
        }
    }};
}

/// Assert that `sub` (a slice of references into `full`) is an
/// order-preserving subsequence of `full`. Identity is by address, so equal
/// duplicate rows are told apart.
///
/// ```rust
/// assert_subsequence!(filtered, dataset.as_slice());
/// ```
#[macro_export]
macro_rules! assert_subsequence {
    ($sub:expr, $full:expr) => {{
        let full: &[stok_core::Product] = $full;
        let mut remaining = full.iter();
        for (index, wanted) in $sub.iter().enumerate() {
            let wanted: &stok_core::Product = wanted;
            if !remaining.any(|candidate| std::ptr::eq(candidate, wanted)) {
                panic!(
                    "assert_subsequence! failed: result #{} is out of order or not from the dataset.\n  barcode: {:?}",
                    index,
                    wanted.get(stok_core::Field::Barcode)
                );
            }
        }
    }};
}

/// Assert that a sequence of option strings is strictly ascending, which
/// implies it is also duplicate-free.
#[macro_export]
macro_rules! assert_strictly_ascending {
    ($values:expr) => {{
        let values: &[String] = &$values;
        for pair in values.windows(2) {
            if pair[0] >= pair[1] {
                panic!(
                    "assert_strictly_ascending! failed: {:?} is not before {:?}\n  all: {:?}",
                    pair[0], pair[1], values
                );
            }
        }
    }};
}
