//! Product records and the in-memory registry.
//!
//! The registry is the single store of entered products: an ordered list,
//! append-only except for removal by code. It lives for the lifetime of the
//! process and is never persisted; the CSV export is the only artifact.

use serde::{Deserialize, Serialize};

/// One product entry as committed from the form.
///
/// Records are immutable once added: there is no edit operation, only
/// removal. `code` is stored upper-cased (the form normalizes it on entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub code: String,
    pub description: String,
    pub quantity: u32,
}

impl ProductRecord {
    pub fn new(code: impl Into<String>, description: impl Into<String>, quantity: u32) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            quantity,
        }
    }
}

/// Ordered collection of product records.
///
/// Insertion order is preserved. Codes are *not* required to be unique;
/// `add` never checks for duplicates.
#[derive(Debug, Clone, Default)]
pub struct ProductRegistry {
    records: Vec<ProductRecord>,
}

impl ProductRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Always succeeds.
    pub fn add(&mut self, record: ProductRecord) {
        self.records.push(record);
    }

    /// Remove every record whose code equals `code`.
    ///
    /// Duplicates are allowed in the registry, so removal is a filter over
    /// the whole list (see DESIGN.md). An absent code is a silent no-op.
    pub fn remove(&mut self, code: &str) {
        self.records.retain(|record| record.code != code);
    }

    pub fn get(&self, index: usize) -> Option<&ProductRecord> {
        self.records.get(index)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
