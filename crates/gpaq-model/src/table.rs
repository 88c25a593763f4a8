//! Tables and batches.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::record::Record;

/// A named collection of records loaded from one input file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Table name (the source file name).
    pub name: String,
    /// Source file, when loaded from disk.
    pub source: Option<PathBuf>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            source: None,
            records,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when every record carries derived metrics.
    ///
    /// Derivation is all-or-nothing per table, so an empty table is never
    /// reported as derived.
    pub fn has_metrics(&self) -> bool {
        !self.records.is_empty() && self.records.iter().all(|r| r.metrics.is_some())
    }
}

/// The tables of one run, in load order.
///
/// Names are expected to be unique; duplicates are kept so the consistency
/// checker can report them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Batch {
    tables: Vec<Table>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, table: Table) {
        self.tables.push(table);
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn tables_mut(&mut self) -> &mut [Table] {
        &mut self.tables
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Table> {
        self.tables.iter()
    }

    /// First table with the given name.
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Number of tables carrying each name.
    pub fn name_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for table in &self.tables {
            *counts.entry(table.name.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Total records across all tables.
    pub fn record_count(&self) -> usize {
        self.tables.iter().map(Table::len).sum()
    }
}

impl FromIterator<Table> for Batch {
    fn from_iter<I: IntoIterator<Item = Table>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Batch {
    type Item = &'a Table;
    type IntoIter = std::slice::Iter<'a, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}
