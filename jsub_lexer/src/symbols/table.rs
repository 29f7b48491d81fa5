//! Identifier occurrence table for one lexing session

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One identifier and the number of times it was scanned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub name: String,
    pub count: usize,
}

/// Identifier counts in first-seen order.
///
/// Entries are never reordered or removed; `record` only appends new names or
/// bumps existing counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<SymbolEntry>", from = "Vec<SymbolEntry>")]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `identifier`
    pub fn record(&mut self, identifier: &str) {
        self.record_many(identifier, 1);
    }

    fn record_many(&mut self, identifier: &str, count: usize) {
        match self.index.get(identifier) {
            Some(&slot) => self.entries[slot].count += count,
            None => {
                self.index
                    .insert(identifier.to_string(), self.entries.len());
                self.entries.push(SymbolEntry {
                    name: identifier.to_string(),
                    count,
                });
            }
        }
    }

    /// Entries in order of first appearance
    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.index.get(name).map(|&slot| self.entries[slot].count)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of distinct identifiers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total_occurrences(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Human readable report, one `name  (count=N)` line per entry
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Symbol Table (Identifiers) ===")?;
        for entry in &self.entries {
            writeln!(f, "{}  (count={})", entry.name, entry.count)?;
        }
        Ok(())
    }
}

impl From<SymbolTable> for Vec<SymbolEntry> {
    fn from(table: SymbolTable) -> Self {
        table.entries
    }
}

impl From<Vec<SymbolEntry>> for SymbolTable {
    fn from(entries: Vec<SymbolEntry>) -> Self {
        let mut table = SymbolTable::new();
        for entry in entries {
            table.record_many(&entry.name, entry.count);
        }
        table
    }
}
