//! Structured per-entry compilation report
//!
//! Every party and item in the input gets an explicit kept/skipped
//! outcome collected into a report returned alongside the compiled text,
//! so callers can inspect what was omitted without scraping log output.

use serde::Serialize;

/// Outcome of compiling one party or item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EntryOutcome {
    /// Entry was emitted
    Kept,
    /// Entry was omitted; lists the absent fields that caused the skip
    Skipped { missing: Vec<&'static str> },
}

/// Report for one entry of the input sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    /// Zero-based position in the input sequence
    pub index: usize,
    /// Kept or skipped
    pub outcome: EntryOutcome,
}

impl EntryReport {
    /// Report an emitted entry
    pub fn kept(index: usize) -> Self {
        Self {
            index,
            outcome: EntryOutcome::Kept,
        }
    }

    /// Report a skipped entry with the fields it was missing
    pub fn skipped(index: usize, missing: Vec<&'static str>) -> Self {
        Self {
            index,
            outcome: EntryOutcome::Skipped { missing },
        }
    }

    /// Whether the entry was emitted
    pub fn is_kept(&self) -> bool {
        self.outcome == EntryOutcome::Kept
    }
}

/// Structured account of one compilation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompilationReport {
    /// One entry per input party, in input order
    pub parties: Vec<EntryReport>,
    /// One entry per input item, in input order
    pub items: Vec<EntryReport>,
    /// Non-fatal irregularities outside the per-entry outcomes
    /// (e.g. a weight that could not be aggregated)
    pub warnings: Vec<String>,
}

impl CompilationReport {
    /// Number of parties emitted
    pub fn kept_parties(&self) -> usize {
        self.parties.iter().filter(|e| e.is_kept()).count()
    }

    /// Number of items emitted
    pub fn kept_items(&self) -> usize {
        self.items.iter().filter(|e| e.is_kept()).count()
    }

    /// Number of parties and items omitted
    pub fn skipped_entries(&self) -> usize {
        self.parties
            .iter()
            .chain(self.items.iter())
            .filter(|e| !e.is_kept())
            .count()
    }

    /// Whether anything was omitted or warned about
    pub fn is_clean(&self) -> bool {
        self.skipped_entries() == 0 && self.warnings.is_empty()
    }
}
