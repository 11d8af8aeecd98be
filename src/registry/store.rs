// SPDX-License-Identifier: PMPL-1.0-or-later

//! Code-keyed record storage with duplicate folding

use crate::error::RegistryError;
use crate::types::{RegistryEntry, Subtag};
use std::collections::BTreeMap;

/// Records keyed by their code, exactly as published (case-sensitive:
/// `CS` the region and `cs` the language are different keys).
#[derive(Debug, Clone, Default)]
pub struct RegistryStore {
    entries: BTreeMap<String, RegistryEntry>,
}

impl RegistryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under `code`. A first record is stored as a scalar;
    /// later records with the same code fold into a list in insertion order.
    ///
    /// `line` is only used to point at the offending record when `code` is
    /// missing or empty.
    pub fn insert(
        &mut self,
        code: Option<&str>,
        record: Subtag,
        line: usize,
    ) -> Result<(), RegistryError> {
        let code = match code {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => return Err(RegistryError::MissingCode { line }),
        };
        let entry = match self.entries.remove(&code) {
            Some(existing) => existing.fold(record),
            None => RegistryEntry::One(record),
        };
        self.entries.insert(code, entry);
        Ok(())
    }

    /// Store a record under its own code.
    pub fn insert_record(&mut self, record: Subtag, line: usize) -> Result<(), RegistryError> {
        let code = record.code.clone();
        self.insert(code.as_deref(), record, line)
    }

    pub fn lookup(&self, code: &str) -> Option<&RegistryEntry> {
        self.entries.get(code)
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stored records, counting every member of a folded entry.
    pub fn record_count(&self) -> usize {
        self.entries.values().map(RegistryEntry::len).sum()
    }

    /// Entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegistryEntry)> {
        self.entries.iter().map(|(code, entry)| (code.as_str(), entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, description: &str) -> Subtag {
        let mut subtag = Subtag::new();
        subtag.code = Some(code.to_string());
        subtag.add_description(description);
        subtag
    }

    #[test]
    fn fresh_code_is_stored_as_scalar() {
        let mut store = RegistryStore::new();
        store.insert_record(record("de", "German"), 1).unwrap();
        assert!(matches!(store.lookup("de"), Some(RegistryEntry::One(_))));
    }

    #[test]
    fn repeated_code_folds_in_insertion_order() {
        let mut store = RegistryStore::new();
        for name in ["r1", "r2", "r3"] {
            store.insert(Some("c"), record("c", name), 1).unwrap();
        }
        match store.lookup("c") {
            Some(RegistryEntry::Many(records)) => {
                let names: Vec<_> = records.iter().map(|r| r.descriptions[0].as_str()).collect();
                assert_eq!(names, vec!["r1", "r2", "r3"]);
            }
            other => panic!("expected folded list, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
        assert_eq!(store.record_count(), 3);
    }

    #[test]
    fn missing_or_empty_code_is_rejected() {
        let mut store = RegistryStore::new();
        let err = store.insert(None, Subtag::new(), 7).unwrap_err();
        assert!(matches!(err, RegistryError::MissingCode { line: 7 }));
        let err = store.insert(Some(""), Subtag::new(), 8).unwrap_err();
        assert!(matches!(err, RegistryError::MissingCode { line: 8 }));
        assert!(store.is_empty());
    }

    #[test]
    fn lookup_is_case_sensitive_and_absence_is_not_an_error() {
        let mut store = RegistryStore::new();
        store.insert_record(record("CS", "Serbia and Montenegro"), 1).unwrap();
        store.insert_record(record("cs", "Czech"), 2).unwrap();
        let name = |code: &str| store.lookup(code).and_then(RegistryEntry::display_name);
        assert_eq!(name("CS"), Some("Serbia and Montenegro"));
        assert_eq!(name("cs"), Some("Czech"));
        assert!(store.lookup("Cs").is_none());
    }

    #[test]
    fn iter_walks_codes_in_order() {
        let mut store = RegistryStore::new();
        store.insert_record(record("fr", "French"), 1).unwrap();
        store.insert_record(record("de", "German"), 2).unwrap();
        let codes: Vec<_> = store.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["de", "fr"]);
    }
}
