// SPDX-License-Identifier: PMPL-1.0-or-later

//! The parsed IANA Language Subtag Registry
//!
//! A [`Registry`] is built once from the full registry text by
//! [`RegistryBuilder`] and never changes afterwards. Process-wide sharing goes
//! through [`cache::RegistryCache`].

pub mod builder;
pub mod cache;
pub mod store;

pub use builder::RegistryBuilder;
pub use cache::{global, RegistryCache};
pub use store::RegistryStore;

use crate::error::RegistryError;
use crate::tag;
use crate::types::RegistryEntry;
use chrono::NaiveDate;

/// Immutable code -> entry map plus the registry's `File-Date`.
#[derive(Debug, Clone)]
pub struct Registry {
    pub(crate) file_date: Option<NaiveDate>,
    pub(crate) store: RegistryStore,
}

impl Registry {
    /// Parse a complete registry text.
    pub fn parse(text: &str) -> Result<Self, RegistryError> {
        RegistryBuilder::build(text)
    }

    /// Date from the `File-Date` header, if the text had one.
    pub fn file_date(&self) -> Option<NaiveDate> {
        self.file_date
    }

    /// Entry for `code`, matched exactly as published. Unknown codes are `None`.
    pub fn lookup(&self, code: &str) -> Option<&RegistryEntry> {
        self.store.lookup(code)
    }

    /// Distinct codes.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Records, including every member of a folded entry.
    pub fn record_count(&self) -> usize {
        self.store.record_count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegistryEntry)> {
        self.store.iter()
    }

    /// Codes owned by more than one record.
    pub fn duplicate_codes(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, entry)| entry.is_many())
            .map(|(code, _)| code)
    }

    /// Human-readable name of a composite tag, see [`tag::bureaucratic_name`].
    pub fn bureaucratic_name(&self, tag: &str) -> Result<String, RegistryError> {
        tag::bureaucratic_name(self, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "File-Date: 2018-11-30
%%
Type: language
Subtag: cmn
Description: Mandarin Chinese
Added: 2009-07-29
Macrolanguage: zh
%%
Type: region
Subtag: US
Description: United States
Added: 2005-10-16
%%
Type: extlang
Subtag: cmn
Description: Mandarin Chinese
Added: 2009-07-29
Preferred-Value: cmn
Prefix: zh
Macrolanguage: zh
%%
";

    #[test]
    fn counts_codes_and_records_separately() {
        let registry = Registry::parse(SAMPLE).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.record_count(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn duplicate_codes_lists_folded_entries() {
        let registry = Registry::parse(SAMPLE).unwrap();
        let duplicates: Vec<_> = registry.duplicate_codes().collect();
        assert_eq!(duplicates, vec!["cmn"]);
    }

    #[test]
    fn unknown_code_is_absent() {
        let registry = Registry::parse(SAMPLE).unwrap();
        assert!(registry.lookup("xx").is_none());
        assert!(registry.lookup("us").is_none());
    }

    #[test]
    fn empty_text_is_an_empty_registry() {
        let registry = Registry::parse("").unwrap();
        assert!(registry.is_empty());
        assert!(registry.file_date().is_none());
    }
}
