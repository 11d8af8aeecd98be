// SPDX-License-Identifier: PMPL-1.0-or-later

//! Single-pass construction of a [`Registry`] from registry text

use crate::error::RegistryError;
use crate::parser::{classify_line, RecordAccumulator};
use crate::registry::store::RegistryStore;
use crate::registry::Registry;
use tracing::debug;

/// Drives classification and accumulation over the registry text and owns the
/// store until the registry is complete.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    accumulator: RecordAccumulator,
    store: RegistryStore,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole registry text in one pass.
    pub fn build(text: &str) -> Result<Registry, RegistryError> {
        let mut builder = Self::new();
        for line in text.lines() {
            builder.feed(line)?;
        }
        builder.finish()
    }

    /// Feed one line (without its terminator).
    pub fn feed(&mut self, line: &str) -> Result<(), RegistryError> {
        let event = classify_line(line)?;
        if let Some(record) = self.accumulator.accept(event)? {
            self.store.insert_record(record, self.accumulator.line())?;
        }
        Ok(())
    }

    pub fn finish(self) -> Result<Registry, RegistryError> {
        let Self {
            accumulator,
            mut store,
        } = self;
        let end = accumulator.line();
        let finished = accumulator.finish()?;
        if let Some(record) = finished.last {
            store.insert_record(record, end)?;
        }
        debug!(
            codes = store.len(),
            records = store.record_count(),
            lines = end,
            "parsed language subtag registry"
        );
        Ok(Registry {
            file_date: finished.file_date,
            store,
        })
    }
}
