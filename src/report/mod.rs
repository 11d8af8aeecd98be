// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering of lookup results and registry summaries

pub mod formatter;
pub mod output;

pub use formatter::ReportFormatter;
pub use output::OutputFormat;

use crate::registry::Registry;
use chrono::NaiveDate;
use serde::Serialize;

/// Headline numbers for a parsed registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrySummary {
    pub file_date: Option<NaiveDate>,
    pub codes: usize,
    pub records: usize,
    pub duplicate_codes: Vec<String>,
}

impl RegistrySummary {
    pub fn from_registry(registry: &Registry) -> Self {
        Self {
            file_date: registry.file_date(),
            codes: registry.len(),
            records: registry.record_count(),
            duplicate_codes: registry.duplicate_codes().map(str::to_string).collect(),
        }
    }
}

/// Outcome of resolving one composite tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameResolution {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NameResolution {
    pub fn resolve(registry: &Registry, tag: &str) -> Self {
        match registry.bureaucratic_name(tag) {
            Ok(name) => Self {
                tag: tag.to_string(),
                name: Some(name),
                error: None,
            },
            Err(err) => Self {
                tag: tag.to_string(),
                name: None,
                error: Some(err.to_string()),
            },
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.name.is_some()
    }
}
