// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed results

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, coloured when stdout is a terminal
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Serialize `value` for the structured formats. Text output goes through
    /// [`crate::report::ReportFormatter`] instead and yields `None` here.
    pub fn serialize<T: Serialize>(&self, value: &T) -> Result<Option<String>> {
        match self {
            OutputFormat::Text => Ok(None),
            OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
            OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(value)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RegistryEntry, Subtag};

    #[test]
    fn text_is_not_serialized() {
        assert!(OutputFormat::Text.serialize(&1).unwrap().is_none());
    }

    #[test]
    fn entry_serializes_with_type_key() {
        let mut subtag = Subtag::new();
        subtag.code = Some("hrx".into());
        subtag.kind = Some("language".into());
        let entry = RegistryEntry::One(subtag);

        let json = OutputFormat::Json.serialize(&entry).unwrap().unwrap();
        assert!(json.contains("\"type\": \"language\""));

        let yaml = OutputFormat::Yaml.serialize(&entry).unwrap().unwrap();
        assert!(yaml.contains("code: hrx"));
    }
}
