// SPDX-License-Identifier: PMPL-1.0-or-later

//! Human-readable output

use crate::report::{NameResolution, RegistrySummary};
use crate::types::{RegistryEntry, Subtag};
use colored::*;
use std::fmt::Write;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_entry(&self, code: &str, entry: &RegistryEntry) {
        print!("{}", self.render_entry(code, entry));
    }

    pub fn print_names(&self, resolutions: &[NameResolution]) {
        print!("{}", self.render_names(resolutions));
    }

    pub fn print_summary(&self, summary: &RegistrySummary) {
        print!("{}", self.render_summary(summary));
    }

    pub fn render_entry(&self, code: &str, entry: &RegistryEntry) -> String {
        let mut out = String::new();
        let records = entry.records();
        if records.len() > 1 {
            let _ = writeln!(
                out,
                "{} ({} records)",
                code.bold().cyan(),
                records.len()
            );
        } else {
            let _ = writeln!(out, "{}", code.bold().cyan());
        }
        for (i, subtag) in records.iter().enumerate() {
            if records.len() > 1 {
                let _ = writeln!(out, "  {}.", i + 1);
            }
            self.render_subtag(&mut out, subtag);
        }
        out
    }

    fn render_subtag(&self, out: &mut String, subtag: &Subtag) {
        let indent = "    ";
        if let Some(kind) = &subtag.kind {
            let _ = writeln!(out, "{}Type: {}", indent, kind.yellow());
        }
        for description in &subtag.descriptions {
            let _ = writeln!(out, "{}Description: {}", indent, description);
        }
        if let Some(added) = subtag.added {
            let _ = writeln!(out, "{}Added: {}", indent, added);
        }
        let optional = [
            ("Suppress-Script", &subtag.suppress_script),
            ("Scope", &subtag.scope),
            ("Macrolanguage", &subtag.macrolanguage),
            ("Prefix", &subtag.prefix),
            ("Preferred-Value", &subtag.preferred_value),
            ("Comments", &subtag.comments),
        ];
        for (label, value) in optional {
            if let Some(value) = value {
                let _ = writeln!(out, "{}{}: {}", indent, label, value);
            }
        }
        if let Some(deprecated) = &subtag.deprecated {
            let _ = writeln!(out, "{}Deprecated: {}", indent, deprecated.red());
        }
    }

    pub fn render_names(&self, resolutions: &[NameResolution]) -> String {
        let mut out = String::new();
        for resolution in resolutions {
            match (&resolution.name, &resolution.error) {
                (Some(name), _) => {
                    let _ = writeln!(out, "{}\t{}", resolution.tag.bold(), name);
                }
                (None, Some(error)) => {
                    let _ = writeln!(out, "{}\t{}", resolution.tag.bold(), error.red());
                }
                (None, None) => {}
            }
        }
        out
    }

    pub fn render_summary(&self, summary: &RegistrySummary) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "LANGUAGE SUBTAG REGISTRY".bold().cyan());
        let date = summary
            .file_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let _ = writeln!(out, "  File date: {}", date);
        let _ = writeln!(out, "  Codes: {}", summary.codes);
        let _ = writeln!(out, "  Records: {}", summary.records);
        let _ = writeln!(
            out,
            "  Codes with several records: {}",
            summary.duplicate_codes.len()
        );
        if !summary.duplicate_codes.is_empty() {
            let _ = writeln!(out, "    {}", summary.duplicate_codes.join(", "));
        }
        out
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hunsrik() -> Subtag {
        let mut subtag = Subtag::new();
        subtag.code = Some("hrx".into());
        subtag.kind = Some("language".into());
        subtag.add_description("Hunsrik");
        subtag.added = NaiveDate::from_ymd_opt(2009, 7, 29);
        subtag
    }

    #[test]
    fn single_entry_lists_fields() {
        let text = ReportFormatter::new().render_entry("hrx", &RegistryEntry::One(hunsrik()));
        assert!(text.contains("Description: Hunsrik"));
        assert!(text.contains("Added: 2009-07-29"));
        assert!(!text.contains("records"));
    }

    #[test]
    fn folded_entry_numbers_records() {
        let mut extlang = hunsrik();
        extlang.kind = Some("extlang".into());
        let entry = RegistryEntry::Many(vec![hunsrik(), extlang]);
        let text = ReportFormatter::new().render_entry("hrx", &entry);
        assert!(text.contains("(2 records)"));
        assert!(text.contains("  1."));
        assert!(text.contains("  2."));
    }

    #[test]
    fn summary_without_file_date() {
        let summary = RegistrySummary {
            file_date: None,
            codes: 3,
            records: 4,
            duplicate_codes: vec!["cmn".into()],
        };
        let text = ReportFormatter::new().render_summary(&summary);
        assert!(text.contains("File date: unknown"));
        assert!(text.contains("Records: 4"));
        assert!(text.contains("cmn"));
    }
}
