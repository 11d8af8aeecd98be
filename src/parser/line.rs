// SPDX-License-Identifier: PMPL-1.0-or-later

//! Single-line classification of registry text

use crate::error::RegistryError;
use crate::types::parse_date;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

const FILE_DATE_KEY: &str = "File-Date";
const RECORD_SEPARATOR: &str = "%%";

/// What one registry line means to the record accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    FileDate(NaiveDate),
    RecordBoundary,
    Continuation(String),
    Field { key: String, value: String },
    Unrecognized(String),
}

fn file_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^File-Date: (.*)$").expect("file date pattern is valid"))
}

fn continuation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^ {2,}(.*)$").expect("continuation pattern is valid"))
}

fn field_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Z][A-Za-z]*(?:-[A-Z][A-Za-z]*)*): (.*)$")
            .expect("field pattern is valid")
    })
}

/// Classify one line (without its line terminator).
///
/// Only a malformed `File-Date` value is an error; any other shape problem
/// comes back as [`LineEvent::Unrecognized`] so the caller can keep scanning.
pub fn classify_line(line: &str) -> Result<LineEvent, RegistryError> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if let Some(caps) = file_date_re().captures(line) {
        let date = parse_date(FILE_DATE_KEY, &caps[1])?;
        return Ok(LineEvent::FileDate(date));
    }
    if line.trim_end() == RECORD_SEPARATOR {
        return Ok(LineEvent::RecordBoundary);
    }
    if let Some(caps) = continuation_re().captures(line) {
        return Ok(LineEvent::Continuation(caps[1].to_string()));
    }
    if let Some(caps) = field_re().captures(line) {
        return Ok(LineEvent::Field {
            key: normalize_key(&caps[1]),
            value: caps[2].to_string(),
        });
    }
    Ok(LineEvent::Unrecognized(line.to_string()))
}

/// `Subtag` and `Tag` become `code`; other keys are lower-cased with
/// hyphens turned into underscores.
pub fn normalize_key(raw: &str) -> String {
    match raw {
        "Subtag" | "Tag" => "code".to_string(),
        _ => raw.replace('-', "_").to_lowercase(),
    }
}
