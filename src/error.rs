// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error kinds raised while parsing the registry or resolving tags

use std::fmt;
use thiserror::Error;

/// A registry line that matched none of the recognised shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnrecognizedLine {
    /// 1-based line number in the registry text.
    pub line: usize,
    pub text: String,
}

impl fmt::Display for UnrecognizedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {:?}", self.line, self.text)
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("malformed date in {field}: {value:?}")]
    MalformedDate { field: String, value: String },

    /// Every unrecognised line of one scan, reported together.
    #[error("{} unrecognized registry line(s): {}", .0.len(), join_lines(.0))]
    UnrecognizedLines(Vec<UnrecognizedLine>),

    #[error("record ending at line {line} has no Subtag or Tag field")]
    MissingCode { line: usize },

    #[error("unknown subtag: {0:?}")]
    UnknownSubtag(String),

    #[error("language tag has no leading subtag")]
    EmptyTag,
}

fn join_lines(lines: &[UnrecognizedLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
