// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for the subtag registry
//!
//! A registry record is stored as published: codes keep their registry case,
//! the `Type` field is free text, and repeatable descriptions keep their
//! declaration order.

use crate::error::RegistryError;
use chrono::NaiveDate;
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a registry date (`YYYY-MM-DD`). `field` names the source of the
/// value for the error message.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, RegistryError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        RegistryError::MalformedDate {
            field: field.to_string(),
            value: value.to_string(),
        }
    })
}

/// Field keys recognised inside a registry record.
///
/// Keys arrive normalised (`Suppress-Script` -> `suppress_script`,
/// `Subtag`/`Tag` -> `code`) and are mapped onto this closed set before they
/// touch a [`Subtag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Type,
    Code,
    Description,
    Added,
    SuppressScript,
    Scope,
    Macrolanguage,
    Comments,
    Deprecated,
    PreferredValue,
    Prefix,
}

impl FieldKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Code => "code",
            Self::Description => "description",
            Self::Added => "added",
            Self::SuppressScript => "suppress_script",
            Self::Scope => "scope",
            Self::Macrolanguage => "macrolanguage",
            Self::Comments => "comments",
            Self::Deprecated => "deprecated",
            Self::PreferredValue => "preferred_value",
            Self::Prefix => "prefix",
        }
    }

    /// Map a normalised key onto a field. Returns `None` for keys the record
    /// has no slot for.
    pub fn parse(normalized: &str) -> Option<Self> {
        match normalized {
            "type" => Some(Self::Type),
            "code" => Some(Self::Code),
            "description" => Some(Self::Description),
            "added" => Some(Self::Added),
            "suppress_script" => Some(Self::SuppressScript),
            "scope" => Some(Self::Scope),
            "macrolanguage" => Some(Self::Macrolanguage),
            "comments" => Some(Self::Comments),
            "deprecated" => Some(Self::Deprecated),
            "preferred_value" => Some(Self::PreferredValue),
            "prefix" => Some(Self::Prefix),
            _ => None,
        }
    }
}

/// One `%%`-delimited record of the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Subtag {
    /// Subtag (or full tag for grandfathered/redundant entries), case as published.
    pub code: Option<String>,
    /// `language`, `script`, `region`, `variant`, `extlang`, `grandfathered`
    /// or `redundant` in practice; kept verbatim.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub descriptions: Vec<String>,
    pub added: Option<NaiveDate>,
    pub suppress_script: Option<String>,
    pub scope: Option<String>,
    pub macrolanguage: Option<String>,
    pub comments: Option<String>,
    pub deprecated: Option<String>,
    pub preferred_value: Option<String>,
    pub prefix: Option<String>,
}

impl Subtag {
    pub fn new() -> Self {
        Self::default()
    }

    /// A record with no fields and no descriptions. Empty records are never stored.
    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
            && self.code.is_none()
            && self.kind.is_none()
            && self.added.is_none()
            && self.suppress_script.is_none()
            && self.scope.is_none()
            && self.macrolanguage.is_none()
            && self.comments.is_none()
            && self.deprecated.is_none()
            && self.preferred_value.is_none()
            && self.prefix.is_none()
    }

    pub fn add_description(&mut self, description: impl Into<String>) {
        self.descriptions.push(description.into());
    }

    /// Route one field value onto the matching slot. Descriptions append,
    /// `Added` is parsed as a date, everything else is assigned (last wins).
    pub fn apply(&mut self, key: FieldKey, value: String) -> Result<(), RegistryError> {
        match key {
            FieldKey::Description => self.descriptions.push(value),
            FieldKey::Added => self.added = Some(parse_date(key.as_str(), &value)?),
            FieldKey::Type => self.kind = Some(value),
            FieldKey::Code => self.code = Some(value),
            FieldKey::SuppressScript => self.suppress_script = Some(value),
            FieldKey::Scope => self.scope = Some(value),
            FieldKey::Macrolanguage => self.macrolanguage = Some(value),
            FieldKey::Comments => self.comments = Some(value),
            FieldKey::Deprecated => self.deprecated = Some(value),
            FieldKey::PreferredValue => self.preferred_value = Some(value),
            FieldKey::Prefix => self.prefix = Some(value),
        }
        Ok(())
    }

    /// First registered description, the subtag's "bureaucratic" name.
    pub fn bureaucratic_name(&self) -> Option<&str> {
        self.descriptions.first().map(String::as_str)
    }

    /// Bureaucratic name, falling back to the code for description-less records.
    pub fn display_name(&self) -> &str {
        self.bureaucratic_name()
            .or(self.code.as_deref())
            .unwrap_or_default()
    }
}

/// Value stored under one code: a single record, or every record sharing the
/// code in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RegistryEntry {
    One(Subtag),
    Many(Vec<Subtag>),
}

impl RegistryEntry {
    /// First record in file order.
    pub fn first(&self) -> Option<&Subtag> {
        self.records().first()
    }

    pub fn records(&self) -> &[Subtag] {
        match self {
            Self::One(subtag) => std::slice::from_ref(subtag),
            Self::Many(subtags) => subtags,
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn is_many(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// Bureaucratic name of the first record.
    pub fn display_name(&self) -> Option<&str> {
        self.first().map(Subtag::display_name)
    }

    /// Fold another record sharing this entry's code into it: a scalar
    /// becomes `[existing, new]`, a list grows by one.
    pub(crate) fn fold(self, subtag: Subtag) -> Self {
        match self {
            Self::One(existing) => Self::Many(vec![existing, subtag]),
            Self::Many(mut subtags) => {
                subtags.push(subtag);
                Self::Many(subtags)
            }
        }
    }
}
