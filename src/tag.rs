// SPDX-License-Identifier: PMPL-1.0-or-later

//! Composite BCP47 tag resolution
//!
//! Only the first two subtags of a tag are looked at. The second one is
//! classified by length, following the registry's own casing conventions:
//! two characters is a region (`US`), four is a script (`Cyrl`), anything
//! else is looked up as written (variants such as `1901`). Later subtags are
//! ignored, so `zh-Hant-TW` resolves the same as `zh-Hant`.

use crate::error::RegistryError;
use crate::registry::Registry;

const SEPARATOR: char = '-';

/// How a non-leading subtag is keyed in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtagShape {
    /// Two characters, registered upper-case.
    Region,
    /// Four characters, registered title-case.
    Script,
    /// Registered as written.
    Other,
}

impl SubtagShape {
    pub fn of(subtag: &str) -> Self {
        match subtag.chars().count() {
            2 => Self::Region,
            4 => Self::Script,
            _ => Self::Other,
        }
    }

    /// Registry key for `subtag` under this shape's casing convention.
    pub fn registry_key(self, subtag: &str) -> String {
        match self {
            Self::Region => subtag.to_uppercase(),
            Self::Script => capitalize(subtag),
            Self::Other => subtag.to_string(),
        }
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// A caller-supplied composite tag such as `en-US` or `de-1901`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    raw: String,
}

impl Tag {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Hyphen-separated subtags, as written.
    pub fn subtags(&self) -> impl Iterator<Item = &str> {
        self.raw.split(SEPARATOR)
    }

    /// Registry keys for the leading subtag (verbatim) and, if present, the
    /// second subtag (cased by shape).
    pub fn registry_keys(&self) -> Result<(String, Option<String>), RegistryError> {
        let mut subtags = self.subtags();
        let primary = match subtags.next() {
            Some(first) if !first.is_empty() => first.to_string(),
            _ => return Err(RegistryError::EmptyTag),
        };
        let secondary = subtags.next().map(|second| SubtagShape::of(second).registry_key(second));
        Ok((primary, secondary))
    }

    /// First descriptions of the first two subtags, joined by `", "`.
    pub fn bureaucratic_name(&self, registry: &Registry) -> Result<String, RegistryError> {
        let (primary, secondary) = self.registry_keys()?;
        let mut name = resolve(registry, &primary)?;
        if let Some(key) = secondary {
            name.push_str(", ");
            name.push_str(&resolve(registry, &key)?);
        }
        Ok(name)
    }
}

fn resolve(registry: &Registry, key: &str) -> Result<String, RegistryError> {
    registry
        .lookup(key)
        .and_then(|entry| entry.display_name())
        .map(str::to_string)
        .ok_or_else(|| RegistryError::UnknownSubtag(key.to_string()))
}

/// Resolve `tag` against `registry`, e.g. `en-us` -> `English, United States`.
pub fn bureaucratic_name(registry: &Registry, tag: &str) -> Result<String, RegistryError> {
    Tag::new(tag).bureaucratic_name(registry)
}
