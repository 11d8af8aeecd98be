// SPDX-License-Identifier: PMPL-1.0-or-later

//! Where the registry text comes from
//!
//! The parser only ever sees one string. This module picks the origin (a
//! local file or the IANA URL) from CLI flags and the environment and reads
//! it. HTTP needs the `fetch` cargo feature.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_REGISTRY_URL: &str =
    "https://www.iana.org/assignments/language-subtag-registry/language-subtag-registry";

const REGISTRY_FILE_ENV: &str = "BCP47_REGISTRY_FILE";
const REGISTRY_URL_ENV: &str = "BCP47_REGISTRY_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    File(PathBuf),
    Url(String),
}

impl RegistrySource {
    /// Read the full registry text.
    pub fn load(&self) -> Result<String> {
        match self {
            RegistrySource::File(path) => read_file(path),
            RegistrySource::Url(url) => fetch(url),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            RegistrySource::File(path) => path.display().to_string(),
            RegistrySource::Url(url) => url.clone(),
        }
    }
}

/// Explicit source choices, typically straight from the command line.
#[derive(Debug, Clone, Default)]
pub struct SourceConfig {
    pub file: Option<PathBuf>,
    pub url: Option<String>,
}

impl SourceConfig {
    /// Resolve the source: `file`, then `url`, then `BCP47_REGISTRY_FILE`,
    /// then `BCP47_REGISTRY_URL`, then the IANA default.
    pub fn resolve(&self) -> RegistrySource {
        self.resolve_with(|key| env::var(key).ok())
    }

    fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> RegistrySource {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let source = if let Some(path) = &self.file {
            RegistrySource::File(path.clone())
        } else if let Some(url) = &self.url {
            RegistrySource::Url(url.clone())
        } else if let Some(path) = non_empty(REGISTRY_FILE_ENV) {
            RegistrySource::File(PathBuf::from(path))
        } else if let Some(url) = non_empty(REGISTRY_URL_ENV) {
            RegistrySource::Url(url)
        } else {
            RegistrySource::Url(DEFAULT_REGISTRY_URL.to_string())
        };
        debug!(source = %source.describe(), "resolved registry source");
        source
    }
}

fn read_file(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading language subtag registry {}", path.display()))?;
    info!(path = %path.display(), bytes = text.len(), "read registry file");
    Ok(text)
}

#[cfg(feature = "fetch")]
fn fetch(url: &str) -> Result<String> {
    use std::time::Duration;

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .context("building HTTP client")?;
    let text = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .with_context(|| format!("fetching language subtag registry from {}", url))?
        .text()
        .with_context(|| format!("reading registry body from {}", url))?;
    info!(url, bytes = text.len(), "fetched registry");
    Ok(text)
}

#[cfg(not(feature = "fetch"))]
fn fetch(url: &str) -> Result<String> {
    anyhow::bail!(
        "cannot fetch {}: built without the `fetch` feature; pass --registry <FILE> or set {}",
        url,
        REGISTRY_FILE_ENV
    )
}
