// SPDX-License-Identifier: PMPL-1.0-or-later

//! bcp47-registry — IANA Language Subtag Registry parsing and BCP47 tag naming.
//!
//! The registry text is parsed once into an immutable [`Registry`]; composite
//! tags such as `en-US` are then resolved into readable names built from the
//! subtags' first registered descriptions.
//!
//! PIPELINE:
//! 1. **Parser**: classifies each line and folds field/continuation lines
//!    into subtag records, collecting every unrecognised line for one error.
//! 2. **Registry**: stores records by code; codes owned by several records
//!    keep all of them in file order.
//! 3. **Tag**: splits a composite tag and looks up its first two subtags.
//!
//! ```
//! use bcp47_registry::Registry;
//!
//! let registry = Registry::parse(
//!     "File-Date: 2018-11-30\n%%\nType: language\nSubtag: en\nDescription: English\n\
//!      %%\nType: region\nSubtag: US\nDescription: United States\n",
//! )
//! .unwrap();
//! assert_eq!(registry.bureaucratic_name("en-us").unwrap(), "English, United States");
//! ```

pub mod error;
pub mod parser;
pub mod registry;
pub mod report;
pub mod source;
pub mod tag;
pub mod types;

pub use error::{RegistryError, UnrecognizedLine};
pub use registry::{Registry, RegistryBuilder, RegistryCache};
pub use tag::{bureaucratic_name, Tag};
pub use types::{RegistryEntry, Subtag};
