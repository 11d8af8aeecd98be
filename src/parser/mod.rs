// SPDX-License-Identifier: PMPL-1.0-or-later

//! Registry text parsing
//!
//! The registry is a flat text file: a `File-Date` header, then records of
//! `Key: Value` lines separated by `%%`. Values can run over several lines
//! when the following lines are indented by at least two spaces.
//!
//! [`line::classify_line`] turns each line into a [`LineEvent`] and the
//! [`RecordAccumulator`] folds those events into [`crate::types::Subtag`]s.

pub mod accumulator;
pub mod line;

pub use accumulator::{join_continuation, Finished, RecordAccumulator};
pub use line::{classify_line, normalize_key, LineEvent};
