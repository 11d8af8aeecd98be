// SPDX-License-Identifier: PMPL-1.0-or-later

//! Folds classified lines into completed subtag records

use crate::error::{RegistryError, UnrecognizedLine};
use crate::parser::line::LineEvent;
use crate::types::{FieldKey, Subtag};
use chrono::NaiveDate;

/// A field read from the text but not yet written to the current record;
/// continuation lines may still extend its value.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingField {
    key: String,
    value: String,
    line: usize,
}

/// Line-by-line record builder.
///
/// Feed it one [`LineEvent`] at a time with [`RecordAccumulator::accept`];
/// it hands back a record whenever a `%%` boundary closes a non-empty one.
/// Unrecognised lines are collected and only reported by
/// [`RecordAccumulator::finish`], so one pass surfaces every bad line.
#[derive(Debug, Default)]
pub struct RecordAccumulator {
    current: Subtag,
    pending: Option<PendingField>,
    file_date: Option<NaiveDate>,
    unrecognized: Vec<UnrecognizedLine>,
    line: usize,
}

/// Result of a full scan: the header date and the trailing record, if any.
#[derive(Debug, Default)]
pub struct Finished {
    pub file_date: Option<NaiveDate>,
    pub last: Option<Subtag>,
}

impl RecordAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines accepted so far.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Process one event. Returns a completed record when the event closes one.
    pub fn accept(&mut self, event: LineEvent) -> Result<Option<Subtag>, RegistryError> {
        self.line += 1;
        match event {
            LineEvent::FileDate(date) => {
                self.file_date = Some(date);
                Ok(None)
            }
            LineEvent::Field { key, value } => {
                self.flush()?;
                self.pending = Some(PendingField {
                    key,
                    value,
                    line: self.line,
                });
                Ok(None)
            }
            LineEvent::Continuation(text) => {
                match self.pending.as_mut() {
                    Some(pending) => pending.value = join_continuation(&pending.value, &text),
                    None => self.reject(self.line, format!("  {}", text)),
                }
                Ok(None)
            }
            LineEvent::RecordBoundary => {
                self.flush()?;
                Ok(self.take_record())
            }
            LineEvent::Unrecognized(raw) => {
                self.reject(self.line, raw);
                Ok(None)
            }
        }
    }

    /// Close the scan: flush the pending field and return the final record,
    /// which need not be followed by a boundary. Fails with every collected
    /// unrecognised line if there were any.
    pub fn finish(mut self) -> Result<Finished, RegistryError> {
        self.flush()?;
        let last = self.take_record();
        if !self.unrecognized.is_empty() {
            return Err(RegistryError::UnrecognizedLines(self.unrecognized));
        }
        Ok(Finished {
            file_date: self.file_date,
            last,
        })
    }

    fn flush(&mut self) -> Result<(), RegistryError> {
        let Some(PendingField { key, value, line }) = self.pending.take() else {
            return Ok(());
        };
        match FieldKey::parse(&key) {
            Some(field) => self.current.apply(field, value),
            None => {
                self.reject(line, format!("{}: {}", key, value));
                Ok(())
            }
        }
    }

    fn take_record(&mut self) -> Option<Subtag> {
        let record = std::mem::take(&mut self.current);
        (!record.is_empty()).then_some(record)
    }

    fn reject(&mut self, line: usize, text: String) {
        self.unrecognized.push(UnrecognizedLine { line, text });
    }
}

/// Join a continuation fragment onto a field value with a single space,
/// dropping trailing whitespace from the value first.
pub fn join_continuation(previous: &str, fragment: &str) -> String {
    format!("{} {}", previous.trim_end(), fragment)
}
