// src/report.rs
//! Per-item outcomes.
//!
//! A parser never fails on bad page data. It keeps going and writes down what it
//! had to drop or pad, so the caller can look at a [`Report`] instead of grepping
//! logs.
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Token counts did not divide into whole records; the leftover was dropped.
    StructuralMismatch,
    /// An expected fragment was absent; the slot was padded.
    MissingField,
    /// A value did not match its pattern and was treated as missing. The
    /// feature transforms coerce such cells to `None` without a report entry, so
    /// no parser in this crate emits it; callers validating cells themselves can.
    UnparsableValue,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::StructuralMismatch => "structural mismatch",
            SkipReason::MissingField => "missing field",
            SkipReason::UnparsableValue => "unparsable value",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skip {
    /// Which parser step noticed it (e.g. `"odds.classify"`).
    pub stage: &'static str,
    /// Position in that step's input.
    pub index: usize,
    pub reason: SkipReason,
    pub detail: String,
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}: {}", self.stage, self.index, self.reason, self.detail)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    /// Records produced.
    pub produced: usize,
    pub skipped: Vec<Skip>,
}

impl Report {
    pub fn item_done(&mut self) {
        self.produced += 1;
    }

    pub fn items_done(&mut self, n: usize) {
        self.produced += n;
    }

    /// Record a skip and log it as a data-quality warning.
    pub fn skip(
        &mut self,
        stage: &'static str,
        index: usize,
        reason: SkipReason,
        detail: impl Into<String>,
    ) {
        let skip = Skip { stage, index, reason, detail: detail.into() };
        logw!("{}", skip);
        self.skipped.push(skip);
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn count(&self, reason: SkipReason) -> usize {
        self.skipped.iter().filter(|s| s.reason == reason).count()
    }

    /// Take over another step's skips. `produced` stays this step's own count.
    pub fn absorb(&mut self, other: Report) {
        self.skipped.extend(other.skipped);
    }
}

/// A parser's value together with what happened along the way.
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed<T> {
    pub value: T,
    pub report: Report,
}

impl<T> Parsed<T> {
    pub fn new(value: T, report: Report) -> Self {
        Self { value, report }
    }

    pub fn into_parts(self) -> (T, Report) {
        (self.value, self.report)
    }
}
