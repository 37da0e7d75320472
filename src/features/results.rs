// src/features/results.rs
use serde::Serialize;

use super::stats::{clock_seconds, parse_count};
use crate::config::consts::{BOUT_SEP, OUTCOME_SEP};
use crate::specs::fight_results::{Bout, Winner};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FinishType {
    Knockout,
    Submission,
    Decision,
    Other,
    /// No method recorded.
    Unknown,
}

impl FinishType {
    pub fn as_str(self) -> &'static str {
        match self {
            FinishType::Knockout => "knockout",
            FinishType::Submission => "submission",
            FinishType::Decision => "decision",
            FinishType::Other => "other",
            FinishType::Unknown => "unknown",
        }
    }
}

/// `"KO/TKO"`, `"TKO - Doctor's Stoppage"` → knockout, and so on.
pub fn finish_type(method: &str) -> FinishType {
    let m = method.trim().to_lowercase();
    if m.is_empty() {
        FinishType::Unknown
    } else if m.contains("ko") {
        FinishType::Knockout
    } else if m.contains("submission") {
        FinishType::Submission
    } else if m.contains("decision") {
        FinishType::Decision
    } else {
        FinishType::Other
    }
}

/// `"Lightweight Bout"` → `"Lightweight"`.
pub fn clean_weight_class(s: &str) -> String {
    s.replace(" Bout", "").trim().to_string()
}

/// `"W/L"` → `("W", "L")`; a missing side is empty.
pub fn split_outcome(outcome: &str) -> (String, String) {
    let mut it = outcome.split(OUTCOME_SEP).map(|p| p.trim().to_string());
    (it.next().unwrap_or_default(), it.next().unwrap_or_default())
}

/// `"A vs. B"` → `("A", "B")`.
pub fn split_bout(bout: &str) -> (String, String) {
    match bout.split_once(BOUT_SEP) {
        Some((a, b)) => (s!(a.trim()), s!(b.trim())),
        None => (s!(bout.trim()), s!()),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultFeatures {
    pub fighter1_result: String,
    pub fighter2_result: String,
    pub winner: Winner,
    pub finish_type: FinishType,
    pub weight_class: String,
    pub round: Option<u32>,
    pub time_seconds: Option<u32>,
}

impl ResultFeatures {
    pub fn from_bout(b: &Bout) -> Self {
        let (fighter1_result, fighter2_result) = split_outcome(&b.outcome);
        Self {
            fighter1_result,
            fighter2_result,
            winner: b.winner(),
            finish_type: finish_type(&b.method),
            weight_class: clean_weight_class(&b.weight_class),
            round: parse_count(&b.round),
            time_seconds: clock_seconds(&b.time),
        }
    }
}
