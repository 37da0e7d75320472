// src/features/stats.rs
//! Stat-cell parsers shared by every table that carries them.
use serde::Serialize;

use crate::config::consts::ROUND_LABEL;
use crate::core::sanitize::leading_digits;
use crate::specs::fight_stats::FightStatRow;

/// `"<landed> of <attempted>"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct StrikeStat {
    pub landed: Option<u32>,
    pub attempted: Option<u32>,
    /// `landed / attempted`; 0 when either is missing or nothing was attempted.
    pub accuracy: f64,
}

pub fn parse_strikes(s: &str) -> StrikeStat {
    let Some((l, a)) = s.split_once(" of ") else { return StrikeStat::default() };
    let landed = parse_count(l);
    let attempted = parse_count(a);
    let accuracy = match (landed, attempted) {
        (Some(l), Some(a)) if a > 0 => l as f64 / a as f64,
        _ => 0.0,
    };
    StrikeStat { landed, attempted, accuracy }
}

/// `"45%"` → `0.45`. `"---"` and anything outside 0–100 → `None`.
pub fn parse_pct(s: &str) -> Option<f64> {
    let v: f64 = s.trim().strip_suffix('%')?.trim().parse().ok()?;
    (0.0..=100.0).contains(&v).then(|| v / 100.0)
}

/// `"4:12"` → 252. `None` past `u32` seconds.
pub fn clock_seconds(s: &str) -> Option<u32> {
    let (m, sec) = s.trim().split_once(':')?;
    if sec.contains(':') {
        return None;
    }
    let m: u32 = m.trim().parse().ok()?;
    let sec: u32 = sec.trim().parse().ok()?;
    m.checked_mul(60)?.checked_add(sec)
}

pub fn parse_count(s: &str) -> Option<u32> {
    s.trim().parse().ok()
}

/// `"Round 2"` → 2.
pub fn round_number(s: &str) -> Option<u32> {
    let i = s.find(ROUND_LABEL)?;
    leading_digits(&s[i + ROUND_LABEL.len()..])?.parse().ok()
}

/// Every numeric column of one joined stats row.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StatFeatures {
    pub round: Option<u32>,
    pub knockdowns: Option<u32>,
    pub sig_strikes: StrikeStat,
    pub sig_strike_pct: Option<f64>,
    pub total_strikes: StrikeStat,
    pub takedowns: StrikeStat,
    pub takedown_pct: Option<f64>,
    pub sub_attempts: Option<u32>,
    pub reversals: Option<u32>,
    pub control_seconds: Option<u32>,
    pub head: StrikeStat,
    pub body: StrikeStat,
    pub leg: StrikeStat,
    pub distance: StrikeStat,
    pub clinch: StrikeStat,
    pub ground: StrikeStat,
}

impl StatFeatures {
    pub fn from_row(row: &FightStatRow) -> Self {
        Self {
            round: round_number(row.get("ROUND")),
            knockdowns: parse_count(row.get("KD")),
            sig_strikes: parse_strikes(row.get("SIG.STR.")),
            sig_strike_pct: parse_pct(row.get("SIG.STR. %")),
            total_strikes: parse_strikes(row.get("TOTAL STR.")),
            takedowns: parse_strikes(row.get("TD")),
            takedown_pct: parse_pct(row.get("TD %")),
            sub_attempts: parse_count(row.get("SUB.ATT")),
            reversals: parse_count(row.get("REV.")),
            control_seconds: clock_seconds(row.get("CTRL")),
            head: parse_strikes(row.get("HEAD")),
            body: parse_strikes(row.get("BODY")),
            leg: parse_strikes(row.get("LEG")),
            distance: parse_strikes(row.get("DISTANCE")),
            clinch: parse_strikes(row.get("CLINCH")),
            ground: parse_strikes(row.get("GROUND")),
        }
    }
}
