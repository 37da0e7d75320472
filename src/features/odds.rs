// src/features/odds.rs
//! Decimal odds → implied probabilities, margin and favorite.
use chrono::Datelike;
use serde::Serialize;

use super::events::parse_event_date;
use super::round_to;
use crate::config::options::ParseOptions;
use crate::specs::odds::OddsRecord;

/// Decimal odds as printed; must be a positive finite number.
pub fn parse_decimal_odds(s: &str) -> Option<f64> {
    let v: f64 = s.trim().parse().ok()?;
    (v.is_finite() && v > 0.0).then_some(v)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Favorite {
    Fighter1,
    Fighter2,
    /// Same price on both sides.
    Even,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OddsFeatures {
    pub fighter1_odds: f64,
    pub fighter2_odds: f64,
    pub fighter1_implied: f64,
    pub fighter2_implied: f64,
    pub total_implied: f64,
    /// Bookmaker margin: total implied probability minus 1.
    pub margin: f64,
    pub fighter1_norm: f64,
    pub fighter2_norm: f64,
    pub favorite: Favorite,
    pub odds_diff: f64,
    pub odds_ratio: f64,
    pub favorite_odds: f64,
    pub underdog_odds: f64,
    pub odds_gap: f64,
}

impl OddsFeatures {
    /// All derived values, each rounded to `decimals`. `None` when either price
    /// is not a usable decimal price.
    pub fn from_odds(o1: f64, o2: f64, decimals: u32) -> Option<Self> {
        let valid = |o: f64| o.is_finite() && o > 0.0;
        if !valid(o1) || !valid(o2) {
            return None;
        }
        let r = |x: f64| round_to(x, decimals);

        let i1 = 1.0 / o1;
        let i2 = 1.0 / o2;
        let total = i1 + i2;
        let favorite = if o1 < o2 {
            Favorite::Fighter1
        } else if o2 < o1 {
            Favorite::Fighter2
        } else {
            Favorite::Even
        };

        Some(Self {
            fighter1_odds: o1,
            fighter2_odds: o2,
            fighter1_implied: r(i1),
            fighter2_implied: r(i2),
            total_implied: r(total),
            margin: r(total - 1.0),
            fighter1_norm: r(i1 / total),
            fighter2_norm: r(i2 / total),
            favorite,
            odds_diff: r(o1 - o2),
            odds_ratio: r(o1 / o2),
            favorite_odds: o1.min(o2),
            underdog_odds: o1.max(o2),
            odds_gap: r((o1 - o2).abs()),
        })
    }

    pub fn from_strs(o1: &str, o2: &str, opts: &ParseOptions) -> Option<Self> {
        Self::from_odds(parse_decimal_odds(o1)?, parse_decimal_odds(o2)?, opts.feature_decimals)
    }

    pub fn from_record(rec: &OddsRecord, opts: &ParseOptions) -> Option<Self> {
        Self::from_strs(&rec.fighter1_odds, &rec.fighter2_odds, opts)
    }

    pub fn fighter1_is_favorite(&self) -> bool {
        self.favorite == Favorite::Fighter1
    }
}

/// 1 if fighter1 won, 0 if fighter2 won, -1 for a draw or no result.
pub fn encode_result(rec: &OddsRecord) -> i8 {
    if rec.result == rec.fighter1 {
        1
    } else if rec.result == rec.fighter2 {
        0
    } else {
        -1
    }
}

pub fn has_result(rec: &OddsRecord, opts: &ParseOptions) -> bool {
    !opts.is_draw(&rec.result)
}

/// Per-record feature row: prices, outcome encoding, event date parts.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OddsRecordFeatures {
    pub odds: Option<OddsFeatures>,
    pub result_encoded: i8,
    pub has_result: bool,
    pub year: Option<i32>,
    pub month: Option<u32>,
    /// Monday = 0.
    pub day_of_week: Option<u32>,
}

impl OddsRecordFeatures {
    pub fn from_record(rec: &OddsRecord, opts: &ParseOptions) -> Self {
        let date = parse_event_date(&rec.date);
        Self {
            odds: OddsFeatures::from_record(rec, opts),
            result_encoded: encode_result(rec),
            has_result: has_result(rec, opts),
            year: date.map(|d| d.year()),
            month: date.map(|d| d.month()),
            day_of_week: date.map(|d| d.weekday().num_days_from_monday()),
        }
    }
}
