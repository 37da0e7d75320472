// src/features/fighters.rs
use serde::Serialize;

use super::round_to;
use crate::core::sanitize::leading_digits;
use crate::specs::fighters::FighterProfile;

const CM_PER_FOOT: f64 = 30.48;
const CM_PER_INCH: f64 = 2.54;
const KG_PER_LB: f64 = 0.453592;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FightRecord {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl FightRecord {
    /// Saturates at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.wins.saturating_add(self.losses).saturating_add(self.draws)
    }

    /// Wins over all fights; 0 with no fights.
    pub fn win_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            n => self.wins as f64 / n as f64,
        }
    }
}

/// `"20-5-0"` (optionally `"20-5-0 (1 NC)"`). Parts that are not numbers count
/// as 0; fewer than three parts is an all-zero record.
pub fn parse_record(s: &str) -> FightRecord {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() < 3 {
        return FightRecord::default();
    }
    let n = |p: &str| leading_digits(p).and_then(|d| d.parse::<u32>().ok()).unwrap_or(0);
    FightRecord { wins: n(parts[0]), losses: n(parts[1]), draws: n(parts[2]) }
}

/// `5' 11"` → 180.34.
pub fn height_cm(s: &str) -> Option<f64> {
    let (feet, rest) = s.trim().split_once('\'')?;
    let feet: u32 = feet.trim().parse().ok()?;
    let inches: u32 = leading_digits(rest)?.parse().ok()?;
    Some(round_to(feet as f64 * CM_PER_FOOT + inches as f64 * CM_PER_INCH, 2))
}

/// `185 lbs.` → 83.91.
pub fn weight_kg(s: &str) -> Option<f64> {
    let i = s.find("lbs")?;
    let lbs: u32 = s[..i].trim().parse().ok()?;
    Some(round_to(lbs as f64 * KG_PER_LB, 2))
}

/// `76"` (or `76.5"`) → 193.04.
pub fn reach_cm(s: &str) -> Option<f64> {
    let t = s.trim();
    let end = t
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(t.len());
    let inches: f64 = t[..end].parse().ok()?;
    Some(round_to(inches * CM_PER_INCH, 2))
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FighterFeatures {
    pub record: FightRecord,
    pub total_fights: u32,
    pub win_rate: f64,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub reach_cm: Option<f64>,
}

impl FighterFeatures {
    pub fn from_profile(p: &FighterProfile) -> Self {
        let record = parse_record(&p.record);
        let detail = |k: &str| p.detail(k).unwrap_or("");
        Self {
            record,
            total_fights: record.total(),
            win_rate: record.win_rate(),
            height_cm: height_cm(detail("height")),
            weight_kg: weight_kg(detail("weight")),
            reach_cm: reach_cm(detail("reach")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records() {
        let r = parse_record("20-5-0");
        assert_eq!((r.wins, r.losses, r.draws), (20, 5, 0));
        assert_eq!(r.total(), 25);
        assert_eq!(r.win_rate(), 0.8);

        let r = parse_record("12-3-0 (1 NC)");
        assert_eq!(r.total(), 15);

        assert_eq!(parse_record("x-1-2"), FightRecord { wins: 0, losses: 1, draws: 2 });
        assert_eq!(parse_record("--"), FightRecord::default());
        assert_eq!(parse_record("").win_rate(), 0.0);
    }

    #[test]
    fn huge_record_saturates() {
        let r = parse_record("4294967295-1-0");
        assert_eq!(r.wins, u32::MAX);
        assert_eq!(r.total(), u32::MAX);
        assert!(r.win_rate() <= 1.0);
    }

    #[test]
    fn measurements() {
        assert_eq!(height_cm("5' 11\""), Some(180.34));
        assert_eq!(height_cm("6'4\""), Some(193.04));
        assert_eq!(height_cm("--"), None);
        assert_eq!(weight_kg("185 lbs."), Some(83.91));
        assert_eq!(weight_kg("--"), None);
        assert_eq!(reach_cm("76\""), Some(193.04));
        assert_eq!(reach_cm("--"), None);
    }

    #[test]
    fn from_profile() {
        let p = FighterProfile {
            record: s!("24-3-0"),
            details: vec![
                (s!("height"), s!("6' 4\"")),
                (s!("weight"), s!("185 lbs.")),
                (s!("reach"), s!("80\"")),
            ],
            ..Default::default()
        };
        let f = FighterFeatures::from_profile(&p);
        assert_eq!(f.total_fights, 27);
        assert_eq!(f.height_cm, Some(193.04));
        assert_eq!(f.reach_cm, Some(203.2));
        assert_eq!(f.weight_kg, Some(83.91));
    }
}
