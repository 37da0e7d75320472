// src/specs/fight_results.rs
//! Bout-detail fragments → one [`Bout`].
//!
//! Fragment order on the page:
//! `0` event, `1..=2` fighter names, `3..=4` W/L markers, then labeled items
//! (`"Method: KO/TKO"`, `"Round: 3"`, …) in [`RESULT_TAIL`] order. Anything the
//! page left out at the end becomes an empty field.
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::consts::{BOUT_SEP, OUTCOME_SEP, TIMESTAMP_FMT};
use crate::config::schema::{Schema, FIGHT_RESULTS, RESULT_TAIL};
use crate::core::sanitize::{clean_fragment, strip_label};
use crate::report::{Parsed, Report, SkipReason};
use crate::store::Record;

const STAGE: &str = "results.decompose";

/// Extracted text of one bout page's header block.
#[derive(Clone, Debug, Default)]
pub struct ResultPage {
    pub fragments: Vec<String>,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Bout {
    pub event: String,
    /// `"A vs. B"`
    pub bout: String,
    pub fighter_a: String,
    pub fighter_b: String,
    /// `"W/L"`, `"L/W"`, `"D/D"`, `"NC/NC"`, …
    pub outcome: String,
    pub weight_class: String,
    pub method: String,
    pub round: String,
    pub time: String,
    pub time_format: String,
    pub referee: String,
    pub details: String,
    pub url: String,
    pub scraped_at: Option<NaiveDateTime>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Winner {
    FighterA,
    FighterB,
    /// Draw, no contest, or no marker at all.
    Draw,
}

impl Bout {
    /// Copy of this bout stamped with the scrape time.
    pub fn with_timestamp(&self, at: NaiveDateTime) -> Bout {
        Bout { scraped_at: Some(at), ..self.clone() }
    }

    pub fn winner(&self) -> Winner {
        winner(&self.outcome)
    }

    /// Winner's name, `None` for draws.
    pub fn winner_name(&self) -> Option<&str> {
        match self.winner() {
            Winner::FighterA => Some(&self.fighter_a),
            Winner::FighterB => Some(&self.fighter_b),
            Winner::Draw => None,
        }
    }
}

impl Record for Bout {
    const SCHEMA: Schema = FIGHT_RESULTS;
    const KEY: &'static str = "URL";

    fn key(&self) -> &str { &self.url }

    fn to_row(&self) -> Vec<String> {
        let ts = self
            .scraped_at
            .map(|t| t.format(TIMESTAMP_FMT).to_string())
            .unwrap_or_default();
        vec![
            self.event.clone(),
            self.bout.clone(),
            self.outcome.clone(),
            self.weight_class.clone(),
            self.method.clone(),
            self.round.clone(),
            self.time.clone(),
            self.time_format.clone(),
            self.referee.clone(),
            self.details.clone(),
            self.url.clone(),
            ts,
        ]
    }
}

/// `"W/L"` → A, `"L/W"` → B, anything else → draw.
pub fn winner(outcome: &str) -> Winner {
    let mut sides = outcome.split(OUTCOME_SEP).map(str::trim);
    match (sides.next(), sides.next()) {
        (Some("W"), _) => Winner::FighterA,
        (_, Some("W")) => Winner::FighterB,
        _ => Winner::Draw,
    }
}

/// Rebuild a bout from its page fragments. Never fails; every padded field is
/// listed in the report.
pub fn decompose<S: AsRef<str>>(fragments: &[S], url: &str) -> Parsed<Bout> {
    let mut report = Report::default();
    let frags: Vec<String> = fragments
        .iter()
        .map(|f| clean_fragment(f.as_ref()).trim().to_string())
        .collect();

    let at = |i: usize| frags.get(i).cloned().unwrap_or_default();

    if frags.is_empty() {
        report.skip(STAGE, 0, SkipReason::MissingField, "EVENT");
    }
    let (fighter_a, fighter_b) = (at(1), at(2));
    let bout = if frags.len() >= 3 {
        join!(&fighter_a, BOUT_SEP, &fighter_b)
    } else {
        report.skip(STAGE, frags.len(), SkipReason::MissingField, "BOUT");
        s!()
    };
    let outcome = if frags.len() >= 5 {
        join!(&frags[3], OUTCOME_SEP, &frags[4])
    } else {
        report.skip(STAGE, frags.len(), SkipReason::MissingField, "OUTCOME");
        s!()
    };

    let labeled = frags.iter().skip(5).map(|f| s!(strip_label(f)));
    let (tail, padded) = RESULT_TAIL.fit_counting(labeled);
    if padded > 0 {
        let missing = RESULT_TAIL.columns[RESULT_TAIL.width() - padded..].join(", ");
        report.skip(STAGE, frags.len(), SkipReason::MissingField, missing);
    }
    let overflow = frags.len().saturating_sub(5 + RESULT_TAIL.width());
    if overflow > 0 {
        report.skip(
            STAGE,
            5 + RESULT_TAIL.width(),
            SkipReason::StructuralMismatch,
            format!("{overflow} fragments past DETAILS dropped"),
        );
    }

    let [weight_class, method, round, time, time_format, referee, details]: [String; 7] =
        match tail.try_into() {
            Ok(t) => t,
            Err(_) => Default::default(),
        };

    let out = Bout {
        event: at(0),
        bout,
        fighter_a,
        fighter_b,
        outcome,
        weight_class,
        method,
        round,
        time,
        time_format,
        referee,
        details,
        url: s!(url),
        scraped_at: None,
    };
    logd!("Results: {} [{}] -> {}", out.bout, out.url, out.outcome);
    report.item_done();
    Parsed::new(out, report)
}

pub fn parse_fight_results(page: &ResultPage) -> Parsed<Bout> {
    decompose(&page.fragments, &page.url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn early_event_without_trailing_fields() {
        let frags = [
            "UFC 1", "Royce Gracie", "Art Jimmerson", "W", "L",
            "Weight: 200", "Method: Submission", "Round: 1", "Time: 2:18",
        ];
        let out = decompose(&frags, "http://ufcstats.com/fight-details/1");
        let b = &out.value;
        assert_eq!(b.event, "UFC 1");
        assert_eq!(b.fighter_a, "Royce Gracie");
        assert_eq!(b.fighter_b, "Art Jimmerson");
        assert_eq!(b.bout, "Royce Gracie vs. Art Jimmerson");
        assert_eq!(b.outcome, "W/L");
        assert_eq!(b.weight_class, "200");
        assert_eq!(b.method, "Submission");
        assert_eq!(b.round, "1");
        assert_eq!(b.time, "2:18");
        assert_eq!(b.time_format, "");
        assert_eq!(b.details, "");
        assert_eq!(b.winner_name(), Some("Royce Gracie"));

        assert_eq!(out.report.skipped.len(), 1);
        assert_eq!(out.report.skipped[0].detail, "TIME FORMAT, REFEREE, DETAILS");
    }

    #[test]
    fn page_layout_is_cleaned() {
        let frags = [
            "\n    UFC 300: Pereira vs. Hill\n  ",
            "\n Alex Pereira ",
            "Jamahal Hill",
            "W",
            "L",
            "\n    Light Heavyweight Title Bout\n",
            "Method:\n    KO/TKO",
            "Round:\n    1",
            "Time:\n    3:14",
            "Time format:\n    5 Rnd (5-5-5-5-5)",
            "Referee:\n    Marc Goddard",
            "Details:\n    Punch to Head At Distance",
        ];
        let out = decompose(&frags, "u");
        let b = &out.value;
        assert!(out.report.is_clean(), "{:?}", out.report);
        assert_eq!(b.event, "UFC 300: Pereira vs. Hill");
        assert_eq!(b.weight_class, "Light Heavyweight Title Bout");
        assert_eq!(b.method, "KO/TKO");
        assert_eq!(b.time, "3:14");
        assert_eq!(b.time_format, "5 Rnd (5-5-5-5-5)");
        assert_eq!(b.referee, "Marc Goddard");
        assert_eq!(b.details, "Punch to Head At Distance");
    }

    #[test]
    fn empty_page_still_yields_a_row() {
        let out = decompose::<&str>(&[], "u");
        assert_eq!(out.value.url, "u");
        assert_eq!(out.value.to_row().len(), FIGHT_RESULTS.width());
        assert_eq!(out.report.count(SkipReason::MissingField), 4);
        assert_eq!(out.value.winner(), Winner::Draw);
    }

    #[test]
    fn outcomes() {
        assert_eq!(winner("W/L"), Winner::FighterA);
        assert_eq!(winner("L/W"), Winner::FighterB);
        assert_eq!(winner("D/D"), Winner::Draw);
        assert_eq!(winner("NC/NC"), Winner::Draw);
        assert_eq!(winner(""), Winner::Draw);
    }

    #[test]
    fn timestamp_is_a_new_value() {
        let b = decompose(&["UFC 1", "A", "B", "L", "W"], "u").value;
        let at = NaiveDate::from_ymd_opt(2024, 4, 13)
            .and_then(|d| d.and_hms_opt(22, 5, 0))
            .unwrap();
        let stamped = b.with_timestamp(at);
        assert_eq!(b.scraped_at, None);
        assert_eq!(stamped.to_row().last().unwrap(), "2024-04-13 22:05:00");
        assert_eq!(stamped.winner_name(), Some("B"));
    }

    #[test]
    fn extra_fragments_are_reported() {
        let mut frags: Vec<String> = ["E", "A", "B", "W", "L"].map(String::from).to_vec();
        frags.extend((0..9).map(|i| format!("K{i}: v{i}")));
        let out = decompose(&frags, "u");
        assert_eq!(out.value.details, "v6");
        assert_eq!(out.report.count(SkipReason::StructuralMismatch), 1);
    }
}
