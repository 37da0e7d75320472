// src/specs/events.rs
//! Completed-events listing and per-event bout listing.
use serde::Serialize;

use crate::config::consts::BOUT_SEP;
use crate::config::schema::{Schema, EVENT_DETAILS, FIGHT_DETAILS};
use crate::core::sanitize::clean_text;
use crate::report::{Parsed, Report, SkipReason};
use crate::store::Record;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventRow {
    pub event: String,
    pub url: String,
    pub date: String,
    pub location: String,
}

impl Record for EventRow {
    const SCHEMA: Schema = EVENT_DETAILS;
    const KEY: &'static str = "URL";

    fn key(&self) -> &str { &self.url }

    fn to_row(&self) -> Vec<String> {
        row![&self.event, &self.url, &self.date, &self.location]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FightListing {
    pub event: String,
    pub bout: String,
    pub url: String,
}

impl Record for FightListing {
    const SCHEMA: Schema = FIGHT_DETAILS;
    const KEY: &'static str = "URL";

    fn key(&self) -> &str { &self.url }

    fn to_row(&self) -> Vec<String> {
        row![&self.event, &self.bout, &self.url]
    }
}

/// Zip the listing columns into rows.
///
/// The dates and locations columns open with the upcoming event, which has no
/// name link; that first entry is dropped before pairing. Unequal columns pair
/// up to the shortest and the rest is reported.
pub fn parse_event_list<S: AsRef<str>>(
    names: &[S],
    urls: &[S],
    dates: &[S],
    locations: &[S],
) -> Parsed<Vec<EventRow>> {
    let mut report = Report::default();
    let dates = dates.get(1..).unwrap_or(&[]);
    let locations = locations.get(1..).unwrap_or(&[]);

    let lens = [names.len(), urls.len(), dates.len(), locations.len()];
    let n = lens.iter().copied().min().unwrap_or(0);
    if lens.iter().any(|&l| l != n) {
        report.skip(
            "events.list",
            n,
            SkipReason::StructuralMismatch,
            format!("column lengths {lens:?}; keeping {n} rows"),
        );
    }

    let rows: Vec<EventRow> = (0..n)
        .map(|i| EventRow {
            event: clean_text(names[i].as_ref()),
            url: s!(urls[i].as_ref().trim()),
            date: clean_text(dates[i].as_ref()),
            location: clean_text(locations[i].as_ref()),
        })
        .collect();

    logd!("Events: {} rows", rows.len());
    report.items_done(rows.len());
    Parsed::new(rows, report)
}

/// Fighter links come in pairs, one pair per bout row, in the same order as the
/// bout detail links.
pub fn pair_fight_list<S: AsRef<str>>(
    event: &str,
    fighters: &[S],
    urls: &[S],
) -> Parsed<Vec<FightListing>> {
    const STAGE: &str = "events.fights";
    let mut report = Report::default();
    let event = clean_text(event);

    let bouts: Vec<String> = fighters
        .chunks_exact(2)
        .map(|p| join!(&clean_text(p[0].as_ref()), BOUT_SEP, &clean_text(p[1].as_ref())))
        .collect();
    if fighters.len() % 2 == 1 {
        report.skip(
            STAGE,
            fighters.len() - 1,
            SkipReason::StructuralMismatch,
            "fighter link without an opponent",
        );
    }
    if bouts.len() != urls.len() {
        report.skip(
            STAGE,
            bouts.len().min(urls.len()),
            SkipReason::StructuralMismatch,
            format!("{} bouts vs {} detail links", bouts.len(), urls.len()),
        );
    }

    let rows: Vec<FightListing> = bouts
        .into_iter()
        .zip(urls)
        .map(|(bout, url)| FightListing {
            event: event.clone(),
            bout,
            url: s!(url.as_ref().trim()),
        })
        .collect();

    logd!("Events: {} -> {} bouts", event, rows.len());
    report.items_done(rows.len());
    Parsed::new(rows, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upcoming_event_is_skipped() {
        let out = parse_event_list(
            &["UFC 300: Pereira vs. Hill", "UFC Fight Night: Nicolau vs. Perez"],
            &["http://ufcstats.com/event-details/a", "http://ufcstats.com/event-details/b"],
            &["May 04, 2024", "April 13, 2024", "April 27, 2024"],
            &["Rio de Janeiro, Brazil", "Las Vegas, Nevada, USA", "Las Vegas, Nevada, USA"],
        );
        assert!(out.report.is_clean());
        assert_eq!(out.value.len(), 2);
        assert_eq!(out.value[0].date, "April 13, 2024");
        assert_eq!(out.value[0].location, "Las Vegas, Nevada, USA");
        assert_eq!(out.value[1].key(), "http://ufcstats.com/event-details/b");
    }

    #[test]
    fn short_columns_truncate() {
        let out = parse_event_list(&["A", "B"], &["a", "b"], &["next", "d1"], &["next", "l1"]);
        assert_eq!(out.value.len(), 1);
        assert_eq!(out.report.count(SkipReason::StructuralMismatch), 1);

        let out = parse_event_list::<&str>(&[], &[], &[], &[]);
        assert!(out.value.is_empty());
        assert!(out.report.is_clean());
    }

    #[test]
    fn bouts_pair_fighters() {
        let out = pair_fight_list(
            " UFC 1: The Beginning ",
            &["Royce Gracie", "Gerard Gordeau", "Jason DeLucia", "Trent Jenkins"],
            &["f1", "f2"],
        );
        assert!(out.report.is_clean());
        assert_eq!(out.value[0].bout, "Royce Gracie vs. Gerard Gordeau");
        assert_eq!(out.value[1].event, "UFC 1: The Beginning");
        assert_eq!(out.value[1].to_row(), row!["UFC 1: The Beginning", "Jason DeLucia vs. Trent Jenkins", "f2"]);
    }

    #[test]
    fn unpaired_fighter_is_reported() {
        let out = pair_fight_list("E", &["A", "B", "C"], &["f1", "f2"]);
        assert_eq!(out.value.len(), 1);
        assert_eq!(out.report.count(SkipReason::StructuralMismatch), 2);
    }
}
