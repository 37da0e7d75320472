// src/specs/odds.rs
//! Odds page: fighter/result segmentation and odds pairing.
//!
//! The page gives no labels. Fighter links come out as one flat list where each
//! bout is `fighter1, fighter2, winner`, except that draws and no contests have
//! no winner link at all. The only way to tell is repetition: a third name that
//! is one of the two pending fighters is a result, a brand-new name is the next
//! bout's fighter1.
use serde::Serialize;

use crate::config::options::ParseOptions;
use crate::config::schema::{Schema, ODDS};
use crate::core::sanitize::{clean_text, is_blank};
use crate::report::{Parsed, Report, SkipReason};
use crate::store::Record;

/// One bout as read from the fighter link stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoutTriple {
    pub fighter1: String,
    pub fighter2: String,
    /// Winner's name, or the draw sentinel.
    pub result: String,
}

/// What the extraction collaborator hands over for one event's odds page.
#[derive(Clone, Debug, Default)]
pub struct OddsPage {
    pub event: String,
    pub link: String,
    pub date: String,
    /// Fighter profile link texts, document order.
    pub fighter_tokens: Vec<String>,
    /// Candidate odds cell texts, document order.
    pub odds_cells: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OddsRecord {
    pub event: String,
    pub fighter1: String,
    pub fighter2: String,
    pub fighter1_odds: String,
    pub fighter2_odds: String,
    pub result: String,
    pub link: String,
    pub date: String,
}

impl Record for OddsRecord {
    const SCHEMA: Schema = ODDS;
    const KEY: &'static str = "link";

    fn key(&self) -> &str { &self.link }

    fn to_row(&self) -> Vec<String> {
        row![
            &self.event, &self.fighter1, &self.fighter2,
            &self.fighter1_odds, &self.fighter2_odds,
            &self.result, &self.link, &self.date,
        ]
    }
}

/// Row of the all-events listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventListing {
    pub date: String,
    pub event: String,
    pub link: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    Fighter1,
    Fighter2,
    Result,
}

/// Split the fighter link stream into bouts.
///
/// Always returns equally long fighter1 / fighter2 / result columns: a dangling
/// fighter1 at the end is dropped (and reported), a missing final result is
/// patched with the draw sentinel by [`patch_trailing_draw`].
pub fn classify_fighters<S: AsRef<str>>(
    tokens: &[S],
    opts: &ParseOptions,
) -> Parsed<Vec<BoutTriple>> {
    const STAGE: &str = "odds.classify";
    let mut report = Report::default();

    let names: Vec<String> = tokens
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| !is_blank(t))
        .map(clean_text)
        .collect();

    let mut fighter1: Vec<String> = Vec::with_capacity(names.len() / 3 + 1);
    let mut fighter2: Vec<String> = Vec::with_capacity(names.len() / 3 + 1);
    let mut results: Vec<String> = Vec::with_capacity(names.len() / 3 + 1);
    let mut cursor = Cursor::Fighter1;

    for (i, name) in names.into_iter().enumerate() {
        match cursor {
            Cursor::Fighter1 => {
                fighter1.push(name);
                cursor = Cursor::Fighter2;
            }
            Cursor::Fighter2 => {
                fighter2.push(name);
                cursor = Cursor::Result;
            }
            Cursor::Result => {
                let bout = results.len();
                if name == fighter1[bout] || name == fighter2[bout] {
                    results.push(name);
                    cursor = Cursor::Fighter1;
                } else {
                    logd!(
                        "Odds: token #{} '{}' is new; closing {} vs. {} as a draw",
                        i, name, fighter1[bout], fighter2[bout]
                    );
                    results.push(opts.draw_sentinel.clone());
                    fighter1.push(name);
                    cursor = Cursor::Fighter2;
                }
            }
        }
    }

    if fighter1.len() > fighter2.len() {
        if let Some(dangling) = fighter1.pop() {
            report.skip(
                STAGE,
                fighter1.len(),
                SkipReason::StructuralMismatch,
                format!("fighter '{dangling}' has no opponent"),
            );
        }
    }

    let results = patch_trailing_draw(results, fighter1.len(), &opts.draw_sentinel);

    debug_assert_eq!(fighter1.len(), fighter2.len());
    debug_assert_eq!(fighter1.len(), results.len());

    let bouts: Vec<BoutTriple> = fighter1
        .into_iter()
        .zip(fighter2)
        .zip(results)
        .map(|((fighter1, fighter2), result)| BoutTriple { fighter1, fighter2, result })
        .collect();

    report.items_done(bouts.len());
    Parsed::new(bouts, report)
}

/// End-of-stream fix-up: a page whose last bout is a draw has no trailing marker,
/// which leaves exactly one result fewer than bouts. Fill that one slot.
///
/// This is a heuristic. A page that lost its final winner link for some other
/// reason gets a draw too, and nothing here can tell the two apart.
pub fn patch_trailing_draw(mut results: Vec<String>, bouts: usize, sentinel: &str) -> Vec<String> {
    if results.len() + 1 == bouts {
        logd!("Odds: last bout has no result marker; recording a draw");
        results.push(s!(sentinel));
    }
    results
}

/// Keep short cells carrying the odds marker, marker removed.
pub fn extract_odds_labels<S: AsRef<str>>(cells: &[S], opts: &ParseOptions) -> Vec<String> {
    cells
        .iter()
        .map(|c| clean_text(c.as_ref()))
        .filter(|t| t.chars().count() <= opts.odds_label_max_len && t.contains(opts.odds_marker))
        .map(|t| t.replace(opts.odds_marker, "").trim().to_string())
        .collect()
}

/// Consecutive labels form one bout's `(fighter1_odds, fighter2_odds)`.
pub fn pair_odds(labels: &[String]) -> Parsed<Vec<(String, String)>> {
    let mut report = Report::default();
    let pairs: Vec<(String, String)> = labels
        .chunks_exact(2)
        .map(|p| (p[0].clone(), p[1].clone()))
        .collect();

    if labels.len() % 2 == 1 {
        report.skip(
            "odds.pair",
            labels.len() - 1,
            SkipReason::StructuralMismatch,
            format!("odds label '{}' has no partner", labels[labels.len() - 1]),
        );
    }
    report.items_done(pairs.len());
    Parsed::new(pairs, report)
}

/// Whole page → records. Bouts without odds get empty odds columns.
pub fn assemble_odds(page: &OddsPage, opts: &ParseOptions) -> Parsed<Vec<OddsRecord>> {
    let (bouts, mut report) = classify_fighters(&page.fighter_tokens, opts).into_parts();
    let labels = extract_odds_labels(&page.odds_cells, opts);
    let (pairs, pair_report) = pair_odds(&labels).into_parts();

    // the record count comes from the classifier
    report.absorb(pair_report);

    if pairs.len() < bouts.len() {
        report.skip(
            "odds.assemble",
            pairs.len(),
            SkipReason::MissingField,
            format!("{} bouts but only {} odds pairs", bouts.len(), pairs.len()),
        );
    }

    let records: Vec<OddsRecord> = bouts
        .into_iter()
        .enumerate()
        .map(|(i, b)| {
            let (o1, o2) = pairs.get(i).cloned().unwrap_or_default();
            OddsRecord {
                event: page.event.clone(),
                fighter1: b.fighter1,
                fighter2: b.fighter2,
                fighter1_odds: o1,
                fighter2_odds: o2,
                result: b.result,
                link: page.link.clone(),
                date: page.date.clone(),
            }
        })
        .collect();

    logd!("Odds: {} -> {} records", page.event, records.len());
    Parsed::new(records, report)
}

/// Zip the listing's date / event / link columns, truncating to the shortest.
pub fn pair_event_table<S: AsRef<str>>(
    dates: &[S],
    events: &[S],
    links: &[S],
) -> Parsed<Vec<EventListing>> {
    let mut report = Report::default();
    let n = dates.len().min(events.len()).min(links.len());
    let longest = dates.len().max(events.len()).max(links.len());
    if n < longest {
        report.skip(
            "odds.events",
            n,
            SkipReason::StructuralMismatch,
            format!(
                "listing columns disagree (dates={}, events={}, links={})",
                dates.len(), events.len(), links.len()
            ),
        );
    }

    let rows: Vec<EventListing> = (0..n)
        .map(|i| EventListing {
            date: clean_text(dates[i].as_ref()),
            event: clean_text(events[i].as_ref()),
            link: s!(links[i].as_ref()),
        })
        .collect();
    report.items_done(rows.len());
    Parsed::new(rows, report)
}

/// Keep the promotion's own numbered / fight-night events.
pub fn filter_ufc_events(rows: &[EventListing], opts: &ParseOptions) -> Vec<EventListing> {
    rows.iter()
        .filter(|r| r.event.contains(opts.event_include.as_str()))
        .filter(|r| !opts.event_exclude.iter().any(|x| r.event.contains(x.as_str())))
        .cloned()
        .collect()
}
