// src/specs/fight_stats.rs
//! Bout page statistics tables → one row per fighter per round.
//!
//! Each stat cell on the page stacks both fighters' values (A above B). Once split
//! per fighter, the values come out round-major with the fighter's name opening
//! every table row, so the name is the only row marker there is:
//!
//! ```text
//! [name, totals…]            overall totals
//! [name, totals…] × rounds   per-round totals
//! [name, sig…]               overall significant strikes
//! [name, sig…]    × rounds   per-round significant strikes
//! ```
use serde::Serialize;

use crate::config::consts::{BOUT_SEP, ROUND_LABEL, STAT_KEY_COLS};
use crate::config::schema::{Schema, FIGHT_STATS, SIG_STRIKES, TOTALS};
use crate::core::sanitize::clean_text;
use crate::report::{Parsed, Report, SkipReason};
use crate::store::Record;

/// First significant-strikes column that the totals table does not also carry.
pub const SIG_ONLY_FROM: usize = 4;

/// Extracted text of one bout page's statistics tables.
#[derive(Clone, Debug, Default)]
pub struct StatsPage {
    pub event: String,
    /// Fighter person links, document order (first two name the bout).
    pub fighters: Vec<String>,
    pub url: String,
    /// One entry per table column cell: its stacked paragraph texts.
    pub cells: Vec<Vec<String>>,
}

/// One row of a per-fighter sub-table (or of the joined table).
/// `cells[0]` is the round label, `cells[1]` the fighter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundStatRow {
    /// `None` only on the all-missing placeholder row.
    pub round: Option<u32>,
    pub cells: Vec<String>,
}

impl RoundStatRow {
    fn build(schema: &Schema, round: u32, group: &[String]) -> Self {
        let label = join!(ROUND_LABEL, &round.to_string());
        let cells = schema.fit(std::iter::once(label).chain(group.iter().cloned()));
        Self { round: Some(round), cells }
    }

    fn missing(schema: &Schema) -> Self {
        Self { round: None, cells: schema.blank_row() }
    }

    pub fn fighter(&self) -> &str {
        self.cells.get(1).map(String::as_str).unwrap_or("")
    }
}

pub type JoinedRound = RoundStatRow;

/// One fighter's two sub-tables. Neither is ever empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FighterRounds {
    pub totals: Vec<RoundStatRow>,
    pub sig_strikes: Vec<RoundStatRow>,
}

impl FighterRounds {
    /// Placeholder for a fighter with no recorded rounds.
    pub fn missing() -> Self {
        Self {
            totals: vec![RoundStatRow::missing(&TOTALS)],
            sig_strikes: vec![RoundStatRow::missing(&SIG_STRIKES)],
        }
    }

    pub fn rounds(&self) -> usize {
        self.totals.iter().filter(|r| r.round.is_some()).count()
    }
}

/// Final per-round row, laid out as [`FIGHT_STATS`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FightStatRow {
    pub round: Option<u32>,
    pub cells: Vec<String>,
}

impl FightStatRow {
    /// Cell by column name; empty for unknown columns.
    pub fn get(&self, column: &str) -> &str {
        FIGHT_STATS
            .index_of(column)
            .and_then(|i| self.cells.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn event(&self) -> &str { self.get("EVENT") }
    pub fn bout(&self) -> &str { self.get("BOUT") }
    pub fn fighter(&self) -> &str { self.get("FIGHTER") }
    pub fn url(&self) -> &str { self.get("URL") }
}

impl Record for FightStatRow {
    const SCHEMA: Schema = FIGHT_STATS;
    const KEY: &'static str = "URL";

    fn key(&self) -> &str { self.url() }
    fn to_row(&self) -> Vec<String> { self.cells.clone() }
}

/// De-interleave stacked cells: even paragraphs belong to fighter A, odd to B.
pub fn split_fighter_columns<S: AsRef<str>>(cells: &[Vec<S>]) -> (Vec<String>, Vec<String>) {
    let mut a = Vec::new();
    let mut b = Vec::new();
    for cell in cells {
        for (i, p) in cell.iter().enumerate() {
            let v = clean_text(p.as_ref());
            if i % 2 == 0 { a.push(v) } else { b.push(v) }
        }
    }
    (a, b)
}

/// Cut a fighter's flat list into table rows. A new row starts every time the
/// first value (the fighter's name) shows up again.
pub fn group_by_header(flat: &[String]) -> Vec<Vec<String>> {
    let Some(header) = flat.first() else { return Vec::new() };

    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for v in flat {
        if v == header && !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
        current.push(v.clone());
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Rounds recorded in `groups` rows: two overall rows, the rest split evenly.
pub fn round_count(groups: usize) -> usize {
    groups.saturating_sub(2) / 2
}

/// Rebuild both sub-tables from a fighter's row groups.
///
/// Round `r` (from 1) takes its totals from group `r` and its significant strikes
/// from group `r + G/2`. With zero rounds both tables hold one all-missing row.
pub fn reconstruct(groups: &[Vec<String>]) -> FighterRounds {
    let g = groups.len();
    let rounds = round_count(g);
    if rounds == 0 {
        return FighterRounds::missing();
    }

    let half = g / 2;
    let totals: Vec<RoundStatRow> = (1..=rounds)
        .filter_map(|r| groups.get(r).map(|grp| RoundStatRow::build(&TOTALS, r as u32, grp)))
        .collect();
    let sig_strikes: Vec<RoundStatRow> = (1..=rounds)
        .filter_map(|r| groups.get(r + half).map(|grp| RoundStatRow::build(&SIG_STRIKES, r as u32, grp)))
        .collect();

    if totals.is_empty() || sig_strikes.is_empty() {
        return FighterRounds::missing();
    }
    FighterRounds { totals, sig_strikes }
}

/// [`group_by_header`] then [`reconstruct`].
pub fn reconstruct_fighter(flat: &[String]) -> FighterRounds {
    reconstruct(&group_by_header(flat))
}

/// Inner join on round number. Each left row pairs with the first right row of the
/// same round; the right row contributes `right[right_from..]`. A round already
/// emitted is not emitted again, so joining a table with itself changes nothing.
pub fn inner_join_on_round(
    left: &[RoundStatRow],
    right: &[RoundStatRow],
    right_from: usize,
) -> Vec<RoundStatRow> {
    let mut seen: Vec<Option<u32>> = Vec::with_capacity(left.len());
    let mut out = Vec::with_capacity(left.len().min(right.len()));

    for l in left {
        if seen.contains(&l.round) {
            continue;
        }
        let Some(r) = right.iter().find(|r| r.round == l.round) else { continue };
        seen.push(l.round);

        let mut cells = l.cells.clone();
        cells.extend(r.cells.iter().skip(right_from).cloned());
        out.push(RoundStatRow { round: l.round, cells });
    }
    out
}

/// Totals + significant strikes for one fighter. Rounds present on only one side
/// are dropped.
pub fn join_rounds(fr: &FighterRounds) -> Vec<JoinedRound> {
    inner_join_on_round(&fr.totals, &fr.sig_strikes, SIG_ONLY_FROM)
}

/// Both fighters' joined rows, A first, stamped with the bout identity.
pub fn combine_bout(
    event: &str,
    bout: &str,
    url: &str,
    a: &[JoinedRound],
    b: &[JoinedRound],
) -> Vec<FightStatRow> {
    a.iter()
        .chain(b)
        .map(|j| {
            let values = [event, bout]
                .into_iter()
                .map(String::from)
                .chain(j.cells.iter().cloned())
                .chain(std::iter::once(s!(url)));
            FightStatRow { round: j.round, cells: FIGHT_STATS.fit(values) }
        })
        .collect()
}

/// `"A vs. B"` from the first two fighter links; shorter lists join what is there.
pub fn bout_label<S: AsRef<str>>(fighters: &[S]) -> String {
    fighters
        .iter()
        .take(2)
        .map(|f| clean_text(f.as_ref()))
        .collect::<Vec<_>>()
        .join(BOUT_SEP)
}

/// Whole statistics section of one bout page.
pub fn parse_fight_stats(page: &StatsPage) -> Parsed<Vec<FightStatRow>> {
    const STAGE: &str = "stats.reconstruct";
    let mut report = Report::default();

    let (flat_a, flat_b) = split_fighter_columns(&page.cells);
    let mut joined: [Vec<JoinedRound>; 2] = [Vec::new(), Vec::new()];

    for (side, flat) in [flat_a, flat_b].iter().enumerate() {
        let groups = group_by_header(flat);
        check_groups(&groups, side, &mut report);

        let fr = reconstruct(&groups);
        if fr.totals.len() != fr.sig_strikes.len() {
            report.skip(
                STAGE,
                side,
                SkipReason::StructuralMismatch,
                format!(
                    "{} totals rows vs {} significant-strike rows; keeping common rounds",
                    fr.totals.len(),
                    fr.sig_strikes.len()
                ),
            );
        }
        joined[side] = join_rounds(&fr);
    }

    let bout = bout_label(&page.fighters);
    let event = clean_text(&page.event);
    let rows = combine_bout(&event, &bout, &page.url, &joined[0], &joined[1]);

    logd!("Stats: {} ({}) -> {} rows", bout, page.url, rows.len());
    report.items_done(rows.len());
    Parsed::new(rows, report)
}

/* ---------------- helpers ---------------- */

fn check_groups(groups: &[Vec<String>], side: usize, report: &mut Report) {
    const STAGE: &str = "stats.group";
    let g = groups.len();
    if g == 0 {
        report.skip(STAGE, side, SkipReason::MissingField, "no statistics for fighter");
        return;
    }
    if g % 2 == 1 {
        report.skip(
            STAGE,
            side,
            SkipReason::StructuralMismatch,
            format!("{g} row groups do not split into two equal tables"),
        );
    }
    // name plus at least one value per row
    if groups.iter().any(|grp| grp.len() < STAT_KEY_COLS) {
        report.skip(STAGE, side, SkipReason::MissingField, "row group without values");
    }
}
