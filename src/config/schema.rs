// src/config/schema.rs
//! Declared column layouts.
//!
//! Every positional contract the parsers rely on is written down here once, as an
//! ordered list of named slots, and [`Schema::fit`] is the only place a raw value
//! list gets squeezed into one of them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl Schema {
    pub const fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == column)
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| s!(*c)).collect()
    }

    /// All slots empty.
    pub fn blank_row(&self) -> Vec<String> {
        vec![s!(); self.width()]
    }

    /// Place `values` into the slots in order. Short input is right-padded with
    /// empty strings, anything past the last slot is dropped.
    pub fn fit<I, S>(&self, values: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = values
            .into_iter()
            .take(self.width())
            .map(Into::into)
            .collect();
        row.resize(self.width(), s!());
        row
    }

    /// Like [`fit`](Self::fit), but also says how many slots had to be padded.
    pub fn fit_counting<I, S>(&self, values: I) -> (Vec<String>, usize)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = values
            .into_iter()
            .take(self.width())
            .map(Into::into)
            .collect();
        let padded = self.width() - row.len();
        row.resize(self.width(), s!());
        (row, padded)
    }
}

/* ---------------- fight statistics ---------------- */

pub const TOTALS: Schema = Schema {
    name: "totals",
    columns: &[
        "ROUND", "FIGHTER", "KD", "SIG.STR.", "SIG.STR. %", "TOTAL STR.",
        "TD", "TD %", "SUB.ATT", "REV.", "CTRL",
    ],
};

pub const SIG_STRIKES: Schema = Schema {
    name: "significant_strikes",
    columns: &[
        "ROUND", "FIGHTER", "SIG.STR.", "SIG.STR. %", "HEAD", "BODY",
        "LEG", "DISTANCE", "CLINCH", "GROUND",
    ],
};

/// Joined per-round row. Totals columns, then the significant-strike columns
/// that totals does not already carry.
pub const FIGHT_STATS: Schema = Schema {
    name: "fight_stats",
    columns: &[
        "EVENT", "BOUT", "ROUND", "FIGHTER",
        "KD", "SIG.STR.", "SIG.STR. %", "TOTAL STR.", "TD", "TD %", "SUB.ATT", "REV.", "CTRL",
        "HEAD", "BODY", "LEG", "DISTANCE", "CLINCH", "GROUND",
        "URL",
    ],
};

/* ---------------- bout pages ---------------- */

pub const FIGHT_RESULTS: Schema = Schema {
    name: "fight_results",
    columns: &[
        "EVENT", "BOUT", "OUTCOME", "WEIGHTCLASS", "METHOD", "ROUND", "TIME",
        "TIME FORMAT", "REFEREE", "DETAILS", "URL", "TIMESTAMP",
    ],
};

/// Labeled fragments after the two outcome markers, in document order.
pub const RESULT_TAIL: Schema = Schema {
    name: "fight_results_tail",
    columns: &["WEIGHTCLASS", "METHOD", "ROUND", "TIME", "TIME FORMAT", "REFEREE", "DETAILS"],
};

/* ---------------- listings ---------------- */

pub const EVENT_DETAILS: Schema = Schema {
    name: "event_details",
    columns: &["EVENT", "URL", "DATE", "LOCATION"],
};

pub const FIGHT_DETAILS: Schema = Schema {
    name: "fight_details",
    columns: &["EVENT", "BOUT", "URL"],
};

pub const FIGHTERS: Schema = Schema {
    name: "fighters",
    columns: &[
        "NAME", "NICKNAME", "RECORD", "HEIGHT", "WEIGHT", "REACH", "STANCE", "DOB", "URL",
    ],
};

/* ---------------- odds ---------------- */

pub const ODDS: Schema = Schema {
    name: "odds",
    columns: &[
        "event", "fighter1", "fighter2", "fighter1_odds", "fighter2_odds",
        "result", "link", "date",
    ],
};
