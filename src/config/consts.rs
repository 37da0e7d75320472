// src/config/consts.rs

// Record assembly
pub const DRAW_SENTINEL: &str = "-";
pub const BOUT_SEP: &str = " vs. ";
pub const OUTCOME_SEP: &str = "/";
pub const ROUND_LABEL: &str = "Round ";

// Odds page
pub const ODDS_MARKER: char = '@';
pub const ODDS_LABEL_MAX_LEN: usize = 7;
pub const EVENT_INCLUDE: &str = "UFC";
pub const EVENT_EXCLUDE: &[&str] = &["Road to UFC"];

// Features
pub const FEATURE_DECIMALS: u32 = 4;
// f64 carries no more than this many significant decimal digits
pub const MAX_FEATURE_DECIMALS: u32 = 15;
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

// Leading stat-table columns shared by totals and significant strikes (ROUND, FIGHTER)
pub const STAT_KEY_COLS: usize = 2;
