// src/config/options.rs
use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::Result;

/// Runtime knobs for the parsers. `Default` matches the sites as they are
/// today; a TOML snippet can override any subset of fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Result placeholder for draws / no contests.
    pub draw_sentinel: String,
    /// Character that marks an odds cell ("@1.50").
    pub odds_marker: char,
    /// Odds cells longer than this are page noise.
    pub odds_label_max_len: usize,
    /// Decimal places kept on derived odds features.
    pub feature_decimals: u32,
    /// Event listing rows must contain this to be kept.
    pub event_include: String,
    /// ...and none of these.
    pub event_exclude: Vec<String>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            draw_sentinel: s!(DRAW_SENTINEL),
            odds_marker: ODDS_MARKER,
            odds_label_max_len: ODDS_LABEL_MAX_LEN,
            feature_decimals: FEATURE_DECIMALS,
            event_include: s!(EVENT_INCLUDE),
            event_exclude: EVENT_EXCLUDE.iter().map(|e| s!(*e)).collect(),
        }
    }
}

impl ParseOptions {
    /// Defaults overlaid with whatever `text` sets.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let opts: ParseOptions = toml::from_str(text)?;
        logd!("Options: loaded {:?}", opts);
        Ok(opts)
    }

    pub fn is_draw(&self, result: &str) -> bool {
        result == self.draw_sentinel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let opts = ParseOptions::from_toml_str("").unwrap();
        assert_eq!(opts, ParseOptions::default());
    }

    #[test]
    fn partial_override_keeps_the_rest() {
        let opts = ParseOptions::from_toml_str(
            r#"
            draw_sentinel = "DRAW"
            event_exclude = ["Road to UFC", "Dana White's Contender Series"]
            "#,
        )
        .unwrap();
        assert_eq!(opts.draw_sentinel, "DRAW");
        assert_eq!(opts.event_exclude.len(), 2);
        assert_eq!(opts.odds_label_max_len, ODDS_LABEL_MAX_LEN);
        assert!(opts.is_draw("DRAW"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ParseOptions::from_toml_str("odds_markr = '@'").unwrap_err();
        assert!(matches!(err, crate::Error::Options(_)));
    }
}
