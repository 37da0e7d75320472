// src/specs/fighters.rs
//! Fighter profile page: title block plus the `Label: value` detail list.
use serde::Serialize;

use crate::config::schema::{Schema, FIGHTERS};
use crate::core::sanitize::clean_text;
use crate::report::{Parsed, Report, SkipReason};
use crate::store::Record;

#[derive(Clone, Debug, Default)]
pub struct FighterPage {
    pub url: String,
    pub name: String,
    /// Title record text, usually `"Record: 20-5-0"`.
    pub record: String,
    pub nickname: String,
    /// Detail list items, document order.
    pub details: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FighterProfile {
    pub name: String,
    pub nickname: String,
    /// `"W-L-D"`, possibly with a trailing `" (1 NC)"`.
    pub record: String,
    pub url: String,
    /// Normalized key (`"str._acc."`, `"height"`, …) → raw value, page order.
    pub details: Vec<(String, String)>,
}

impl FighterProfile {
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

impl Record for FighterProfile {
    const SCHEMA: Schema = FIGHTERS;
    const KEY: &'static str = "URL";

    fn key(&self) -> &str { &self.url }

    fn to_row(&self) -> Vec<String> {
        let d = |k: &str| s!(self.detail(k).unwrap_or(""));
        vec![
            self.name.clone(),
            self.nickname.clone(),
            self.record.clone(),
            d("height"),
            d("weight"),
            d("reach"),
            d("stance"),
            d("dob"),
            self.url.clone(),
        ]
    }
}

/// `"Str. Acc.: 48%"` → `("str._acc.", "48%")`. Items without a colon carry no
/// field and give `None`.
pub fn split_detail(item: &str) -> Option<(String, String)> {
    let text = clean_text(item);
    let (k, v) = text.split_once(':')?;
    let key = k.trim().to_lowercase().replace(' ', "_");
    Some((key, s!(v.trim())))
}

pub fn parse_fighter(page: &FighterPage) -> Parsed<FighterProfile> {
    const STAGE: &str = "fighters.profile";
    let mut report = Report::default();

    let name = clean_text(&page.name);
    if name.is_empty() {
        report.skip(STAGE, 0, SkipReason::MissingField, "NAME");
    }
    let record = clean_text(&page.record.replace("Record:", ""));

    let mut details: Vec<(String, String)> = Vec::with_capacity(page.details.len());
    for item in &page.details {
        let Some((k, v)) = split_detail(item) else { continue };
        if k.is_empty() {
            continue;
        }
        // later duplicates win, position of the first is kept
        match details.iter_mut().find(|(dk, _)| *dk == k) {
            Some(slot) => slot.1 = v,
            None => details.push((k, v)),
        }
    }

    let profile = FighterProfile {
        name,
        nickname: clean_text(&page.nickname),
        record,
        url: s!(page.url.trim()),
        details,
    };
    logd!("Fighters: {} ({} details)", profile.name, profile.details.len());
    report.item_done();
    Parsed::new(profile, report)
}
