// src/features/events.rs
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::specs::events::EventRow;

/// Date layouts seen on the stats and odds sites.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%d %b %Y", "%Y-%m-%d"];

pub fn parse_event_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Monday = 0.
    pub day_of_week: u32,
}

impl From<NaiveDate> for DateParts {
    fn from(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
            day_of_week: d.weekday().num_days_from_monday(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub city: String,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// `"Las Vegas, Nevada, USA"` → city / state / country. Two parts are city and
/// country.
pub fn split_location(s: &str) -> Location {
    let parts: Vec<&str> = s.split(", ").map(str::trim).collect();
    let own = |p: &str| Some(s!(p));
    match parts.as_slice() {
        [city] => Location { city: s!(*city), state: None, country: None },
        [city, country] => Location { city: s!(*city), state: None, country: own(*country) },
        [city, state, country, ..] => Location {
            city: s!(*city),
            state: own(*state),
            country: own(*country),
        },
        [] => Location::default(),
    }
}

/// Numbered pay-per-view card: `"UFC <digits>"` anywhere in the name.
pub fn is_ppv(event: &str) -> bool {
    event
        .match_indices("UFC ")
        .any(|(i, m)| event[i + m.len()..].starts_with(|c: char| c.is_ascii_digit()))
}

pub fn is_fight_night(event: &str) -> bool {
    event.to_lowercase().contains("fight night")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventFeatures {
    pub date: Option<DateParts>,
    pub location: Location,
    pub is_ppv: bool,
    pub is_fight_night: bool,
}

impl EventFeatures {
    pub fn from_row(row: &EventRow) -> Self {
        Self {
            date: parse_event_date(&row.date).map(DateParts::from),
            location: split_location(&row.location),
            is_ppv: is_ppv(&row.event),
            is_fight_night: is_fight_night(&row.event),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        let d = NaiveDate::from_ymd_opt(2024, 4, 13);
        assert_eq!(parse_event_date("April 13, 2024"), d);
        assert_eq!(parse_event_date("Apr 13, 2024"), d);
        assert_eq!(parse_event_date(" 13 Apr 2024 "), d);
        assert_eq!(parse_event_date("2024-04-13"), d);
        assert_eq!(parse_event_date("soon"), None);
    }

    #[test]
    fn locations() {
        let l = split_location("Las Vegas, Nevada, USA");
        assert_eq!(l.city, "Las Vegas");
        assert_eq!(l.state.as_deref(), Some("Nevada"));
        assert_eq!(l.country.as_deref(), Some("USA"));

        let l = split_location("Rio de Janeiro, Brazil");
        assert_eq!(l.state, None);
        assert_eq!(l.country.as_deref(), Some("Brazil"));

        assert_eq!(split_location("").city, "");
    }

    #[test]
    fn event_kinds() {
        assert!(is_ppv("UFC 300: Pereira vs. Hill"));
        assert!(!is_ppv("UFC Fight Night: Nicolau vs. Perez"));
        assert!(!is_ppv("UFC on ESPN: Sandhagen vs. Font"));
        assert!(is_fight_night("UFC FIGHT NIGHT: Allen vs. Curtis 2"));
        assert!(!is_fight_night("UFC 300"));
    }

    #[test]
    fn from_row() {
        let row = EventRow {
            event: s!("UFC 300: Pereira vs. Hill"),
            url: s!("u"),
            date: s!("April 13, 2024"),
            location: s!("Las Vegas, Nevada, USA"),
        };
        let f = EventFeatures::from_row(&row);
        let d = f.date.unwrap();
        assert_eq!((d.year, d.month, d.day, d.day_of_week), (2024, 4, 13, 5));
        assert!(f.is_ppv);
        assert!(!f.is_fight_night);
        assert_eq!(f.location.city, "Las Vegas");
    }
}
