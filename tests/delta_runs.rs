// tests/delta_runs.rs
use ufc_scrape::merge::{existing_keys, filter_new, filter_new_records, upsert};
use ufc_scrape::specs::events::{pair_fight_list, parse_event_list, FightListing};
use ufc_scrape::store::{to_dataset, DataSet};
use ufc_scrape::error::Side;
use ufc_scrape::{Error, Record};

fn listings(urls: &[&str]) -> Vec<FightListing> {
    let fighters: Vec<String> = urls
        .iter()
        .flat_map(|u| [format!("{u} red"), format!("{u} blue")])
        .collect();
    pair_fight_list("UFC 300", &fighters, &urls.iter().map(|u| u.to_string()).collect::<Vec<_>>()).value
}

#[test]
fn second_run_only_sees_new_bouts() {
    let first = to_dataset(&listings(&["f1", "f2"]));
    let second = listings(&["f3", "f1", "f4", "f2"]);

    let keys = existing_keys(&first, FightListing::KEY).unwrap();
    let fresh = filter_new_records(&keys, &second);
    assert_eq!(fresh.iter().map(|f| f.url.as_str()).collect::<Vec<_>>(), vec!["f3", "f4"]);

    // table form agrees with the typed form
    let table = filter_new(&first, &to_dataset(&second), FightListing::KEY).unwrap();
    assert_eq!(table, to_dataset(&fresh));

    // and a third pass over the output is a no-op
    let again = filter_new(&first, &table, FightListing::KEY).unwrap();
    assert_eq!(again, table);
}

#[test]
fn event_listing_upsert() {
    let old = parse_event_list(
        &["UFC 299"],
        &["e299"],
        &["upcoming", "March 09, 2024"],
        &["upcoming", "Miami, Florida, USA"],
    )
    .value;
    let new = parse_event_list(
        &["UFC 300", "UFC 299: O'Malley vs. Vera 2"],
        &["e300", "e299"],
        &["upcoming", "April 13, 2024", "March 09, 2024"],
        &["upcoming", "Las Vegas, Nevada, USA", "Miami, Florida, USA"],
    )
    .value;

    let merged = upsert(&to_dataset(&old), &to_dataset(&new), "URL").unwrap();
    assert_eq!(merged.rows.len(), 2);
    assert_eq!(merged.rows[0][0], "UFC 299: O'Malley vs. Vera 2");
    assert_eq!(merged.rows[1][1], "e300");
}

#[test]
fn headerless_history_is_a_caller_error() {
    let history = DataSet { headers: None, rows: vec![vec!["f1".into()]] };
    let err = filter_new(&history, &to_dataset(&listings(&["f1"])), "URL").unwrap_err();
    match err {
        Error::SchemaKeyMissing { key, side } => {
            assert_eq!(key, "URL");
            assert_eq!(side, Side::Existing);
        }
        other => panic!("unexpected error: {other}"),
    }
}
