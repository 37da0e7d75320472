// tests/properties.rs
use proptest::prelude::*;

use ufc_scrape::features::fighters::parse_record;
use ufc_scrape::features::stats::{clock_seconds, parse_count, parse_pct, parse_strikes, round_number};
use ufc_scrape::merge::filter_new;
use ufc_scrape::specs::fight_stats::{inner_join_on_round, join_rounds, reconstruct_fighter};
use ufc_scrape::specs::odds::classify_fighters;
use ufc_scrape::store::DataSet;
use ufc_scrape::ParseOptions;

fn name() -> impl Strategy<Value = String> {
    // small alphabet so names repeat and exercise the result branch
    prop::sample::select(vec!["A", "B", "C", "D", "E", " ", ""]).prop_map(String::from)
}

fn stat_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[0-9]{1,12}:[0-9]{1,12}",
        "[0-9]{1,12} of [0-9]{1,12}",
        "-?[0-9]{1,40}(\\.[0-9]{1,5})?%",
        "Round [0-9]{1,15}",
        "[0-9]{1,12}-[0-9]{1,12}-[0-9]{1,12}",
    ]
}

fn table(keys: Vec<u8>) -> DataSet {
    DataSet::new(
        vec!["URL".into(), "V".into()],
        keys.into_iter().map(|k| vec![format!("u{k}"), k.to_string()]).collect(),
    )
}

proptest! {
    #[test]
    fn classifier_columns_line_up(tokens in prop::collection::vec(name(), 0..60)) {
        let opts = ParseOptions::default();
        let out = classify_fighters(&tokens, &opts);
        for b in &out.value {
            prop_assert!(!b.fighter1.is_empty() && !b.fighter2.is_empty());
            prop_assert!(
                b.result == b.fighter1 || b.result == b.fighter2 || opts.is_draw(&b.result)
            );
        }
        let names = tokens.iter().filter(|t| !t.trim().is_empty()).count();
        prop_assert!(out.value.len() * 2 <= names);
    }

    #[test]
    fn delta_filter_is_idempotent(
        existing in prop::collection::vec(0u8..20, 0..20),
        candidates in prop::collection::vec(0u8..20, 0..20),
    ) {
        let existing = table(existing);
        let once = filter_new(&existing, &table(candidates.clone()), "URL").unwrap();
        let twice = filter_new(&existing, &once, "URL").unwrap();
        prop_assert_eq!(&once, &twice);

        let fresh_keys: Vec<&String> = once.rows.iter().map(|r| &r[0]).collect();
        for r in &existing.rows {
            prop_assert!(!fresh_keys.contains(&&r[0]));
        }
    }

    #[test]
    fn round_join_is_idempotent(rounds in 0usize..6, width in 1usize..12) {
        let mut flat = Vec::new();
        for section in 0..2 {
            for r in 0..=rounds {
                flat.push("X".to_string());
                flat.extend((0..width).map(|c| format!("{section}.{r}.{c}")));
            }
        }
        let joined = join_rounds(&reconstruct_fighter(&flat));
        prop_assert_eq!(joined.len(), rounds.max(1));

        let w = joined[0].cells.len();
        prop_assert_eq!(inner_join_on_round(&joined, &joined, w), joined.clone());
    }

    #[test]
    fn stat_parsers_are_total(cell in stat_cell()) {
        if let Some(secs) = clock_seconds(&cell) {
            let (m, _) = cell.trim().split_once(':').unwrap();
            prop_assert!(secs as u64 >= m.trim().parse::<u64>().unwrap_or(0) * 60);
        }
        let st = parse_strikes(&cell);
        prop_assert!(st.accuracy.is_finite());
        if let Some(p) = parse_pct(&cell) {
            prop_assert!((0.0..=1.0).contains(&p));
        }
        let _ = parse_count(&cell);
        let _ = round_number(&cell);
        let r = parse_record(&cell);
        prop_assert!(r.total() >= r.wins);
    }
}
