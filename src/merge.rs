// src/merge.rs
//! Delta filtering and key-based merging.
//!
//! Incremental runs compare freshly parsed records against what the persistence
//! layer already holds. The key column (`URL` for bouts and events, `link` for
//! odds) is the only identity there is.
use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result, Side};
use crate::store::{DataSet, Record};

fn key_index(ds: &DataSet, key: &str, side: Side) -> Result<usize> {
    ds.column(key).ok_or_else(|| {
        let err = Error::SchemaKeyMissing { key: s!(key), side };
        loge!("Merge: {}", err);
        err
    })
}

/// Every key value in `ds`.
pub fn existing_keys(ds: &DataSet, key: &str) -> Result<HashSet<String>> {
    let idx = key_index(ds, key, Side::Existing)?;
    Ok(ds.rows.iter().filter_map(|r| r.get(idx).cloned()).collect())
}

/// Candidate rows whose key is not in `existing`, in candidate order.
/// Headers come from `candidates`.
///
/// Both sides need the key column even when empty. On a first run build the
/// history as `DataSet::with_schema(&SCHEMA)`: a headerless
/// `DataSet::default()` is rejected with [`Error::SchemaKeyMissing`].
pub fn filter_new(existing: &DataSet, candidates: &DataSet, key: &str) -> Result<DataSet> {
    let seen = existing_keys(existing, key)?;
    let idx = key_index(candidates, key, Side::Candidates)?;

    let rows: Vec<Vec<String>> = candidates
        .rows
        .iter()
        .filter(|r| r.get(idx).is_none_or(|k| !seen.contains(k)))
        .cloned()
        .collect();

    logf!(
        "Merge: {} of {} candidate rows are new (key {})",
        rows.len(),
        candidates.rows.len(),
        key
    );
    Ok(DataSet { headers: candidates.headers.clone(), rows })
}

/// Typed form of [`filter_new`].
pub fn filter_new_records<T: Record + Clone>(existing: &HashSet<String>, candidates: &[T]) -> Vec<T> {
    let out: Vec<T> = candidates
        .iter()
        .filter(|c| !existing.contains(c.key()))
        .cloned()
        .collect();
    logd!("Merge: {} of {} {} records are new", out.len(), candidates.len(), T::SCHEMA.name);
    out
}

/// Merge `new` into `into` by key: a fresh row replaces the stored one in place,
/// unseen keys are appended in arrival order. Rows without a key cell are kept
/// as they are. Fresh headers win.
pub fn upsert(into: &DataSet, new: &DataSet, key: &str) -> Result<DataSet> {
    let old_idx = key_index(into, key, Side::Existing)?;
    let new_idx = key_index(new, key, Side::Candidates)?;

    // last write wins within `new`
    let mut fresh: HashMap<&str, &Vec<String>> = HashMap::with_capacity(new.rows.len());
    let mut arrival: Vec<&str> = Vec::new();
    for r in &new.rows {
        let Some(k) = r.get(new_idx) else { continue };
        if fresh.insert(k.as_str(), r).is_none() {
            arrival.push(k.as_str());
        }
    }

    let mut placed: HashSet<&str> = HashSet::with_capacity(fresh.len());
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(into.rows.len() + new.rows.len());
    for r in &into.rows {
        let replacement = r.get(old_idx).and_then(|k| fresh.get_key_value(k.as_str()));
        match replacement {
            Some((k, fr)) if !placed.contains(k) => {
                placed.insert(*k);
                rows.push((*fr).clone());
            }
            // duplicate of a key already replaced
            Some(_) => {}
            None => rows.push(r.clone()),
        }
    }
    let replaced = placed.len();
    for k in arrival {
        if placed.insert(k) {
            if let Some(fr) = fresh.get(k) {
                rows.push((*fr).clone());
            }
        }
    }

    logf!(
        "Merge: upsert on {}: {} replaced, {} added",
        key,
        replaced,
        placed.len() - replaced
    );
    let headers = new.headers.clone().or_else(|| into.headers.clone());
    Ok(DataSet { headers, rows })
}
