// src/specs/mod.rs
//! # Page “specs” module
//!
//! One spec per page type. Each spec knows **how the page lays its data out** once
//! the HTML has been flattened to text: which token means what, how many of them
//! make a record, and what to do when the count does not add up.
//!
//! ## What lives here
//! - **Segmentation** of flat, order-dependent token streams into records (odds
//!   fighter links, stat table cells, bout-detail fragments).
//! - **Positional contracts**, always through a declared `config::schema::Schema`
//!   and `Schema::fit` (pad short input, drop overflow).
//! - **Typed records** implementing `store::Record`, so any of them flattens into a
//!   `store::DataSet`.
//!
//! ## What does **not** live here
//! - **Fetching or HTML parsing**: the caller hands over ordered string lists.
//! - **Persistence**: records go back to the caller; `merge` decides what is new.
//! - **Numeric features**: `features` derives those from finished records.
//!
//! ## Typical call chain
//! ```text
//! extractor → specs::<page>::{assemble_odds, parse_fight_stats, decompose, …}
//!                    ↘ Parsed { value: records, report }
//!          merge::filter_new_records → store::to_dataset (outside of specs)
//! ```
//!
//! ## Conventions & invariants
//! - Specs never fail on page data. Leftovers and gaps become `report::Skip` entries.
//! - Inputs are borrowed; outputs are freshly built.
//! - **No logging spam**; debug lines where a heuristic kicks in (draw detection,
//!   trailing-draw patch), warnings only through `Report::skip`.
//!
//! ## Current specs
//! - `odds` – fighter/result segmentation, odds labels, event listing filter.
//! - `fight_stats` – per-round totals and significant strikes, joined per fighter.
//! - `fight_results` – bout-detail fragments into one `Bout`.
//! - `events` – event listing and per-event bout listing.
//! - `fighters` – fighter profile header and detail list.
pub mod events;
pub mod fight_results;
pub mod fight_stats;
pub mod fighters;
pub mod odds;
