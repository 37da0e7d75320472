// src/lib.rs
//! Record reconstruction for scraped MMA pages.
//!
//! Every function here takes already-extracted text (ordered string lists plus a
//! few metadata strings) and returns freshly built records. No network, no files.
//!
//! ```text
//! odds page tokens   → specs::odds          ─┐
//! bout page fragments → specs::fight_results  ├→ features::* → merge → store::DataSet
//! stat table cells    → specs::fight_stats   ─┘
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod merge;
pub mod report;
pub mod specs;
pub mod store;

pub use config::options::ParseOptions;
pub use error::{Error, Result};
pub use report::{Parsed, Report, Skip, SkipReason};
pub use store::{DataSet, Record};
