//! No-fly-zone legality checks.

mod checker;

pub use checker::{ZoneChecker, ZoneRecord};
