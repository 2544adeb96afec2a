//! Flying the planned route.
//!
//! This module provides:
//! - [`VehicleState`]: position and move budget
//! - [`Navigator`]: per-move heading selection and route following
//! - Dual-branch obstacle search ([`find_detour`], [`SearchBranch`])
//! - Flight results ([`FlightReport`], [`MoveRecord`], [`VisitOutcome`])

mod navigator;
mod report;
mod search;
mod vehicle;

pub use navigator::Navigator;
pub use report::{FlightReport, MoveRecord, ReadingClass, VisitOutcome};
pub use search::{Detour, SearchBranch, find_detour, most_direct_bearing};
pub use vehicle::VehicleState;
