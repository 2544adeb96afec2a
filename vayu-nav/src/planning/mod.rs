//! Route planning for sensor surveys.
//!
//! This module provides:
//! - Greedy nearest-neighbour tour construction
//! - First-improvement 2-opt refinement of a tour

mod route;

pub use route::{Route, RoutePlanner, tour_length};
