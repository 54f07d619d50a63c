//! Itinerary generation.
//!
//! Provides the greedy slot-by-slot planner and its configuration.
//!
//! # Algorithm
//!
//! [`Planner`] walks the requested date range one day at a time, filling
//! morning/afternoon/evening slots from three catalogs under a fixed
//! per-slot priority order ([`SlotPolicy`]), a global single-use cap for
//! catalog activities ([`ReusePolicy`]), weekday availability, and
//! time-window overlap. It is greedy and fast, not optimal — a day with no
//! eligible candidates simply keeps empty slots.

mod generate;
mod policy;

pub use generate::{PlanRequest, Planner};
pub use policy::{ReusePolicy, SlotPolicy};
