//! Vacation itinerary generation for campsite guests.
//!
//! Given a site and an inclusive date range, the planner fills a
//! morning/afternoon/evening slot per day from three activity catalogs
//! (regional must-see attractions, nearby local activities, and site-run
//! animations with fixed dates) under time-window overlap, weekday
//! availability, and anti-repetition constraints.
//!
//! # Modules
//!
//! - **`models`**: catalog entries (`MustSeeActivity`, `LocalActivity`,
//!   `CampsiteActivity`) and planner output (`DaySchedule`,
//!   `ScheduleActivity`, `Slot`)
//! - **`timeslot`**: slot windows and the time-window overlap classifier
//! - **`calendar`**: weekday availability and day-range iteration
//! - **`scheduler`**: the greedy slot-by-slot planner and its policies
//! - **`validation`**: request integrity checks (duplicate ids, site
//!   scoping, date ordering)
//!
//! # Design
//!
//! The planner is a pure, synchronous computation over pre-fetched
//! in-memory catalogs — no I/O, no state shared between invocations. Data
//! fetching and rendering are the caller's concern; this crate only turns
//! `(site, date range, catalogs)` into an ordered list of day schedules.
//! Randomness is injectable (`generate_with_rng`) so tests stay
//! deterministic.

pub mod calendar;
pub mod models;
pub mod scheduler;
pub mod timeslot;
pub mod validation;
