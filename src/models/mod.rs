//! Itinerary domain models.
//!
//! Provides the catalog entry types the planner consumes and the day
//! schedule types it produces.
//!
//! # Catalogs
//!
//! | Catalog | Entity | Constraint |
//! |---------|--------|------------|
//! | Must-see | [`MustSeeActivity`] | opening hours, open days, single use |
//! | Local | [`LocalActivity`] | opening hours, open days, single use |
//! | Campsite | [`CampsiteActivity`] | fixed calendar date, uncapped |

mod activity;
mod schedule;

pub use activity::{
    CampsiteActivity, CatalogEntry, HoursWindow, LocalActivity, MustSeeActivity,
    DEFAULT_CLOSE_HOUR, DEFAULT_OPEN_HOUR,
};
pub use schedule::{ActivityKind, DaySchedule, ScheduleActivity, Slot};
