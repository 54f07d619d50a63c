//! Day schedule (planner output) model.
//!
//! A generated itinerary is an ordered list of [`DaySchedule`]s, one per
//! calendar day of the requested range. Each day holds three fixed slots
//! (morning / afternoon / evening), each either empty or one tagged
//! activity. The schedule is built fresh per planning run and handed to
//! the presentation layer; it is never persisted here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CampsiteActivity, LocalActivity, MustSeeActivity};

/// One of the three fixed daily time windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    /// 06:00-11:59.
    Morning,
    /// 12:00-17:59.
    Afternoon,
    /// 18:00-05:59 (wraps past midnight).
    Evening,
}

impl Slot {
    /// All slots in per-day evaluation order.
    pub const ALL: [Slot; 3] = [Slot::Morning, Slot::Afternoon, Slot::Evening];

    /// Lowercase slot name.
    pub fn name(&self) -> &'static str {
        match self {
            Slot::Morning => "morning",
            Slot::Afternoon => "afternoon",
            Slot::Evening => "evening",
        }
    }
}

/// Which catalog a scheduled activity came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    /// Regional must-see attraction.
    #[serde(rename = "must-see")]
    MustSee,
    /// Nearby local activity.
    #[serde(rename = "local")]
    Local,
    /// Site-run animation.
    #[serde(rename = "campsite")]
    Campsite,
}

/// An activity placed into a slot, tagged with its originating catalog.
///
/// The tag lets the renderer pattern-match exhaustively instead of casting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ScheduleActivity {
    /// A must-see attraction placement.
    #[serde(rename = "must-see")]
    MustSee(MustSeeActivity),
    /// A local activity placement.
    #[serde(rename = "local")]
    Local(LocalActivity),
    /// A campsite animation placement.
    #[serde(rename = "campsite")]
    Campsite(CampsiteActivity),
}

impl ScheduleActivity {
    /// The originating catalog.
    pub fn kind(&self) -> ActivityKind {
        match self {
            ScheduleActivity::MustSee(_) => ActivityKind::MustSee,
            ScheduleActivity::Local(_) => ActivityKind::Local,
            ScheduleActivity::Campsite(_) => ActivityKind::Campsite,
        }
    }

    /// Identifier within the originating catalog.
    pub fn id(&self) -> i64 {
        match self {
            ScheduleActivity::MustSee(a) => a.id,
            ScheduleActivity::Local(a) => a.id,
            ScheduleActivity::Campsite(a) => a.id,
        }
    }

    /// Display title.
    pub fn title(&self) -> &str {
        match self {
            ScheduleActivity::MustSee(a) => &a.title,
            ScheduleActivity::Local(a) => &a.title,
            ScheduleActivity::Campsite(a) => &a.title,
        }
    }
}

/// One planned calendar day: a date plus three nullable slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    /// The calendar day this entry covers.
    pub date: NaiveDate,
    /// Morning slot (06:00-11:59).
    pub morning: Option<ScheduleActivity>,
    /// Afternoon slot (12:00-17:59).
    pub afternoon: Option<ScheduleActivity>,
    /// Evening slot (18:00-05:59).
    pub evening: Option<ScheduleActivity>,
}

impl DaySchedule {
    /// Creates an empty day (all slots free).
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            morning: None,
            afternoon: None,
            evening: None,
        }
    }

    /// Returns the content of a slot.
    pub fn slot(&self, slot: Slot) -> Option<&ScheduleActivity> {
        match slot {
            Slot::Morning => self.morning.as_ref(),
            Slot::Afternoon => self.afternoon.as_ref(),
            Slot::Evening => self.evening.as_ref(),
        }
    }

    /// Whether a slot already holds an activity.
    pub fn is_filled(&self, slot: Slot) -> bool {
        self.slot(slot).is_some()
    }

    /// Fills a slot. Existing content is never overwritten.
    pub fn assign(&mut self, slot: Slot, activity: ScheduleActivity) {
        let target = match slot {
            Slot::Morning => &mut self.morning,
            Slot::Afternoon => &mut self.afternoon,
            Slot::Evening => &mut self.evening,
        };
        if target.is_none() {
            *target = Some(activity);
        }
    }

    /// Number of filled slots (0 to 3).
    pub fn filled_count(&self) -> usize {
        Slot::ALL.iter().filter(|&&s| self.is_filled(s)).count()
    }

    /// Iterates over the filled slots in morning → evening order.
    pub fn activities(&self) -> impl Iterator<Item = (Slot, &ScheduleActivity)> + '_ {
        Slot::ALL
            .into_iter()
            .filter_map(move |s| self.slot(s).map(|a| (s, a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn must_see(id: i64) -> ScheduleActivity {
        ScheduleActivity::MustSee(MustSeeActivity::new(id, format!("Must see {id}"), "site"))
    }

    fn local(id: i64) -> ScheduleActivity {
        ScheduleActivity::Local(LocalActivity::new(id, format!("Local {id}"), "site"))
    }

    #[test]
    fn test_empty_day() {
        let day = DaySchedule::new(june(1));
        assert_eq!(day.filled_count(), 0);
        assert!(day.morning.is_none());
        assert!(day.afternoon.is_none());
        assert!(day.evening.is_none());
        assert_eq!(day.activities().count(), 0);
    }

    #[test]
    fn test_assign_and_query() {
        let mut day = DaySchedule::new(june(1));
        day.assign(Slot::Afternoon, must_see(3));

        assert!(day.is_filled(Slot::Afternoon));
        assert!(!day.is_filled(Slot::Morning));
        assert_eq!(day.filled_count(), 1);
        assert_eq!(day.slot(Slot::Afternoon).unwrap().id(), 3);
    }

    #[test]
    fn test_assign_never_overwrites() {
        let mut day = DaySchedule::new(june(1));
        day.assign(Slot::Morning, local(1));
        day.assign(Slot::Morning, local(2));

        assert_eq!(day.slot(Slot::Morning).unwrap().id(), 1);
    }

    #[test]
    fn test_activities_iterates_in_slot_order() {
        let mut day = DaySchedule::new(june(1));
        day.assign(Slot::Evening, must_see(9));
        day.assign(Slot::Morning, local(4));

        let collected: Vec<(Slot, i64)> = day.activities().map(|(s, a)| (s, a.id())).collect();
        assert_eq!(collected, vec![(Slot::Morning, 4), (Slot::Evening, 9)]);
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(must_see(1).kind(), ActivityKind::MustSee);
        assert_eq!(local(1).kind(), ActivityKind::Local);
    }

    #[test]
    fn test_serialization_tags_kind() {
        let mut day = DaySchedule::new(june(2));
        day.assign(Slot::Morning, local(5));

        let json = serde_json::to_value(&day).unwrap();
        assert_eq!(json["date"], "2025-06-02");
        assert_eq!(json["morning"]["kind"], "local");
        assert_eq!(json["afternoon"], serde_json::Value::Null);

        let back: DaySchedule = serde_json::from_value(json).unwrap();
        assert_eq!(back.slot(Slot::Morning).unwrap().id(), 5);
    }
}
