//! Greedy slot-by-slot itinerary generation.
//!
//! # Algorithm
//!
//! For each calendar day of the requested range, in order:
//! 1. Re-derive the campsite animations of that exact day (the caller's
//!    range query may over-fetch a trailing day).
//! 2. Build the available must-see/local pools: not yet capped by the
//!    [`ReusePolicy`] and open on that weekday.
//! 3. Fill morning → afternoon → evening. Each slot tries its
//!    [`SlotPolicy`] catalog order and takes the first catalog with an
//!    eligible candidate; a filled slot is never overwritten and a slot
//!    with no candidate stays empty.
//!
//! Candidate selection prefers never-used entries (then least-recently-used
//! by placement day), with a random pick among the least-recently-used
//! third so repeated runs do not produce the same itinerary verbatim. All
//! bookkeeping (used-id sets, last-used-day maps) is local to one call, so
//! concurrent invocations never share state.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use rand::prelude::IndexedRandom;
use rand::Rng;

use super::{ReusePolicy, SlotPolicy};
use crate::calendar::{day_name, day_range, is_open_on_day};
use crate::models::{
    ActivityKind, CampsiteActivity, CatalogEntry, DaySchedule, LocalActivity, MustSeeActivity,
    ScheduleActivity, Slot,
};
use crate::timeslot::fits_slot;

/// Input container for one planning run.
///
/// Catalogs are expected to be pre-fetched and pre-filtered to the site
/// (campsite entries additionally to the date range); the planner still
/// re-checks exact day membership for campsite entries itself.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Site the guest is staying at.
    pub site: String,
    /// First day of the stay (inclusive).
    pub from: NaiveDate,
    /// Last day of the stay (inclusive).
    pub to: NaiveDate,
    /// Must-see catalog, scoped to the site.
    pub must_see: Vec<MustSeeActivity>,
    /// Local catalog, scoped to the site.
    pub local: Vec<LocalActivity>,
    /// Campsite catalog, scoped to the site and date range.
    pub campsite: Vec<CampsiteActivity>,
}

impl PlanRequest {
    /// Creates a request with empty catalogs.
    pub fn new(site: impl Into<String>, from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            site: site.into(),
            from,
            to,
            must_see: Vec::new(),
            local: Vec::new(),
            campsite: Vec::new(),
        }
    }

    /// Sets the must-see catalog.
    pub fn with_must_see(mut self, must_see: Vec<MustSeeActivity>) -> Self {
        self.must_see = must_see;
        self
    }

    /// Sets the local catalog.
    pub fn with_local(mut self, local: Vec<LocalActivity>) -> Self {
        self.local = local;
        self
    }

    /// Sets the campsite catalog.
    pub fn with_campsite(mut self, campsite: Vec<CampsiteActivity>) -> Self {
        self.campsite = campsite;
        self
    }
}

/// Greedy, priority-ordered itinerary planner.
///
/// Pure and synchronous: no I/O, no shared state across calls.
///
/// # Example
///
/// ```
/// use camp_schedule::scheduler::{Planner, PlanRequest};
/// use camp_schedule::models::MustSeeActivity;
/// use chrono::NaiveDate;
///
/// let from = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
/// let request = PlanRequest::new("bela-basque", from, to).with_must_see(vec![
///     MustSeeActivity::new(1, "Rocher de la Vierge", "bela-basque")
///         .with_hours("09:00:00", "17:00:00"),
/// ]);
///
/// let schedule = Planner::new().generate(&request);
/// assert_eq!(schedule.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    policy: SlotPolicy,
    reuse: ReusePolicy,
}

impl Planner {
    /// Creates a planner with the default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-slot catalog priority order.
    pub fn with_policy(mut self, policy: SlotPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the reuse cap.
    pub fn with_reuse_policy(mut self, reuse: ReusePolicy) -> Self {
        self.reuse = reuse;
        self
    }

    /// Generates the itinerary using a thread-local RNG.
    pub fn generate(&self, request: &PlanRequest) -> Vec<DaySchedule> {
        self.generate_with_rng(request, &mut rand::rng())
    }

    /// Generates the itinerary with an injected random source.
    ///
    /// Seed the RNG for reproducible schedules in tests.
    pub fn generate_with_rng<R: Rng>(
        &self,
        request: &PlanRequest,
        rng: &mut R,
    ) -> Vec<DaySchedule> {
        let days = day_range(request.from, request.to);
        let mut schedule = Vec::with_capacity(days.len());

        let mut must_see_use = CatalogUse::default();
        let mut local_use = CatalogUse::default();

        for (day_index, &day) in days.iter().enumerate() {
            let mut day_schedule = DaySchedule::new(day);
            let weekday = day_name(day);

            // Day-granularity comparison sidesteps timezone drift in the
            // caller's range query.
            let day_campsite: Vec<&CampsiteActivity> = request
                .campsite
                .iter()
                .filter(|a| a.activity_date.date() == day)
                .collect();

            let available_must_see: Vec<&MustSeeActivity> = request
                .must_see
                .iter()
                .filter(|a| must_see_use.is_available(a.id, self.reuse))
                .filter(|a| is_open_on_day(*a, weekday))
                .collect();

            let available_local: Vec<&LocalActivity> = request
                .local
                .iter()
                .filter(|a| local_use.is_available(a.id, self.reuse))
                .filter(|a| is_open_on_day(*a, weekday))
                .collect();

            for slot in Slot::ALL {
                for &kind in self.policy.order(slot) {
                    if day_schedule.is_filled(slot) {
                        break;
                    }
                    match kind {
                        ActivityKind::Local => {
                            if let Some(act) =
                                pick_entry(&available_local, slot, &local_use, self.reuse, rng)
                            {
                                local_use.record(act.id, day_index);
                                day_schedule.assign(slot, ScheduleActivity::Local(act.clone()));
                            }
                        }
                        ActivityKind::MustSee => {
                            if let Some(act) = pick_entry(
                                &available_must_see,
                                slot,
                                &must_see_use,
                                self.reuse,
                                rng,
                            ) {
                                must_see_use.record(act.id, day_index);
                                day_schedule.assign(slot, ScheduleActivity::MustSee(act.clone()));
                            }
                        }
                        ActivityKind::Campsite => {
                            if let Some(act) = pick_campsite(&day_campsite, slot, rng) {
                                day_schedule.assign(slot, ScheduleActivity::Campsite(act.clone()));
                            }
                        }
                    }
                }
            }

            schedule.push(day_schedule);
        }

        schedule
    }
}

/// Per-catalog placement bookkeeping, scoped to one planning run.
#[derive(Debug, Default)]
struct CatalogUse {
    used_ids: HashSet<i64>,
    last_used_day: HashMap<i64, usize>,
    placements: usize,
}

impl CatalogUse {
    fn is_available(&self, id: i64, reuse: ReusePolicy) -> bool {
        match reuse {
            ReusePolicy::UniqueIds => !self.used_ids.contains(&id),
            ReusePolicy::OnePerCatalog => self.placements == 0,
        }
    }

    fn record(&mut self, id: i64, day_index: usize) {
        self.used_ids.insert(id);
        self.last_used_day.insert(id, day_index);
        self.placements += 1;
    }
}

/// Picks a must-see/local candidate for a slot.
///
/// The day pool was built before any slot of the day was filled, so the cap
/// is re-checked here to keep an entry placed earlier the same day from
/// being placed twice. Candidates are ranked never-used first, then by the
/// day they were last placed; the pick is random within the
/// least-recently-used third.
fn pick_entry<'a, E: CatalogEntry, R: Rng>(
    pool: &[&'a E],
    slot: Slot,
    usage: &CatalogUse,
    reuse: ReusePolicy,
    rng: &mut R,
) -> Option<&'a E> {
    let mut candidates: Vec<&E> = pool
        .iter()
        .copied()
        .filter(|a| usage.is_available(a.id(), reuse))
        .filter(|a| fits_slot(*a, slot))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    // None (never used) sorts before Some, so fresh entries rank first.
    candidates.sort_by_key(|a| usage.last_used_day.get(&a.id()).copied());

    let take = candidates.len().div_ceil(3);
    Some(candidates[rng.random_range(0..take)])
}

/// Picks a campsite animation whose start hour falls in the slot,
/// uniformly at random.
fn pick_campsite<'a, R: Rng>(
    pool: &[&'a CampsiteActivity],
    slot: Slot,
    rng: &mut R,
) -> Option<&'a CampsiteActivity> {
    let candidates: Vec<&CampsiteActivity> = pool
        .iter()
        .copied()
        .filter(|a| slot_for_hour(a.start_hour()) == slot)
        .collect();

    candidates.choose(rng).copied()
}

/// Maps a start hour to the slot it belongs to.
fn slot_for_hour(hour: u32) -> Slot {
    match hour {
        6..=11 => Slot::Morning,
        12..=17 => Slot::Afternoon,
        _ => Slot::Evening,
    }
}
