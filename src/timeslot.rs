//! Time-slot overlap classification.
//!
//! Decides whether an activity's opening window intersects one of the three
//! fixed daily slots. This is interval intersection, not containment: an
//! activity open 08:00-18:00 spans both morning and afternoon and must be
//! eligible for both.
//!
//! # Slot windows (24h clock, hour granularity)
//!
//! | Slot | Nominal window | Effective end hour |
//! |-----------|----------------|--------------------|
//! | Morning | 06:00-11:59 | 12 |
//! | Afternoon | 12:00-17:59 | 18 |
//! | Evening | 18:00-05:59 | wraps midnight |
//!
//! The nominal `XX:59:59` slot end counts as hour `XX + 1` for overlap, so
//! windows are half-open: an activity closing exactly at a slot's start
//! hour does not reach into that slot, while one opening exactly at the
//! start hour does.

use crate::models::{CatalogEntry, HoursWindow, Slot};

/// A slot's fixed window as a half-open hour interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotWindow {
    /// First hour of the slot (inclusive).
    pub start_hour: u32,
    /// Effective end hour (exclusive).
    pub end_hour: u32,
}

impl Slot {
    /// The fixed window of this slot.
    ///
    /// Evening's window wraps past midnight (18 → 6); its overlap rule is
    /// special-cased in [`HoursWindow::overlaps_slot`].
    pub fn window(&self) -> SlotWindow {
        match self {
            Slot::Morning => SlotWindow {
                start_hour: 6,
                end_hour: 12,
            },
            Slot::Afternoon => SlotWindow {
                start_hour: 12,
                end_hour: 18,
            },
            Slot::Evening => SlotWindow {
                start_hour: 18,
                end_hour: 6,
            },
        }
    }
}

impl HoursWindow {
    /// Whether this opening window intersects the given slot.
    ///
    /// Morning/afternoon use half-open interval intersection
    /// (`open < slot_end && close > slot_start`). Evening is open at any
    /// point of 18:00-23:59, or during the early-morning continuation
    /// 00:00-05:59.
    pub fn overlaps_slot(&self, slot: Slot) -> bool {
        if let Slot::Evening = slot {
            let open_during_evening = self.open_hour <= 23 && self.close_hour > 18;
            let open_during_early_morning =
                self.open_hour <= 5 && self.close_hour > self.open_hour;
            return open_during_evening || open_during_early_morning;
        }

        let window = slot.window();
        self.open_hour < window.end_hour && self.close_hour > window.start_hour
    }
}

/// Whether a catalog entry is available during a slot.
///
/// An entry with no (or blank) opening/closing time is unconstrained and
/// fits every slot.
pub fn fits_slot<E: CatalogEntry + ?Sized>(entry: &E, slot: Slot) -> bool {
    match entry.hours() {
        Some(hours) => hours.overlaps_slot(slot),
        None => true,
    }
}
