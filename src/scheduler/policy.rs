//! Planner configuration: slot priority orders and the reuse cap.
//!
//! Which catalog gets first claim on a slot is a business rule, not an
//! algorithmic necessity, so it is configuration rather than hardcoded
//! branching. The same goes for the cap on reusing catalog activities
//! across the itinerary, where two materially different rules have been in
//! effect at different times; both are encoded as named [`ReusePolicy`]
//! variants.

use serde::{Deserialize, Serialize};

use crate::models::{ActivityKind, Slot};

/// Catalog priority order per slot.
///
/// Each slot tries its catalogs in order and takes the first one that
/// yields an eligible candidate. The default encodes the house rule:
/// explore nearby in the daytime, join the site animations at night.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPolicy {
    /// Catalog order for the morning slot.
    pub morning: [ActivityKind; 3],
    /// Catalog order for the afternoon slot.
    pub afternoon: [ActivityKind; 3],
    /// Catalog order for the evening slot.
    pub evening: [ActivityKind; 3],
}

impl SlotPolicy {
    /// The catalog order for a slot.
    pub fn order(&self, slot: Slot) -> &[ActivityKind; 3] {
        match slot {
            Slot::Morning => &self.morning,
            Slot::Afternoon => &self.afternoon,
            Slot::Evening => &self.evening,
        }
    }
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self {
            morning: [
                ActivityKind::Local,
                ActivityKind::Campsite,
                ActivityKind::MustSee,
            ],
            afternoon: [
                ActivityKind::Local,
                ActivityKind::MustSee,
                ActivityKind::Campsite,
            ],
            evening: [
                ActivityKind::Campsite,
                ActivityKind::Local,
                ActivityKind::MustSee,
            ],
        }
    }
}

/// Cap on reusing must-see/local activities across the whole itinerary.
///
/// Campsite animations are never capped; they are inherently date-scoped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReusePolicy {
    /// A given activity id is placed at most once in the entire schedule;
    /// multiple distinct ids from the same catalog are allowed.
    #[default]
    UniqueIds,
    /// At most one must-see placement and one local placement in the
    /// entire schedule, regardless of id.
    OnePerCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slot_orders() {
        let policy = SlotPolicy::default();
        assert_eq!(policy.order(Slot::Morning)[0], ActivityKind::Local);
        assert_eq!(policy.order(Slot::Afternoon)[1], ActivityKind::MustSee);
        assert_eq!(policy.order(Slot::Evening)[0], ActivityKind::Campsite);
    }

    #[test]
    fn test_custom_policy() {
        let policy = SlotPolicy {
            morning: [
                ActivityKind::MustSee,
                ActivityKind::Local,
                ActivityKind::Campsite,
            ],
            ..Default::default()
        };
        assert_eq!(policy.order(Slot::Morning)[0], ActivityKind::MustSee);
        // Other slots keep the defaults.
        assert_eq!(policy.order(Slot::Evening)[0], ActivityKind::Campsite);
    }

    #[test]
    fn test_default_reuse_policy() {
        assert_eq!(ReusePolicy::default(), ReusePolicy::UniqueIds);
    }

    #[test]
    fn test_policy_roundtrips_through_serde() {
        let policy = SlotPolicy::default();
        let json = serde_json::to_string(&policy).unwrap();
        let back: SlotPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, policy);
    }
}
