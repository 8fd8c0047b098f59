//! Breach tracking.
//!
//! Records which lanes the opponent scored through during the most recent
//! batch of action frames. The vector is cleared once per turn, before the
//! next batch arrives, so it never accumulates older breaches. A raw
//! location log is kept alongside for diagnostics.

use tracing::{debug, info};

use super::region::{classify, Region, REGION_COUNT};
use crate::arena::Location;
use crate::protocol::BreachRecord;

#[derive(Debug, Clone, Default)]
pub struct BreachTracker {
    state: [bool; REGION_COUNT],
    history: Vec<Location>,
}

impl BreachTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the per-turn breach vector. The history is kept.
    pub fn reset_turn(&mut self) {
        self.state = [false; REGION_COUNT];
    }

    /// Records one breach. Breaches scored by our own units are ignored.
    pub fn record_breach(&mut self, location: Location, attacker_is_self: bool) {
        if attacker_is_self {
            return;
        }
        let region = classify(location.x);
        info!("scored on at {location} ({region:?})");
        self.history.push(location);
        self.state[region.index()] = true;
        debug!("breach history: {} locations", self.history.len());
    }

    /// Records every breach in an action frame's event list.
    pub fn ingest(&mut self, records: &[BreachRecord]) {
        for record in records {
            self.record_breach(record.location, record.owner_is_self);
        }
    }

    pub fn is_breached(&self, region: Region) -> bool {
        self.state[region.index()]
    }

    /// Breached regions, highest priority first.
    pub fn breached_regions(&self) -> impl Iterator<Item = Region> + '_ {
        Region::PRIORITY
            .into_iter()
            .filter(|r| self.is_breached(*r))
    }

    /// The raw state vector, indexed by [`Region::index`].
    pub fn state(&self) -> [bool; REGION_COUNT] {
        self.state
    }

    /// Every opponent breach location seen this game.
    pub fn history(&self) -> &[Location] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn reset_clears_all_slots_but_keeps_history() {
        let mut tracker = BreachTracker::new();
        tracker.record_breach(Location::new(1, 12), false);
        tracker.record_breach(Location::new(26, 12), false);
        tracker.reset_turn();
        assert_eq!(tracker.state(), [false; REGION_COUNT]);
        assert_eq!(tracker.history().len(), 2);
    }

    #[test]
    fn own_breaches_are_ignored() {
        let mut tracker = BreachTracker::new();
        tracker.record_breach(Location::new(14, 27), true);
        assert_eq!(tracker.state(), [false; REGION_COUNT]);
        assert!(tracker.history().is_empty());
    }

    #[test]
    fn opponent_breach_sets_exactly_its_lane() {
        let mut tracker = BreachTracker::new();
        let location = Location::new(7, 6);
        tracker.record_breach(location, false);
        tracker.record_breach(location, false);

        let mut expected = [false; REGION_COUNT];
        expected[Region::LeftMid.index()] = true;
        assert_eq!(tracker.state(), expected);
        assert_eq!(tracker.breached_regions().collect::<Vec<_>>(), vec![Region::LeftMid]);
    }

    #[test]
    fn breached_regions_follow_priority() {
        let mut tracker = BreachTracker::new();
        tracker.record_breach(Location::new(25, 11), false);
        tracker.record_breach(Location::new(15, 1), false);
        tracker.record_breach(Location::new(0, 13), false);
        let regions: Vec<_> = tracker.breached_regions().collect();
        assert_eq!(
            regions,
            vec![Region::LeftHigh, Region::RightLow, Region::RightHigh]
        );
    }

    #[test]
    fn ingest_filters_by_owner() {
        let records = vec![
            BreachRecord {
                location: Location::new(12, 1),
                damage: 1.0,
                unit_type: Value::from(3),
                owner_is_self: false,
            },
            BreachRecord {
                location: Location::new(20, 20),
                damage: 1.0,
                unit_type: Value::from(3),
                owner_is_self: true,
            },
        ];
        let mut tracker = BreachTracker::new();
        tracker.ingest(&records);
        assert!(tracker.is_breached(Region::LeftLow));
        assert!(!tracker.is_breached(Region::RightMid));
        assert_eq!(tracker.history(), &[Location::new(12, 1)]);
    }
}
