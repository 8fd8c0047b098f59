//! The throttled build queue.
//!
//! Separates what the layout would like built from what actually gets
//! submitted this turn. Walls go in their own sequence and are capped per
//! turn; everything else (turrets, supports, upgrades) goes in a general
//! sequence that is always flushed in full.
//!
//! The wall cap counts attempted placements. A wall whose cell is already
//! taken does not use up a slot: the cap grows by one and the next wall in
//! line is tried. Walls past the cap are dropped, not carried over.

use tracing::debug;

use crate::arena::{Arena, Location, StructureKind, UnitKind};

/// A queued structure command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOrder {
    Place {
        kind: StructureKind,
        location: Location,
    },
    Upgrade {
        location: Location,
    },
}

/// What a flush did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    /// Wall placements submitted to the arena.
    pub walls_attempted: usize,
    /// Walls skipped because their cell was already occupied.
    pub walls_skipped: usize,
    /// Walls left over once the cap was reached.
    pub walls_dropped: usize,
    /// General orders submitted.
    pub general_submitted: usize,
    /// Units or upgrades the arena reported as placed.
    pub placed: u32,
}

#[derive(Debug, Clone, Default)]
pub struct BuildQueue {
    walls: Vec<Location>,
    general: Vec<BuildOrder>,
    wall_limit: usize,
    deficit: usize,
}

impl BuildQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_wall(&mut self, locations: &[Location]) {
        self.walls.extend_from_slice(locations);
    }

    pub fn enqueue_structure(&mut self, kind: StructureKind, locations: &[Location]) {
        self.general.extend(
            locations
                .iter()
                .map(|&location| BuildOrder::Place { kind, location }),
        );
    }

    pub fn enqueue_upgrade(&mut self, locations: &[Location]) {
        self.general
            .extend(locations.iter().map(|&location| BuildOrder::Upgrade { location }));
    }

    /// Places and upgrades each location, in order.
    pub fn enqueue_upgraded(&mut self, kind: StructureKind, locations: &[Location]) {
        for &location in locations {
            self.general.push(BuildOrder::Place { kind, location });
            self.general.push(BuildOrder::Upgrade { location });
        }
    }

    pub fn set_wall_limit(&mut self, limit: usize) {
        self.wall_limit = limit;
    }

    pub fn wall_limit(&self) -> usize {
        self.wall_limit
    }

    /// Records how many walls failed to land last turn.
    pub fn set_deficit(&mut self, deficit: usize) {
        self.deficit = deficit;
    }

    pub fn deficit(&self) -> usize {
        self.deficit
    }

    pub fn walls(&self) -> &[Location] {
        &self.walls
    }

    pub fn general(&self) -> &[BuildOrder] {
        &self.general
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty() && self.general.is_empty()
    }

    /// Submits the turn's orders to the arena and empties both sequences.
    pub fn flush<A: Arena + ?Sized>(&mut self, arena: &mut A) -> FlushReport {
        let mut report = FlushReport::default();
        let mut limit = self.wall_limit;

        let walls = std::mem::take(&mut self.walls);
        for (i, &location) in walls.iter().enumerate() {
            if report.walls_attempted >= limit {
                report.walls_dropped = walls.len() - i;
                break;
            }
            if arena.contains_stationary_unit(location) {
                limit += 1;
                report.walls_skipped += 1;
                continue;
            }
            report.placed += arena.attempt_spawn(UnitKind::WALL, location, 1);
            report.walls_attempted += 1;
        }

        for order in std::mem::take(&mut self.general) {
            report.placed += match order {
                BuildOrder::Place { kind, location } => {
                    arena.attempt_spawn(UnitKind::Structure(kind), location, 1)
                }
                BuildOrder::Upgrade { location } => arena.attempt_upgrade(location),
            };
            report.general_submitted += 1;
        }

        debug!(
            "flushed build queue: {} walls attempted, {} skipped, {} dropped (limit {}), {} general",
            report.walls_attempted,
            report.walls_skipped,
            report.walls_dropped,
            self.wall_limit,
            report.general_submitted
        );
        report
    }
}
