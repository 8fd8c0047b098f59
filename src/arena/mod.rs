//! The arena: board geometry, unit types, and the query/command surface
//! the strategy runs against.
//!
//! The strategy only talks to the board through the [`Arena`] trait.
//! [`SnapshotArena`] is the implementation built from the runtime's
//! per-turn state message; tests drive the strategy through lighter
//! scripted arenas.

pub mod location;
pub mod pathing;
pub mod snapshot;
pub mod unit;

#[cfg(test)]
pub(crate) mod scripted;

pub use location::{all_locations, Edge, Location, ARENA_SIZE, HALF_ARENA};
pub use pathing::find_path_to_edge;
pub use snapshot::SnapshotArena;
pub use unit::{
    Cost, MobileKind, Player, ResourceKind, StationaryUnit, StructureKind, UnitCatalog, UnitKind,
    UnitStats,
};

/// Read and command access to the board for one turn.
///
/// Commands never fail loudly: a placement that is blocked, unaffordable,
/// or out of bounds simply places nothing, and the return value says how
/// many units actually went down.
pub trait Arena {
    /// The turn currently being played, starting at 0.
    fn turn_number(&self) -> u32;

    /// Returns true if the cell lies inside the diamond.
    fn in_bounds(&self, location: Location) -> bool {
        location.in_bounds()
    }

    /// Returns true if a wall, support or turret of either player stands on
    /// the cell.
    fn contains_stationary_unit(&self, location: Location) -> bool;

    /// Every structure on the board, in a stable order.
    fn stationary_units(&self) -> Vec<StationaryUnit>;

    /// Current balance of a resource for a player.
    fn resource(&self, kind: ResourceKind, player: Player) -> f64;

    /// Price of placing one unit of `kind`.
    fn cost(&self, kind: UnitKind) -> Cost;

    /// Damage one base turret deals to a mobile unit per hit.
    fn turret_damage(&self) -> f64;

    /// Projected path of a mobile unit spawned at `start`, including the
    /// start cell. `None` if the start cell is blocked or out of bounds.
    fn path_to_edge(&self, start: Location) -> Option<Vec<Location>>;

    /// Structures able to hit a unit of `player` standing on `location`.
    fn attackers(&self, location: Location, player: Player) -> Vec<StationaryUnit>;

    /// Tries to place `count` units of `kind` at `location` for us.
    /// Returns how many were placed.
    fn attempt_spawn(&mut self, kind: UnitKind, location: Location, count: u32) -> u32;

    /// Tries to upgrade our structure at `location`. Returns 1 on success.
    fn attempt_upgrade(&mut self, location: Location) -> u32;
}
