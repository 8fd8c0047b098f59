//! An [`Arena`] built from a deploy frame.
//!
//! Holds the structures both players have standing, both resource
//! balances, and the commands issued so far this turn. Placements update
//! the local board and balances immediately, so later decisions in the
//! same turn see earlier ones.

use std::collections::{BTreeMap, HashSet};

use super::location::{Edge, Location};
use super::pathing::find_path_to_edge;
use super::unit::{
    Cost, Player, ResourceKind, StationaryUnit, StructureKind, UnitCatalog, UnitKind,
};
use super::Arena;
use crate::protocol::{CommandList, Frame, ProtocolError};

/// Catalog index of the removal marker list in a frame.
const REMOVE_LIST: usize = 6;
/// Catalog index of the upgrade marker list in a frame.
const UPGRADE_LIST: usize = 7;

#[derive(Debug, Clone)]
pub struct SnapshotArena<'a> {
    catalog: &'a UnitCatalog,
    turn: u32,
    structures: BTreeMap<Location, StationaryUnit>,
    mobile_cells: HashSet<Location>,
    /// `[player][resource]` balances.
    resources: [[f64; 2]; 2],
    commands: CommandList,
}

impl<'a> SnapshotArena<'a> {
    /// An empty board with no resources.
    pub fn empty(catalog: &'a UnitCatalog, turn: u32) -> Self {
        SnapshotArena {
            catalog,
            turn,
            structures: BTreeMap::new(),
            mobile_cells: HashSet::new(),
            resources: [[0.0; 2]; 2],
            commands: CommandList::default(),
        }
    }

    /// Builds the board from a deploy frame.
    pub fn from_frame(frame: &Frame, catalog: &'a UnitCatalog) -> Result<Self, ProtocolError> {
        let mut arena = SnapshotArena::empty(catalog, frame.turn_number()?);
        for player in [Player::Me, Player::Enemy] {
            let stats = frame.stats(player)?;
            arena.set_resource(player, ResourceKind::Structure, stats.structure_points);
            arena.set_resource(player, ResourceKind::Mobility, stats.mobility_points);

            let entries = frame.units(player)?;
            // Markers refer to units listed earlier, so place everything first.
            for entry in entries.iter().filter(|e| e.list < REMOVE_LIST) {
                match UnitKind::ALL[entry.list] {
                    UnitKind::Structure(kind) => {
                        arena.structures.insert(
                            entry.location,
                            StationaryUnit {
                                kind,
                                owner: player,
                                location: entry.location,
                                upgraded: false,
                                pending_removal: false,
                            },
                        );
                    }
                    UnitKind::Mobile(_) => {
                        arena.mobile_cells.insert(entry.location);
                    }
                }
            }
            for entry in &entries {
                let Some(unit) = arena.structures.get_mut(&entry.location) else {
                    continue;
                };
                match entry.list {
                    REMOVE_LIST => unit.pending_removal = true,
                    UPGRADE_LIST => unit.upgraded = true,
                    _ => {}
                }
            }
        }
        Ok(arena)
    }

    pub fn set_resource(&mut self, player: Player, kind: ResourceKind, amount: f64) {
        self.resources[player.index()][resource_index(kind)] = amount;
    }

    /// Puts a structure on the board directly, bypassing cost and
    /// territory checks. Replaces whatever stood there.
    pub fn place_structure(&mut self, kind: StructureKind, owner: Player, location: Location) {
        self.structures.insert(
            location,
            StationaryUnit {
                kind,
                owner,
                location,
                upgraded: false,
                pending_removal: false,
            },
        );
    }

    /// Returns the structure at `location`, if any.
    pub fn structure_at(&self, location: Location) -> Option<&StationaryUnit> {
        self.structures.get(&location)
    }

    /// Commands issued so far this turn.
    pub fn commands(&self) -> &CommandList {
        &self.commands
    }

    /// Consumes the arena, yielding the turn's commands.
    pub fn into_commands(self) -> CommandList {
        self.commands
    }

    fn is_occupied(&self, location: Location) -> bool {
        self.structures.contains_key(&location) || self.mobile_cells.contains(&location)
    }

    fn can_afford(&self, cost: Cost) -> bool {
        let me = self.resources[Player::Me.index()];
        me[0] >= cost.structure && me[1] >= cost.mobility
    }

    fn pay(&mut self, cost: Cost) {
        let me = &mut self.resources[Player::Me.index()];
        me[0] -= cost.structure;
        me[1] -= cost.mobility;
    }

    fn can_spawn(&self, kind: UnitKind, location: Location) -> bool {
        if !location.in_bounds() || !location.is_friendly_territory() {
            return false;
        }
        if !self.can_afford(self.catalog.stats(kind).cost) {
            return false;
        }
        if kind.is_stationary() {
            !self.is_occupied(location)
        } else {
            !self.structures.contains_key(&location)
                && Edge::FRIENDLY.iter().any(|e| e.contains(location))
        }
    }
}

fn resource_index(kind: ResourceKind) -> usize {
    match kind {
        ResourceKind::Structure => 0,
        ResourceKind::Mobility => 1,
    }
}

impl Arena for SnapshotArena<'_> {
    fn turn_number(&self) -> u32 {
        self.turn
    }

    fn contains_stationary_unit(&self, location: Location) -> bool {
        self.structures.contains_key(&location)
    }

    fn stationary_units(&self) -> Vec<StationaryUnit> {
        self.structures.values().copied().collect()
    }

    fn resource(&self, kind: ResourceKind, player: Player) -> f64 {
        self.resources[player.index()][resource_index(kind)]
    }

    fn cost(&self, kind: UnitKind) -> Cost {
        self.catalog.stats(kind).cost
    }

    fn turret_damage(&self) -> f64 {
        self.catalog.stats(UnitKind::TURRET).damage_walker
    }

    fn path_to_edge(&self, start: Location) -> Option<Vec<Location>> {
        find_path_to_edge(start, |l| self.structures.contains_key(&l))
    }

    fn attackers(&self, location: Location, player: Player) -> Vec<StationaryUnit> {
        let turret = self.catalog.stats(UnitKind::TURRET);
        self.structures
            .values()
            .filter(|u| u.owner == player.opponent() && u.kind == StructureKind::Turret)
            .filter(|u| !u.pending_removal)
            .filter(|u| u.location.distance(location) <= turret.range(u.upgraded))
            .copied()
            .collect()
    }

    fn attempt_spawn(&mut self, kind: UnitKind, location: Location, count: u32) -> u32 {
        let catalog = self.catalog;
        let mut placed = 0;
        for _ in 0..count {
            if !self.can_spawn(kind, location) {
                break;
            }
            let stats = catalog.stats(kind);
            let cost = stats.cost;
            match kind {
                UnitKind::Structure(structure) => {
                    self.commands.push_build(&stats.shorthand, location);
                    self.place_structure(structure, Player::Me, location);
                }
                UnitKind::Mobile(_) => {
                    self.commands.push_deploy(&stats.shorthand, location);
                    self.mobile_cells.insert(location);
                }
            }
            self.pay(cost);
            placed += 1;
        }
        placed
    }

    fn attempt_upgrade(&mut self, location: Location) -> u32 {
        let Some(unit) = self.structures.get(&location) else {
            return 0;
        };
        if unit.owner != Player::Me || unit.upgraded {
            return 0;
        }
        let cost = self.catalog.stats(UnitKind::Structure(unit.kind)).upgrade_cost;
        if !self.can_afford(cost) {
            return 0;
        }
        self.pay(cost);
        if let Some(unit) = self.structures.get_mut(&location) {
            unit.upgraded = true;
        }
        let catalog = self.catalog;
        self.commands
            .push_build(&catalog.upgrade_shorthand, location);
        1
    }
}
