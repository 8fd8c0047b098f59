//! A hand-scripted arena for strategy tests.
//!
//! Paths and threat are set explicitly rather than derived from the board,
//! and every command is logged whether or not it would succeed.

use std::collections::{BTreeMap, HashMap};

use super::unit::{Cost, Player, ResourceKind, StationaryUnit, StructureKind, UnitKind};
use super::{Arena, Location};

/// A command as the strategy issued it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Issued {
    Spawn {
        kind: UnitKind,
        location: Location,
        count: u32,
    },
    Upgrade {
        location: Location,
    },
}

#[derive(Debug, Default)]
pub(crate) struct ScriptedArena {
    pub turn: u32,
    pub structures: BTreeMap<Location, StationaryUnit>,
    pub resources: HashMap<(Player, ResourceKind), f64>,
    pub paths: HashMap<Location, Vec<Location>>,
    /// Number of enemy attackers covering each cell.
    pub threat: HashMap<Location, usize>,
    pub issued: Vec<Issued>,
}

impl ScriptedArena {
    pub fn new(turn: u32) -> Self {
        ScriptedArena {
            turn,
            ..Default::default()
        }
    }

    pub fn with_resource(mut self, player: Player, kind: ResourceKind, amount: f64) -> Self {
        self.resources.insert((player, kind), amount);
        self
    }

    pub fn place(&mut self, kind: StructureKind, owner: Player, location: Location) {
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

    pub fn spawns(&self) -> Vec<(UnitKind, Location, u32)> {
        self.issued
            .iter()
            .filter_map(|i| match *i {
                Issued::Spawn {
                    kind,
                    location,
                    count,
                } => Some((kind, location, count)),
                Issued::Upgrade { .. } => None,
            })
            .collect()
    }

    pub fn spawns_of(&self, kind: UnitKind) -> Vec<(Location, u32)> {
        self.spawns()
            .into_iter()
            .filter(|(k, _, _)| *k == kind)
            .map(|(_, l, c)| (l, c))
            .collect()
    }

    pub fn upgrades(&self) -> Vec<Location> {
        self.issued
            .iter()
            .filter_map(|i| match *i {
                Issued::Upgrade { location } => Some(location),
                Issued::Spawn { .. } => None,
            })
            .collect()
    }
}

impl Arena for ScriptedArena {
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
        self.resources.get(&(player, kind)).copied().unwrap_or(0.0)
    }

    fn cost(&self, kind: UnitKind) -> Cost {
        if kind.is_stationary() {
            Cost::new(1.0, 0.0)
        } else {
            Cost::new(0.0, 1.0)
        }
    }

    fn turret_damage(&self) -> f64 {
        5.0
    }

    fn path_to_edge(&self, start: Location) -> Option<Vec<Location>> {
        if self.structures.contains_key(&start) {
            return None;
        }
        Some(self.paths.get(&start).cloned().unwrap_or_else(|| vec![start]))
    }

    fn attackers(&self, location: Location, _player: Player) -> Vec<StationaryUnit> {
        let count = self.threat.get(&location).copied().unwrap_or(0);
        (0..count)
            .map(|_| StationaryUnit {
                kind: StructureKind::Turret,
                owner: Player::Enemy,
                location,
                upgraded: false,
                pending_removal: false,
            })
            .collect()
    }

    fn attempt_spawn(&mut self, kind: UnitKind, location: Location, count: u32) -> u32 {
        self.issued.push(Issued::Spawn {
            kind,
            location,
            count,
        });
        count
    }

    fn attempt_upgrade(&mut self, location: Location) -> u32 {
        self.issued.push(Issued::Upgrade { location });
        1
    }
}
