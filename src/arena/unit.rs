//! Unit kinds, ownership, and the unit catalog.
//!
//! The runtime identifies units by a two-letter shorthand announced in the
//! game config. The catalog maps our typed kinds to those shorthands and
//! carries the cost and combat numbers the strategy needs.

/// A buildable, non-moving unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    Wall,
    Support,
    Turret,
}

/// A spawnable unit that walks toward the opposing edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobileKind {
    Scout,
    Demolisher,
    Interceptor,
}

/// Any unit that can be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Structure(StructureKind),
    Mobile(MobileKind),
}

impl UnitKind {
    pub const WALL: UnitKind = UnitKind::Structure(StructureKind::Wall);
    pub const SUPPORT: UnitKind = UnitKind::Structure(StructureKind::Support);
    pub const TURRET: UnitKind = UnitKind::Structure(StructureKind::Turret);
    pub const SCOUT: UnitKind = UnitKind::Mobile(MobileKind::Scout);
    pub const DEMOLISHER: UnitKind = UnitKind::Mobile(MobileKind::Demolisher);
    pub const INTERCEPTOR: UnitKind = UnitKind::Mobile(MobileKind::Interceptor);

    /// All six placeable kinds in runtime catalog order.
    pub const ALL: [UnitKind; 6] = [
        UnitKind::WALL,
        UnitKind::SUPPORT,
        UnitKind::TURRET,
        UnitKind::SCOUT,
        UnitKind::DEMOLISHER,
        UnitKind::INTERCEPTOR,
    ];

    /// Position of this kind in the runtime's `unitInformation` list.
    pub const fn catalog_index(self) -> usize {
        match self {
            UnitKind::Structure(StructureKind::Wall) => 0,
            UnitKind::Structure(StructureKind::Support) => 1,
            UnitKind::Structure(StructureKind::Turret) => 2,
            UnitKind::Mobile(MobileKind::Scout) => 3,
            UnitKind::Mobile(MobileKind::Demolisher) => 4,
            UnitKind::Mobile(MobileKind::Interceptor) => 5,
        }
    }

    pub const fn is_stationary(self) -> bool {
        matches!(self, UnitKind::Structure(_))
    }
}

impl From<StructureKind> for UnitKind {
    fn from(kind: StructureKind) -> Self {
        UnitKind::Structure(kind)
    }
}

impl From<MobileKind> for UnitKind {
    fn from(kind: MobileKind) -> Self {
        UnitKind::Mobile(kind)
    }
}

/// Which side of the board a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Me,
    Enemy,
}

impl Player {
    pub const fn index(self) -> usize {
        match self {
            Player::Me => 0,
            Player::Enemy => 1,
        }
    }

    pub const fn opponent(self) -> Player {
        match self {
            Player::Me => Player::Enemy,
            Player::Enemy => Player::Me,
        }
    }
}

/// The two spendable currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Structure points (SP), spent on walls, supports and turrets.
    Structure,
    /// Mobility points (MP), spent on scouts, demolishers and interceptors.
    Mobility,
}

/// A price in both currencies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cost {
    pub structure: f64,
    pub mobility: f64,
}

impl Cost {
    pub const fn new(structure: f64, mobility: f64) -> Self {
        Self {
            structure,
            mobility,
        }
    }
}

/// Cost and combat numbers for one unit kind.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitStats {
    pub shorthand: String,
    pub cost: Cost,
    pub upgrade_cost: Cost,
    pub attack_range: f64,
    pub upgraded_attack_range: f64,
    /// Damage per hit against mobile units.
    pub damage_walker: f64,
    pub upgraded_damage_walker: f64,
}

impl UnitStats {
    fn fixed(shorthand: &str, cost: Cost, upgrade_cost: Cost) -> Self {
        UnitStats {
            shorthand: shorthand.to_string(),
            cost,
            upgrade_cost,
            attack_range: 0.0,
            upgraded_attack_range: 0.0,
            damage_walker: 0.0,
            upgraded_damage_walker: 0.0,
        }
    }

    /// Attack range, taking an upgrade into account.
    pub fn range(&self, upgraded: bool) -> f64 {
        if upgraded {
            self.upgraded_attack_range
        } else {
            self.attack_range
        }
    }
}

/// Every placeable kind plus the two pseudo-unit shorthands used for
/// removal and upgrade commands.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCatalog {
    pub units: [UnitStats; 6],
    pub remove_shorthand: String,
    pub upgrade_shorthand: String,
}

impl UnitCatalog {
    pub fn stats(&self, kind: UnitKind) -> &UnitStats {
        &self.units[kind.catalog_index()]
    }

    pub fn shorthand(&self, kind: UnitKind) -> &str {
        &self.stats(kind).shorthand
    }
}

impl Default for UnitCatalog {
    /// The standard ruleset, used when the game config omits a field and
    /// in offline tests.
    fn default() -> Self {
        let mut turret = UnitStats::fixed("DF", Cost::new(2.0, 0.0), Cost::new(4.0, 0.0));
        turret.attack_range = 2.5;
        turret.upgraded_attack_range = 3.5;
        turret.damage_walker = 5.0;
        turret.upgraded_damage_walker = 15.0;

        let mut scout = UnitStats::fixed("PI", Cost::new(0.0, 1.0), Cost::new(0.0, 1.0));
        scout.attack_range = 3.5;
        scout.upgraded_attack_range = 3.5;
        scout.damage_walker = 2.0;
        scout.upgraded_damage_walker = 2.0;

        let mut demolisher = UnitStats::fixed("EI", Cost::new(0.0, 3.0), Cost::new(0.0, 3.0));
        demolisher.attack_range = 4.5;
        demolisher.upgraded_attack_range = 4.5;
        demolisher.damage_walker = 8.0;
        demolisher.upgraded_damage_walker = 8.0;

        let mut interceptor = UnitStats::fixed("SI", Cost::new(0.0, 1.0), Cost::new(0.0, 1.0));
        interceptor.attack_range = 4.5;
        interceptor.upgraded_attack_range = 4.5;
        interceptor.damage_walker = 20.0;
        interceptor.upgraded_damage_walker = 20.0;

        UnitCatalog {
            units: [
                UnitStats::fixed("FF", Cost::new(1.0, 0.0), Cost::new(1.0, 0.0)),
                UnitStats::fixed("EF", Cost::new(4.0, 0.0), Cost::new(2.0, 0.0)),
                turret,
                scout,
                demolisher,
                interceptor,
            ],
            remove_shorthand: "RM".to_string(),
            upgrade_shorthand: "UP".to_string(),
        }
    }
}

/// A structure standing on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationaryUnit {
    pub kind: StructureKind,
    pub owner: Player,
    pub location: super::Location,
    pub upgraded: bool,
    /// Marked for removal this turn; it no longer attacks.
    pub pending_removal: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_indices_follow_runtime_order() {
        for (i, kind) in UnitKind::ALL.iter().enumerate() {
            assert_eq!(kind.catalog_index(), i);
        }
    }

    #[test]
    fn default_catalog_shorthands() {
        let catalog = UnitCatalog::default();
        assert_eq!(catalog.shorthand(UnitKind::WALL), "FF");
        assert_eq!(catalog.shorthand(UnitKind::INTERCEPTOR), "SI");
    }

    #[test]
    fn upgraded_turret_reaches_further() {
        let catalog = UnitCatalog::default();
        let turret = catalog.stats(UnitKind::TURRET);
        assert!(turret.range(true) > turret.range(false));
    }

    #[test]
    fn opponent_is_symmetric() {
        assert_eq!(Player::Me.opponent(), Player::Enemy);
        assert_eq!(Player::Enemy.opponent().opponent(), Player::Enemy);
    }
}
