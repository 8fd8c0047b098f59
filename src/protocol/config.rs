//! The game config message.
//!
//! Sent once before the first frame. Only the unit catalog is read; the
//! rest of the message (map, resource rates, timing) is ignored.

use serde::Deserialize;

use super::ProtocolError;
use crate::arena::unit::{Cost, UnitCatalog, UnitStats};

/// Number of `unitInformation` entries: six placeable kinds, then the
/// remove and upgrade pseudo-units.
const CATALOG_ENTRIES: usize = 8;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub unit_information: Vec<UnitInformation>,
}

/// One `unitInformation` entry. Missing numeric fields default to zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInformation {
    pub shorthand: String,
    #[serde(default)]
    pub cost1: f64,
    #[serde(default)]
    pub cost2: f64,
    #[serde(default)]
    pub attack_range: f64,
    #[serde(default)]
    pub attack_damage_walker: f64,
    #[serde(default)]
    pub upgrade: Option<UpgradeInformation>,
}

/// Overrides applied when a structure is upgraded. Absent fields keep the
/// base value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeInformation {
    #[serde(default)]
    pub cost1: Option<f64>,
    #[serde(default)]
    pub cost2: Option<f64>,
    #[serde(default)]
    pub attack_range: Option<f64>,
    #[serde(default)]
    pub attack_damage_walker: Option<f64>,
}

impl UnitInformation {
    fn to_stats(&self) -> UnitStats {
        let upgrade = self.upgrade.clone().unwrap_or_default();
        UnitStats {
            shorthand: self.shorthand.clone(),
            cost: Cost::new(self.cost1, self.cost2),
            upgrade_cost: Cost::new(
                upgrade.cost1.unwrap_or(self.cost1),
                upgrade.cost2.unwrap_or(self.cost2),
            ),
            attack_range: self.attack_range,
            upgraded_attack_range: upgrade.attack_range.unwrap_or(self.attack_range),
            damage_walker: self.attack_damage_walker,
            upgraded_damage_walker: upgrade
                .attack_damage_walker
                .unwrap_or(self.attack_damage_walker),
        }
    }
}

impl GameConfig {
    /// Builds the unit catalog from the config's unit list.
    pub fn catalog(&self) -> Result<UnitCatalog, ProtocolError> {
        let info = &self.unit_information;
        if info.len() < CATALOG_ENTRIES {
            return Err(ProtocolError::IncompleteCatalog(info.len()));
        }
        Ok(UnitCatalog {
            units: [
                info[0].to_stats(),
                info[1].to_stats(),
                info[2].to_stats(),
                info[3].to_stats(),
                info[4].to_stats(),
                info[5].to_stats(),
            ],
            remove_shorthand: info[6].shorthand.clone(),
            upgrade_shorthand: info[7].shorthand.clone(),
        })
    }
}
