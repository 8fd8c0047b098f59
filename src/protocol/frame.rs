//! Deploy and action frames.
//!
//! Both kinds share one JSON shape. `turnInfo` is `[phase, turn, frame,
//! ...]`; unit lists hold one array per catalog entry, each unit written as
//! `[x, y, health, id]`; stats are `[health, SP, MP, time]`. Breach events
//! are `[[x, y], damage, unitType, unitId, player]` where player 1 is us.

use serde::Deserialize;
use serde_json::Value;

use super::ProtocolError;
use crate::arena::{Location, Player};

/// What a frame asks of the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    /// Start of a turn: plan and submit.
    Deploy,
    /// Mid-turn simulation frame: observe only.
    Action,
    /// The match is over.
    GameOver,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Events {
    #[serde(default)]
    pub breach: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub turn_info: Vec<i64>,
    #[serde(default)]
    pub p1_units: Vec<Vec<Vec<Value>>>,
    #[serde(default)]
    pub p2_units: Vec<Vec<Vec<Value>>>,
    #[serde(default)]
    pub p1_stats: Vec<f64>,
    #[serde(default)]
    pub p2_stats: Vec<f64>,
    #[serde(default)]
    pub events: Events,
}

/// One unit as listed in a frame. `list` is the catalog index of the list
/// it appeared in (6 = removal marker, 7 = upgrade marker).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEntry {
    pub list: usize,
    pub location: Location,
}

/// A player's health and resource balances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    pub health: f64,
    pub structure_points: f64,
    pub mobility_points: f64,
}

/// A mobile unit reaching a back edge.
#[derive(Debug, Clone, PartialEq)]
pub struct BreachRecord {
    pub location: Location,
    pub damage: f64,
    pub unit_type: Value,
    /// True when the breaching unit was ours, i.e. we scored.
    pub owner_is_self: bool,
}

impl Frame {
    pub fn phase(&self) -> Result<FramePhase, ProtocolError> {
        match self.turn_info.first() {
            Some(0) => Ok(FramePhase::Deploy),
            Some(1) => Ok(FramePhase::Action),
            Some(2) => Ok(FramePhase::GameOver),
            Some(other) => Err(ProtocolError::UnknownPhase(*other)),
            None => Err(ProtocolError::MissingTurnInfo),
        }
    }

    pub fn turn_number(&self) -> Result<u32, ProtocolError> {
        self.turn_info
            .get(1)
            .and_then(|t| u32::try_from(*t).ok())
            .ok_or(ProtocolError::MissingTurnInfo)
    }

    pub fn stats(&self, player: Player) -> Result<PlayerStats, ProtocolError> {
        let stats = match player {
            Player::Me => &self.p1_stats,
            Player::Enemy => &self.p2_stats,
        };
        if stats.len() < 3 {
            return Err(ProtocolError::MissingStats);
        }
        Ok(PlayerStats {
            health: stats[0],
            structure_points: stats[1],
            mobility_points: stats[2],
        })
    }

    /// Flattens a player's unit lists, keeping track of which list each
    /// entry came from.
    pub fn units(&self, player: Player) -> Result<Vec<UnitEntry>, ProtocolError> {
        let lists = match player {
            Player::Me => &self.p1_units,
            Player::Enemy => &self.p2_units,
        };
        let mut entries = Vec::new();
        for (list, units) in lists.iter().enumerate() {
            for raw in units {
                let location = location_from(raw.first(), raw.get(1))
                    .ok_or_else(|| ProtocolError::MalformedUnit(format!("{raw:?}")))?;
                entries.push(UnitEntry { list, location });
            }
        }
        Ok(entries)
    }

    /// Decodes this frame's breach events.
    pub fn breaches(&self) -> Result<Vec<BreachRecord>, ProtocolError> {
        self.events
            .breach
            .iter()
            .map(|raw| {
                let malformed = || ProtocolError::MalformedBreach(format!("{raw:?}"));
                let location = raw
                    .first()
                    .and_then(Value::as_array)
                    .and_then(|xy| location_from(xy.first(), xy.get(1)))
                    .ok_or_else(malformed)?;
                let player = raw.get(4).and_then(Value::as_i64).ok_or_else(malformed)?;
                Ok(BreachRecord {
                    location,
                    damage: raw.get(1).and_then(Value::as_f64).unwrap_or(0.0),
                    unit_type: raw.get(2).cloned().unwrap_or(Value::Null),
                    owner_is_self: player == 1,
                })
            })
            .collect()
    }
}

fn location_from(x: Option<&Value>, y: Option<&Value>) -> Option<Location> {
    let x = x?.as_f64()?;
    let y = y?.as_f64()?;
    Some(Location::new(x as i32, y as i32))
}
