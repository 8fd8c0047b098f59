//! Engine state management.
//!
//! Holds the unit catalog, the strategy session and the RNG between
//! messages, and turns each runtime message into either a turn submission
//! or a state update. Deploy frames play a turn and write the two command
//! lines; action frames feed breach events to the strategy; the game-over
//! frame stops the loop.

use std::io::{self, Write};

use tracing::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::arena::{Player, SnapshotArena, UnitCatalog, UnitKind};
use crate::protocol::{parse_message, CommandList, Frame, GameConfig, Message, ProtocolError};
use crate::strategy::{Strategy, StrategyConfig, TurnReport};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("failed to write commands: {0}")]
    Io(#[from] io::Error),

    #[error("turn frame received before the game config")]
    NotConfigured,
}

/// What the input loop should do after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Holds the mutable state of the engine between messages.
pub struct Engine {
    catalog: Option<UnitCatalog>,
    strategy: Strategy,
    rng: SmallRng,
    last_report: Option<TurnReport>,
}

impl Engine {
    /// Creates an engine with no catalog yet. A `seed` of 0 seeds the RNG
    /// from entropy.
    pub fn new(config: StrategyConfig, seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Engine {
            catalog: None,
            strategy: Strategy::new(config),
            rng,
            last_report: None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// The report of the most recently played turn.
    pub fn last_report(&self) -> Option<&TurnReport> {
        self.last_report.as_ref()
    }

    /// Handles one line of input, writing any commands to `out`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow, EngineError> {
        let Some(message) = parse_message(line)? else {
            return Ok(Flow::Continue);
        };
        match message {
            Message::Config(config) => self.handle_config(&config)?,
            Message::Deploy(frame) => self.handle_deploy(&frame, out)?,
            Message::Action(frame) => self.handle_action(&frame)?,
            Message::GameOver => {
                info!("game over");
                return Ok(Flow::Stop);
            }
            Message::Unknown => debug!("ignoring unrecognised message"),
        }
        Ok(Flow::Continue)
    }

    /// Loads the unit catalog from the game config.
    pub fn handle_config(&mut self, config: &GameConfig) -> Result<(), EngineError> {
        let catalog = config.catalog()?;
        info!(
            "configured: wall {}, support {}, turret {}",
            catalog.shorthand(UnitKind::WALL),
            catalog.shorthand(UnitKind::SUPPORT),
            catalog.shorthand(UnitKind::TURRET)
        );
        self.catalog = Some(catalog);
        Ok(())
    }

    /// Plays one turn and writes its commands.
    ///
    /// The runtime waits for a submission every deploy frame, so if the
    /// frame cannot be played an empty submission is written before the
    /// error is returned.
    pub fn handle_deploy<W: Write>(&mut self, frame: &Frame, out: &mut W) -> Result<(), EngineError> {
        let Some(catalog) = self.catalog.as_ref() else {
            CommandList::default().write_to(out)?;
            return Err(EngineError::NotConfigured);
        };
        let mut arena = match SnapshotArena::from_frame(frame, catalog) {
            Ok(arena) => arena,
            Err(e) => {
                CommandList::default().write_to(out)?;
                return Err(e.into());
            }
        };

        if let (Ok(me), Ok(enemy)) = (frame.stats(Player::Me), frame.stats(Player::Enemy)) {
            debug!("health {} against {}", me.health, enemy.health);
        }
        let report = self.strategy.play_turn(&mut arena, &mut self.rng);
        let commands = arena.into_commands();
        info!(
            "turn {} submitted: {} build, {} deploy",
            report.context.turn,
            commands.build.len(),
            commands.deploy.len()
        );
        commands.write_to(out)?;
        self.last_report = Some(report);
        Ok(())
    }

    /// Records the breaches of one action frame.
    pub fn handle_action(&mut self, frame: &Frame) -> Result<(), EngineError> {
        let breaches = frame.breaches()?;
        if !breaches.is_empty() {
            debug!("action frame with {} breaches", breaches.len());
        }
        self.strategy.record_breaches(&breaches);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Region;

    const CONFIG_JSON: &str = r#"{"unitInformation": [
        {"shorthand": "FF", "cost1": 1.0},
        {"shorthand": "EF", "cost1": 4.0, "upgrade": {"cost1": 2.0}},
        {"shorthand": "DF", "cost1": 2.0, "attackRange": 2.5, "attackDamageWalker": 5,
         "upgrade": {"cost1": 4.0, "attackRange": 3.5, "attackDamageWalker": 15}},
        {"shorthand": "PI", "cost2": 1.0},
        {"shorthand": "EI", "cost2": 3.0},
        {"shorthand": "SI", "cost2": 1.0},
        {"shorthand": "RM"},
        {"shorthand": "UP"}
    ]}"#;

    fn deploy_frame(turn: u32, sp: f64, mp: f64) -> String {
        format!(
            r#"{{"turnInfo": [0, {turn}, -1, 0], "p1Stats": [30, {sp}, {mp}, 0], "p2Stats": [30, 30, 5, 0],
                "p1Units": [[], [], [], [], [], [], [], []], "p2Units": [[], [], [], [], [], [], [], []],
                "events": {{"breach": []}}}}"#
        )
    }

    fn configured() -> Engine {
        let mut engine = Engine::new(StrategyConfig::default(), 42);
        let mut out = Vec::new();
        engine.handle_line(CONFIG_JSON, &mut out).unwrap();
        assert!(out.is_empty());
        engine
    }

    fn lines(out: Vec<u8>) -> Vec<String> {
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn new_engine_is_unconfigured() {
        let engine = Engine::new(StrategyConfig::default(), 1);
        assert!(!engine.is_configured());
        assert!(engine.last_report().is_none());
    }

    #[test]
    fn config_message_loads_catalog() {
        assert!(configured().is_configured());
    }

    #[test]
    fn deploy_frame_writes_two_command_lines() {
        let mut engine = configured();
        let mut out = Vec::new();
        let flow = engine
            .handle_line(&deploy_frame(0, 40.0, 5.0), &mut out)
            .unwrap();
        assert_eq!(flow, Flow::Continue);

        let lines = lines(out);
        assert_eq!(lines.len(), 2);
        let build: Vec<(String, i32, i32)> = serde_json::from_str(&lines[0]).unwrap();
        let deploy: Vec<(String, i32, i32)> = serde_json::from_str(&lines[1]).unwrap();
        // Tier 1 turrets come first in the general queue, after the walls.
        assert!(build.contains(&("DF".to_string(), 4, 11)));
        assert!(build.contains(&("UP".to_string(), 4, 11)));
        assert_eq!(build.iter().filter(|c| c.0 == "FF").count(), 10);
        assert!(deploy.is_empty());

        let report = engine.last_report().unwrap();
        assert_eq!(report.context.turn, 0);
        assert_eq!(report.wall_limit, 10);
    }

    #[test]
    fn turn_before_config_is_an_error_but_still_submits() {
        let mut engine = Engine::new(StrategyConfig::default(), 1);
        let mut out = Vec::new();
        let result = engine.handle_line(&deploy_frame(0, 40.0, 5.0), &mut out);
        assert!(matches!(result, Err(EngineError::NotConfigured)));
        assert_eq!(lines(out), vec!["[]", "[]"]);
    }

    #[test]
    fn action_frames_feed_the_breach_tracker() {
        let mut engine = configured();
        let action = r#"{"turnInfo": [1, 3, 10, 0],
            "events": {"breach": [[[1, 12], 1, 3, "8", 2], [[20, 15], 1, 3, "9", 1]]}}"#;
        let mut out = Vec::new();
        engine.handle_line(action, &mut out).unwrap();
        assert!(out.is_empty());

        let tracker = engine.strategy().breaches();
        assert!(tracker.is_breached(Region::LeftHigh));
        assert_eq!(tracker.breached_regions().count(), 1);
    }

    #[test]
    fn breach_triggers_reinforcement_next_turn() {
        let mut engine = configured();
        let action = r#"{"turnInfo": [1, 4, 10, 0], "events": {"breach": [[[25, 11], 1, 3, "8", 2]]}}"#;
        engine.handle_line(action, &mut Vec::new()).unwrap();

        let mut out = Vec::new();
        engine
            .handle_line(&deploy_frame(5, 40.0, 0.0), &mut out)
            .unwrap();
        let build: Vec<(String, i32, i32)> = serde_json::from_str(&lines(out)[0]).unwrap();
        assert!(build.contains(&("DF".to_string(), 25, 12)));
        assert_eq!(
            engine.last_report().unwrap().reactive,
            Some(Region::RightHigh)
        );
        assert_eq!(engine.strategy().breaches().breached_regions().count(), 0);
    }

    #[test]
    fn game_over_stops() {
        let mut engine = configured();
        let flow = engine
            .handle_line(r#"{"turnInfo": [2, 30, 0, 0]}"#, &mut Vec::new())
            .unwrap();
        assert_eq!(flow, Flow::Stop);
    }

    #[test]
    fn blank_and_unknown_lines_are_ignored() {
        let mut engine = configured();
        let mut out = Vec::new();
        assert_eq!(engine.handle_line("", &mut out).unwrap(), Flow::Continue);
        assert_eq!(
            engine.handle_line(r#"{"debug": true}"#, &mut out).unwrap(),
            Flow::Continue
        );
        assert!(out.is_empty());
    }

    #[test]
    fn malformed_json_is_a_protocol_error() {
        let mut engine = configured();
        let result = engine.handle_line("{not json", &mut Vec::new());
        assert!(matches!(
            result,
            Err(EngineError::Protocol(ProtocolError::Json(_)))
        ));
    }

    #[test]
    fn same_seed_plays_the_same_turns() {
        let play = || {
            let mut engine = configured();
            let mut out = Vec::new();
            for turn in 0..6 {
                engine
                    .handle_line(&deploy_frame(turn, 30.0, 12.0), &mut out)
                    .unwrap();
            }
            out
        };
        assert_eq!(play(), play());
    }
}
