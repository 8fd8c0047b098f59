//! Turn orchestration.
//!
//! Runs one turn end to end against an [`Arena`]:
//!
//! 1. Pre-check: work out how many walls failed to land last turn and set
//!    this turn's wall cap; probe whether scouts can reach the opponent's
//!    back edge at all.
//! 2. Reactive defense: one upgraded turret in the highest-priority lane
//!    breached last turn.
//! 3. Fixed layout, tiers 1-3.
//! 4. Offense: demolisher line against a dense frontier, interceptors
//!    against a stockpiling opponent, scouts or demolishers from the
//!    safest forward anchor.
//! 5. Flush the build queue.
//!
//! The only cross-turn state is held in [`Strategy`]: the breach tracker
//! and the two wall counters feeding the next turn's deficit.

use tracing::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use super::breach::BreachTracker;
use super::config::StrategyConfig;
use super::gaps::{self, GapReading};
use super::layout;
use super::queue::{BuildQueue, FlushReport};
use super::region::Region;
use super::risk::select_safest;
use crate::arena::{Arena, Edge, Location, Player, ResourceKind, StructureKind, UnitKind};
use crate::protocol::BreachRecord;

/// Per-turn facts every decision reads. Resource figures are the balances
/// at the start of the turn; decisions that spend re-query the arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnContext {
    pub turn: u32,
    /// The single random draw shared by every gated decision this turn.
    pub draw: u32,
    pub can_reach_edge: bool,
    pub structure_points: f64,
    pub mobility_points: f64,
    pub enemy_mobility_points: f64,
}

/// An offensive or mobile-defense action taken this turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offense {
    DemolisherLine {
        reading: GapReading,
        anchor: Option<Location>,
        spawned: u32,
    },
    Interceptors {
        spawned: u32,
    },
    Scouts {
        location: Location,
        spawned: u32,
    },
    Demolishers {
        location: Location,
        spawned: u32,
    },
}

/// Summary of one turn, for logging and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub context: TurnContext,
    pub deficit: usize,
    pub wall_limit: usize,
    pub reactive: Option<Region>,
    pub tiers: u8,
    pub offense: Vec<Offense>,
    pub flush: FlushReport,
}

/// The strategy session: everything that survives from one turn to the
/// next.
#[derive(Debug, Clone, Default)]
pub struct Strategy {
    config: StrategyConfig,
    breaches: BreachTracker,
    queue: BuildQueue,
    /// Our wall count at the start of the previous turn.
    previous_wall_count: usize,
    /// Walls submitted during the previous turn's flush.
    previous_queued_walls: usize,
}

impl Strategy {
    pub fn new(config: StrategyConfig) -> Self {
        Strategy {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    pub fn breaches(&self) -> &BreachTracker {
        &self.breaches
    }

    /// Feeds one action frame's breach events into the tracker.
    pub fn record_breaches(&mut self, records: &[BreachRecord]) {
        self.breaches.ingest(records);
    }

    /// Plays one turn, drawing this turn's random gate from `rng`.
    pub fn play_turn<A, R>(&mut self, arena: &mut A, rng: &mut R) -> TurnReport
    where
        A: Arena + ?Sized,
        R: Rng,
    {
        let draw = rng.gen_range(0..=self.config.draw_max);
        self.play_turn_with_draw(arena, rng, draw)
    }

    /// Plays one turn with a fixed random gate.
    pub fn play_turn_with_draw<A, R>(&mut self, arena: &mut A, rng: &mut R, draw: u32) -> TurnReport
    where
        A: Arena + ?Sized,
        R: Rng,
    {
        let context = TurnContext {
            turn: arena.turn_number(),
            draw,
            can_reach_edge: self.probe_reach(&*arena),
            structure_points: arena.resource(ResourceKind::Structure, Player::Me),
            mobility_points: arena.resource(ResourceKind::Mobility, Player::Me),
            enemy_mobility_points: arena.resource(ResourceKind::Mobility, Player::Enemy),
        };
        info!(
            "turn {}: SP {:.1}, MP {:.1}, enemy MP {:.1}, draw {}, edge reachable: {}",
            context.turn,
            context.structure_points,
            context.mobility_points,
            context.enemy_mobility_points,
            context.draw,
            context.can_reach_edge
        );

        let wall_count = count_structures(&*arena, Player::Me, StructureKind::Wall);
        let deficit = (self.previous_wall_count + self.previous_queued_walls)
            .saturating_sub(wall_count);
        let wall_limit = self.wall_limit(context.turn, deficit);
        self.queue.set_deficit(deficit);
        self.queue.set_wall_limit(wall_limit);
        debug!("walls on board {wall_count}, deficit {deficit}, wall limit {wall_limit}");

        let reactive = self.queue_reactive_defense();
        let tiers = layout::enqueue_layout(
            &mut self.queue,
            context.structure_points,
            self.config.tier_three_threshold,
        );
        let offense = self.choose_offense(arena, rng, &context);

        let flush = self.queue.flush(arena);
        self.previous_wall_count = wall_count;
        self.previous_queued_walls = flush.walls_attempted;
        // The next batch of action frames belongs to the next turn.
        self.breaches.reset_turn();

        TurnReport {
            context,
            deficit,
            wall_limit,
            reactive,
            tiers,
            offense,
            flush,
        }
    }

    fn wall_limit(&self, turn: u32, deficit: usize) -> usize {
        let config = &self.config;
        if turn <= config.bootstrap_turns {
            config.bootstrap_wall_limit
        } else if deficit > config.deficit_threshold {
            config.recovery_wall_limit
        } else {
            config.base_wall_limit
        }
    }

    /// True if a unit from the probe anchor would end its walk on one of
    /// the opponent's back edges rather than self-destructing short of it.
    fn probe_reach<A: Arena + ?Sized>(&self, arena: &A) -> bool {
        arena
            .path_to_edge(self.config.reach_probe)
            .and_then(|path| path.last().copied())
            .is_some_and(|end| Edge::ENEMY.iter().any(|e| e.contains(end)))
    }

    fn queue_reactive_defense(&mut self) -> Option<Region> {
        let region = self.breaches.breached_regions().next()?;
        let spot = region.reinforcement();
        info!("reinforcing {region:?} at {spot}");
        self.queue.enqueue_upgraded(StructureKind::Turret, &[spot]);
        Some(region)
    }

    fn choose_offense<A, R>(&self, arena: &mut A, rng: &mut R, context: &TurnContext) -> Vec<Offense>
    where
        A: Arena + ?Sized,
        R: Rng,
    {
        let config = &self.config;
        let mut offense = Vec::new();

        let dense = count_enemy_in_rows(&*arena, &config.frontier_rows) > config.frontier_threshold
            || count_enemy_in_rows(&*arena, &config.wide_frontier_rows)
                > config.wide_frontier_threshold;
        if dense && context.turn % config.demolisher_line_modulus == context.draw {
            offense.push(self.demolisher_line(arena));
        }

        if context.enemy_mobility_points > config.interceptor_threshold && context.can_reach_edge {
            offense.push(self.send_interceptors(arena, rng));
        }

        if arena.resource(ResourceKind::Mobility, Player::Me) > config.scout_threshold
            && context.can_reach_edge
        {
            let location = select_safest(&*arena, &config.attack_anchors);
            let spawned = arena.attempt_spawn(UnitKind::SCOUT, location, config.mobile_burst);
            info!("sending {spawned} scouts from {location}");
            offense.push(Offense::Scouts { location, spawned });
        }

        if !context.can_reach_edge
            && context.turn % config.fallback_demolisher_modulus == context.draw
        {
            let location = select_safest(&*arena, &config.attack_anchors);
            let spawned = arena.attempt_spawn(UnitKind::DEMOLISHER, location, config.mobile_burst);
            info!("edge sealed, sending {spawned} demolishers from {location}");
            offense.push(Offense::Demolishers { location, spawned });
        }

        offense
    }

    /// Sends a demolisher burst at the open flank of a dense frontier. With
    /// openings on both flanks the right anchor is used; with none, nothing
    /// is sent.
    fn demolisher_line<A: Arena + ?Sized>(&self, arena: &mut A) -> Offense {
        let config = &self.config;
        let reading = gaps::scan(&*arena, &config.gap_band);
        let anchor = match reading {
            GapReading::Left => Some(config.left_gap_anchor),
            GapReading::Right | GapReading::Both => Some(config.right_gap_anchor),
            GapReading::Closed => None,
        };
        let burst = if arena.resource(ResourceKind::Mobility, Player::Me)
            > config.demolisher_line_surge_threshold
        {
            config.demolisher_line_surge_burst
        } else {
            config.demolisher_line_burst
        };
        let spawned = anchor
            .map(|a| arena.attempt_spawn(UnitKind::DEMOLISHER, a, burst))
            .unwrap_or(0);
        info!("dense frontier, gap reading {reading:?}: {spawned} demolishers");
        Offense::DemolisherLine {
            reading,
            anchor,
            spawned,
        }
    }

    fn send_interceptors<A, R>(&self, arena: &mut A, rng: &mut R) -> Offense
    where
        A: Arena + ?Sized,
        R: Rng,
    {
        let config = &self.config;
        let open: Vec<Location> = config
            .interceptor_anchors
            .iter()
            .copied()
            .filter(|a| !arena.contains_stationary_unit(*a))
            .collect();
        let price = arena.cost(UnitKind::INTERCEPTOR).mobility;
        let mut spawned = 0;
        for _ in 0..config.interceptor_count {
            if arena.resource(ResourceKind::Mobility, Player::Me) < price {
                break;
            }
            let Some(&anchor) = open.choose(rng) else {
                break;
            };
            spawned += arena.attempt_spawn(UnitKind::INTERCEPTOR, anchor, 1);
        }
        info!("opponent stockpiling, sent {spawned} interceptors");
        Offense::Interceptors { spawned }
    }
}

/// Counts `owner`'s structures of one kind.
pub fn count_structures<A: Arena + ?Sized>(arena: &A, owner: Player, kind: StructureKind) -> usize {
    arena
        .stationary_units()
        .iter()
        .filter(|u| u.owner == owner && u.kind == kind)
        .count()
}

/// Counts opponent structures standing in any of `rows`.
pub fn count_enemy_in_rows<A: Arena + ?Sized>(arena: &A, rows: &[i32]) -> usize {
    arena
        .stationary_units()
        .iter()
        .filter(|u| u.owner == Player::Enemy && rows.contains(&u.location.y))
        .count()
}
