//! Tunable strategy parameters.
//!
//! Every threshold, anchor and burst size the orchestrator uses lives
//! here. `Default` holds the tuned values.

use crate::arena::Location;

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyConfig {
    /// Turns (inclusive, counted from 0) that use the bootstrap wall limit.
    pub bootstrap_turns: u32,
    pub bootstrap_wall_limit: usize,
    /// Deficit above which walls are rebuilt at the faster rate.
    pub deficit_threshold: usize,
    pub recovery_wall_limit: usize,
    pub base_wall_limit: usize,

    /// Spawn point whose projected path decides whether scouts can score.
    pub reach_probe: Location,

    /// Structure points needed before the third layout tier is queued.
    pub tier_three_threshold: f64,

    /// Rows counted for the narrow frontier-density check.
    pub frontier_rows: Vec<i32>,
    pub frontier_threshold: usize,
    /// Rows counted for the wide frontier-density check.
    pub wide_frontier_rows: Vec<i32>,
    pub wide_frontier_threshold: usize,
    /// Rows the gap scanner walks, front first.
    pub gap_band: Vec<i32>,

    /// The per-turn draw is uniform over `0..=draw_max`.
    pub draw_max: u32,
    /// The demolisher line fires when `turn % modulus == draw`.
    pub demolisher_line_modulus: u32,
    /// Fallback demolishers fire when `turn % modulus == draw`.
    pub fallback_demolisher_modulus: u32,

    pub demolisher_line_burst: u32,
    pub demolisher_line_surge_burst: u32,
    /// Own mobility above which the demolisher line uses the surge burst.
    pub demolisher_line_surge_threshold: f64,
    pub left_gap_anchor: Location,
    pub right_gap_anchor: Location,

    /// Opponent mobility above which interceptors are sent out.
    pub interceptor_threshold: f64,
    pub interceptor_count: u32,
    pub interceptor_anchors: Vec<Location>,

    /// Own mobility above which scouts are sent.
    pub scout_threshold: f64,
    /// Spawn burst size; large enough to mean "all we can afford".
    pub mobile_burst: u32,
    pub attack_anchors: Vec<Location>,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig {
            bootstrap_turns: 2,
            bootstrap_wall_limit: 10,
            deficit_threshold: 5,
            recovery_wall_limit: 5,
            base_wall_limit: 2,
            reach_probe: Location::new(13, 0),
            tier_three_threshold: 10.0,
            frontier_rows: vec![14, 15, 16],
            frontier_threshold: 20,
            wide_frontier_rows: vec![13, 14, 15, 16, 17],
            wide_frontier_threshold: 25,
            gap_band: vec![14, 15, 16],
            draw_max: 10,
            demolisher_line_modulus: 3,
            fallback_demolisher_modulus: 2,
            demolisher_line_burst: 2,
            demolisher_line_surge_burst: 4,
            demolisher_line_surge_threshold: 15.0,
            left_gap_anchor: Location::new(3, 10),
            right_gap_anchor: Location::new(24, 10),
            interceptor_threshold: 15.0,
            interceptor_count: 2,
            interceptor_anchors: vec![
                Location::new(13, 0),
                Location::new(14, 0),
                Location::new(4, 9),
                Location::new(23, 9),
            ],
            scout_threshold: 10.0,
            mobile_burst: 100,
            attack_anchors: vec![
                Location::new(7, 6),
                Location::new(10, 3),
                Location::new(13, 0),
                Location::new(16, 2),
                Location::new(20, 6),
            ],
        }
    }
}
