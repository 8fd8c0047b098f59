//! Spawn-point risk estimation.
//!
//! Estimates how much turret fire a mobile unit would walk through from a
//! given spawn point: for every cell on its projected path, the number of
//! enemy structures covering that cell times a base turret hit.

use crate::arena::{Arena, Location, Player};

/// Expected damage along the path from `start`, or `None` if nothing can
/// spawn there.
pub fn path_risk<A: Arena + ?Sized>(arena: &A, start: Location) -> Option<f64> {
    let path = arena.path_to_edge(start)?;
    let per_hit = arena.turret_damage();
    let risk = path
        .iter()
        .map(|cell| arena.attackers(*cell, Player::Me).len() as f64 * per_hit)
        .sum();
    Some(risk)
}

/// Picks the candidate with the lowest path risk; the first one wins ties.
/// Candidates that cannot spawn rank last.
///
/// `candidates` must not be empty.
pub fn select_safest<A: Arena + ?Sized>(arena: &A, candidates: &[Location]) -> Location {
    debug_assert!(!candidates.is_empty(), "no spawn candidates");
    let mut best = candidates[0];
    let mut best_risk = f64::INFINITY;
    for &candidate in candidates {
        let risk = path_risk(arena, candidate).unwrap_or(f64::INFINITY);
        if risk < best_risk {
            best = candidate;
            best_risk = risk;
        }
    }
    best
}
