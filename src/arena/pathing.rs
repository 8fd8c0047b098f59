//! Projected paths for mobile units.
//!
//! A mobile unit walks toward the edge diagonally opposite its spawn
//! quadrant. If that edge is reachable it heads for the nearest reachable
//! edge cell; if structures seal it off, it heads for the deepest cell it
//! can still reach and self-destructs there.
//!
//! The path is built from a breadth-first distance field grown outward
//! from the chosen endpoints. Walking it, each step picks a neighbour one
//! closer to an endpoint, preferring to alternate between vertical and
//! horizontal moves and, after that, to move toward the target edge.

use std::collections::VecDeque;

use super::location::{Edge, Location, ARENA_SIZE};

const GRID_CELLS: usize = (ARENA_SIZE * ARENA_SIZE) as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Computes the path a mobile unit spawned at `start` would follow.
///
/// `blocked` reports cells occupied by structures. Returns `None` if
/// `start` is out of bounds or blocked. The returned path always begins
/// with `start`.
pub fn find_path_to_edge<F>(start: Location, blocked: F) -> Option<Vec<Location>>
where
    F: Fn(Location) -> bool,
{
    if !start.in_bounds() || blocked(start) {
        return None;
    }
    let passable = |l: Location| l.in_bounds() && !blocked(l);
    let edge = Edge::target_for(start);

    let reachable = flood(&[start], &passable);
    let mut endpoints: Vec<Location> = edge
        .locations()
        .into_iter()
        .filter(|l| reachable[l.index()].is_some())
        .collect();
    if endpoints.is_empty() {
        endpoints = deepest_reachable(&reachable, edge);
    }

    let field = flood(&endpoints, &passable);
    Some(walk(start, edge, &field, &passable))
}

/// Multi-source breadth-first distances over passable cells.
fn flood<F>(sources: &[Location], passable: &F) -> Vec<Option<u16>>
where
    F: Fn(Location) -> bool,
{
    let mut dist = vec![None; GRID_CELLS];
    let mut queue = VecDeque::with_capacity(GRID_CELLS);
    for &source in sources {
        if dist[source.index()].is_none() {
            dist[source.index()] = Some(0);
            queue.push_back(source);
        }
    }
    while let Some(current) = queue.pop_front() {
        let Some(d) = dist[current.index()] else {
            continue;
        };
        for next in current.neighbours() {
            if passable(next) && dist[next.index()].is_none() {
                dist[next.index()] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// The reachable cells that make the most progress toward `edge`:
/// furthest along y first, then furthest along x.
fn deepest_reachable(reachable: &[Option<u16>], edge: Edge) -> Vec<Location> {
    let progress = |l: Location| (l.y * edge.y_direction(), l.x * edge.x_direction());
    let cells: Vec<Location> = super::location::all_locations()
        .filter(|l| reachable[l.index()].is_some())
        .collect();
    let best = cells.iter().map(|l| progress(*l)).max();
    cells
        .into_iter()
        .filter(|l| Some(progress(*l)) == best)
        .collect()
}

fn walk<F>(start: Location, edge: Edge, field: &[Option<u16>], passable: &F) -> Vec<Location>
where
    F: Fn(Location) -> bool,
{
    let mut path = vec![start];
    let mut current = start;
    let mut last_axis: Option<Axis> = None;

    while let Some(d) = field[current.index()] {
        if d == 0 {
            break;
        }
        let next = current
            .neighbours()
            .into_iter()
            .filter(|n| passable(*n) && field[n.index()] == Some(d - 1))
            .min_by_key(|n| {
                let axis = if n.x == current.x {
                    Axis::Vertical
                } else {
                    Axis::Horizontal
                };
                let repeats_axis = match last_axis {
                    Some(last) => last == axis,
                    None => axis == Axis::Horizontal,
                };
                let toward_edge = match axis {
                    Axis::Vertical => (n.y - current.y) == edge.y_direction(),
                    Axis::Horizontal => (n.x - current.x) == edge.x_direction(),
                };
                (repeats_axis, !toward_edge)
            });
        let Some(next) = next else {
            break;
        };
        last_axis = Some(if next.x == current.x {
            Axis::Vertical
        } else {
            Axis::Horizontal
        });
        path.push(next);
        current = next;
    }
    path
}
