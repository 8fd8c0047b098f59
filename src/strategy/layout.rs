//! The fixed defensive layout.
//!
//! Three tiers, queued in order every turn. Tier 1 anchors the two corners
//! with turrets screened by walls; tier 2 builds the central funnel and its
//! supports; tier 3 thickens the middle and upgrades the corner walls, and
//! is only queued when structure points are plentiful. Cells that already
//! hold the structure are skipped by the arena, so re-queuing is harmless.

use super::queue::BuildQueue;
use crate::arena::{Location, StructureKind};

const fn at(x: i32, y: i32) -> Location {
    Location::new(x, y)
}

const CORNER_TURRETS: [Location; 2] = [at(4, 11), at(23, 11)];
const CORNER_SCREEN_WALLS: [Location; 6] = [
    at(1, 12),
    at(3, 12),
    at(5, 12),
    at(26, 12),
    at(24, 12),
    at(22, 12),
];
const CORNER_EDGE_WALLS: [Location; 8] = [
    at(0, 13),
    at(2, 13),
    at(4, 13),
    at(6, 13),
    at(27, 13),
    at(25, 13),
    at(23, 13),
    at(21, 13),
];

const FUNNEL_WALLS: [Location; 6] = [
    at(12, 11),
    at(12, 12),
    at(13, 12),
    at(14, 12),
    at(15, 12),
    at(15, 11),
];
const FUNNEL_TURRETS: [Location; 2] = [at(13, 11), at(14, 11)];
const FUNNEL_SUPPORTS: [Location; 2] = [at(13, 10), at(14, 10)];
const FLANK_TURRETS: [Location; 2] = [at(8, 11), at(19, 11)];
const REAR_SUPPORTS: [Location; 2] = [at(13, 9), at(14, 9)];

const DEEP_TURRETS: [Location; 2] = [at(10, 6), at(17, 6)];
const DEEP_SUPPORTS: [Location; 2] = [at(13, 8), at(14, 8)];
const FUNNEL_BACK_WALLS: [Location; 4] = [at(12, 10), at(12, 9), at(15, 10), at(15, 9)];
const CORNER_WALL_UPGRADES: [Location; 14] = [
    at(0, 13),
    at(1, 12),
    at(2, 13),
    at(3, 12),
    at(4, 13),
    at(5, 12),
    at(6, 13),
    at(27, 13),
    at(26, 12),
    at(25, 13),
    at(24, 12),
    at(23, 13),
    at(22, 12),
    at(21, 13),
];

pub fn enqueue_tier_one(queue: &mut BuildQueue) {
    queue.enqueue_structure(StructureKind::Turret, &CORNER_TURRETS);
    queue.enqueue_upgrade(&CORNER_TURRETS);
    queue.enqueue_wall(&CORNER_SCREEN_WALLS);
    queue.enqueue_wall(&CORNER_EDGE_WALLS);
}

pub fn enqueue_tier_two(queue: &mut BuildQueue) {
    queue.enqueue_wall(&FUNNEL_WALLS);
    queue.enqueue_upgraded(StructureKind::Turret, &FUNNEL_TURRETS);
    queue.enqueue_upgraded(StructureKind::Support, &FUNNEL_SUPPORTS);
    queue.enqueue_upgraded(StructureKind::Turret, &FLANK_TURRETS);
    queue.enqueue_upgraded(StructureKind::Support, &REAR_SUPPORTS);
}

pub fn enqueue_tier_three(queue: &mut BuildQueue) {
    queue.enqueue_upgraded(StructureKind::Turret, &DEEP_TURRETS);
    queue.enqueue_upgraded(StructureKind::Support, &DEEP_SUPPORTS);
    queue.enqueue_wall(&FUNNEL_BACK_WALLS);
    queue.enqueue_upgrade(&CORNER_WALL_UPGRADES);
}

/// Queues the layout; tier 3 only when `structure_points` exceeds
/// `tier_three_threshold`. Returns the number of tiers queued.
pub fn enqueue_layout(queue: &mut BuildQueue, structure_points: f64, tier_three_threshold: f64) -> u8 {
    enqueue_tier_one(queue);
    enqueue_tier_two(queue);
    if structure_points > tier_three_threshold {
        enqueue_tier_three(queue);
        3
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::queue::BuildOrder;

    fn all_layout_cells() -> Vec<Location> {
        [
            &CORNER_TURRETS[..],
            &CORNER_SCREEN_WALLS[..],
            &CORNER_EDGE_WALLS[..],
            &FUNNEL_WALLS[..],
            &FUNNEL_TURRETS[..],
            &FUNNEL_SUPPORTS[..],
            &FLANK_TURRETS[..],
            &REAR_SUPPORTS[..],
            &DEEP_TURRETS[..],
            &DEEP_SUPPORTS[..],
            &FUNNEL_BACK_WALLS[..],
        ]
        .concat()
    }

    #[test]
    fn layout_fits_our_half_without_overlap() {
        let cells = all_layout_cells();
        for cell in &cells {
            assert!(cell.in_bounds() && cell.is_friendly_territory(), "{cell}");
        }
        let mut sorted = cells.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), cells.len());
    }

    #[test]
    fn wall_upgrades_target_tier_one_walls() {
        let walls = [&CORNER_SCREEN_WALLS[..], &CORNER_EDGE_WALLS[..]].concat();
        for cell in CORNER_WALL_UPGRADES {
            assert!(walls.contains(&cell), "{cell}");
        }
    }

    #[test]
    fn low_structure_points_skip_tier_three() {
        let mut queue = BuildQueue::new();
        assert_eq!(enqueue_layout(&mut queue, 10.0, 10.0), 2);
        assert_eq!(queue.walls().len(), 20);
        assert!(!queue
            .general()
            .contains(&BuildOrder::Upgrade { location: at(0, 13) }));
    }

    #[test]
    fn high_structure_points_add_tier_three() {
        let mut queue = BuildQueue::new();
        assert_eq!(enqueue_layout(&mut queue, 10.5, 10.0), 3);
        assert_eq!(queue.walls().len(), 24);
        // 2 turrets + 2 upgrades, then 4 upgraded pairs of 2, for tiers 1-2;
        // 4 upgraded pairs and 14 wall upgrades for tier 3.
        assert_eq!(queue.general().len(), 4 + 16 + 8 + 14);
    }
}
