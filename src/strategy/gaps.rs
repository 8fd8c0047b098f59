//! Frontier gap scanning.
//!
//! Looks for columns where the opponent's front rows are open, to decide
//! which flank a demolisher line should work. The scan walks a band of
//! rows just past the middle of the board. A column survives a row when
//! that row and the one behind it are both free of structures; survivors
//! widen by one column each side before the next row so that diagonal
//! openings are not lost. The result is an opinion on which half is
//! weaker, not an exhaustive hole list.

use std::collections::BTreeSet;

use crate::arena::{Arena, Location, ARENA_SIZE};

/// Columns below this are on the left half.
const LEFT_HALF_END: i32 = 13;

/// Which side of the opponent's frontier is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapReading {
    Left,
    Right,
    /// Openings on both halves; no clear preference.
    Both,
    /// No opening found.
    Closed,
}

impl GapReading {
    /// Summarizes a set of open columns.
    pub fn from_columns(columns: &[i32]) -> GapReading {
        let left = columns.iter().any(|c| *c < LEFT_HALF_END);
        let right = columns.iter().any(|c| *c >= LEFT_HALF_END);
        match (left, right) {
            (true, true) => GapReading::Both,
            (true, false) => GapReading::Left,
            (false, true) => GapReading::Right,
            (false, false) => GapReading::Closed,
        }
    }
}

/// Returns the columns that stay open through the row band, sorted.
///
/// `band` lists the rows to scan from the front inward; each pass checks a
/// row together with the row behind it, so a band of `n` rows makes
/// `n - 1` passes.
pub fn open_columns<A: Arena + ?Sized>(arena: &A, band: &[i32]) -> Vec<i32> {
    // (probe column, origin column)
    let mut open: BTreeSet<(i32, i32)> = (0..ARENA_SIZE).map(|x| (x, x)).collect();

    for &row in band.iter().take(band.len().saturating_sub(1)) {
        let mut next = BTreeSet::new();
        for &(x, origin) in &open {
            let front = Location::new(x, row);
            let behind = Location::new(x, row + 1);
            if arena.in_bounds(front)
                && !arena.contains_stationary_unit(front)
                && !arena.contains_stationary_unit(behind)
            {
                next.insert((x - 1, origin));
                next.insert((x, origin));
                next.insert((x + 1, origin));
            }
        }
        open = next;
    }

    let origins: BTreeSet<i32> = open.into_iter().map(|(_, origin)| origin).collect();
    origins.into_iter().collect()
}

/// Scans the band and reports which half is open.
pub fn scan<A: Arena + ?Sized>(arena: &A, band: &[i32]) -> GapReading {
    GapReading::from_columns(&open_columns(arena, band))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::scripted::ScriptedArena;
    use crate::arena::{Player, StructureKind};

    const BAND: [i32; 3] = [14, 15, 16];

    fn wall_rows(arena: &mut ScriptedArena, columns: impl Iterator<Item = i32>) {
        for x in columns {
            for y in [14, 15] {
                arena.place(StructureKind::Wall, Player::Enemy, Location::new(x, y));
            }
        }
    }

    #[test]
    fn empty_frontier_is_open_on_both_sides() {
        let arena = ScriptedArena::new(5);
        let columns = open_columns(&arena, &BAND);
        assert_eq!(columns, (0..ARENA_SIZE).collect::<Vec<_>>());
        assert_eq!(scan(&arena, &BAND), GapReading::Both);
    }

    #[test]
    fn sealed_frontier_is_closed() {
        let mut arena = ScriptedArena::new(5);
        wall_rows(&mut arena, 0..ARENA_SIZE);
        assert!(open_columns(&arena, &BAND).is_empty());
        assert_eq!(scan(&arena, &BAND), GapReading::Closed);
    }

    #[test]
    fn single_left_hole() {
        let mut arena = ScriptedArena::new(5);
        wall_rows(&mut arena, (0..ARENA_SIZE).filter(|x| *x != 5));
        let columns = open_columns(&arena, &BAND);
        assert!(columns.contains(&5));
        assert!(columns.iter().all(|c| *c < LEFT_HALF_END));
        assert_eq!(scan(&arena, &BAND), GapReading::Left);
    }

    #[test]
    fn single_right_hole() {
        let mut arena = ScriptedArena::new(5);
        wall_rows(&mut arena, (0..ARENA_SIZE).filter(|x| *x != 20));
        assert_eq!(scan(&arena, &BAND), GapReading::Right);
    }

    #[test]
    fn hole_blocked_one_row_deeper_is_not_open() {
        let mut arena = ScriptedArena::new(5);
        wall_rows(&mut arena, (0..ARENA_SIZE).filter(|x| *x != 20));
        // Plug the column and both neighbours one row behind the frontier.
        for x in 18..=22 {
            arena.place(StructureKind::Wall, Player::Enemy, Location::new(x, 16));
        }
        assert_eq!(scan(&arena, &BAND), GapReading::Closed);
    }

    #[test]
    fn classification_threshold() {
        assert_eq!(GapReading::from_columns(&[12]), GapReading::Left);
        assert_eq!(GapReading::from_columns(&[13]), GapReading::Right);
        assert_eq!(GapReading::from_columns(&[2, 25]), GapReading::Both);
        assert_eq!(GapReading::from_columns(&[]), GapReading::Closed);
    }
}
