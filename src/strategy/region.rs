//! Lane classification.
//!
//! The board is cut into six vertical lanes by column. Lanes are named by
//! side and by how far the lane's back edge sits from the middle of the
//! board: the high lanes hug the outer corners, the low lanes meet at the
//! bottom tip.

use crate::arena::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    LeftHigh,
    RightHigh,
    LeftMid,
    RightMid,
    LeftLow,
    RightLow,
}

/// Number of regions; the length of a breach vector.
pub const REGION_COUNT: usize = 6;

impl Region {
    /// Regions in reactive-defense priority order.
    pub const PRIORITY: [Region; REGION_COUNT] = [
        Region::LeftHigh,
        Region::LeftMid,
        Region::LeftLow,
        Region::RightLow,
        Region::RightMid,
        Region::RightHigh,
    ];

    /// Slot of this region in a breach vector.
    pub const fn index(self) -> usize {
        match self {
            Region::LeftHigh => 0,
            Region::RightHigh => 1,
            Region::LeftMid => 2,
            Region::RightMid => 3,
            Region::LeftLow => 4,
            Region::RightLow => 5,
        }
    }

    /// Where a reactive turret goes after this region is breached.
    pub const fn reinforcement(self) -> Location {
        match self {
            Region::LeftHigh => Location::new(2, 12),
            Region::LeftMid => Location::new(7, 8),
            Region::LeftLow => Location::new(13, 2),
            Region::RightLow => Location::new(14, 2),
            Region::RightMid => Location::new(20, 8),
            Region::RightHigh => Location::new(25, 12),
        }
    }
}

/// Maps a column to its lane. Columns past the right edge fall in
/// `RightHigh`, columns before the left edge in `LeftHigh`.
pub fn classify(column: i32) -> Region {
    match column {
        c if c < 4 => Region::LeftHigh,
        c if c < 10 => Region::LeftMid,
        c if c < 14 => Region::LeftLow,
        c if c < 18 => Region::RightLow,
        c if c < 24 => Region::RightMid,
        _ => Region::RightHigh,
    }
}
