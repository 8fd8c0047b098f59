//! Diamond grid geometry.
//!
//! The arena is a 28x28 square with the corners cut off, leaving a diamond
//! of 420 playable cells. Row 0 and row 27 are the narrow tips; rows 13 and
//! 14 span the full width. The bottom half (rows 0-13) belongs to us, the
//! top half to the opponent.

/// Width and height of the bounding square.
pub const ARENA_SIZE: i32 = 28;

/// Half of the bounding square; the first row of the opponent's territory.
pub const HALF_ARENA: i32 = ARENA_SIZE / 2;

/// A cell on the grid. Coordinates may lie outside the diamond; use
/// [`Location::in_bounds`] before treating one as a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true if the cell lies inside the diamond.
    pub fn in_bounds(self) -> bool {
        let Location { x, y } = self;
        if !(0..ARENA_SIZE).contains(&y) {
            return false;
        }
        // Row width grows by two per row toward the middle, from both tips.
        let row_size = if y < HALF_ARENA {
            y + 1
        } else {
            ARENA_SIZE - y
        };
        let start_x = HALF_ARENA - row_size;
        let end_x = start_x + 2 * row_size - 1;
        x >= start_x && x <= end_x
    }

    /// Returns true if the cell is in our half of the board.
    pub fn is_friendly_territory(self) -> bool {
        self.y < HALF_ARENA
    }

    /// Euclidean distance between two cells.
    pub fn distance(self, other: Location) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// The four orthogonal neighbours, in bounds or not.
    pub fn neighbours(self) -> [Location; 4] {
        [
            Location::new(self.x, self.y + 1),
            Location::new(self.x, self.y - 1),
            Location::new(self.x + 1, self.y),
            Location::new(self.x - 1, self.y),
        ]
    }

    /// Flat index into a `ARENA_SIZE * ARENA_SIZE` grid. Only meaningful
    /// for in-bounds cells.
    pub(crate) fn index(self) -> usize {
        (self.y * ARENA_SIZE + self.x) as usize
    }
}

impl From<(i32, i32)> for Location {
    fn from((x, y): (i32, i32)) -> Self {
        Location::new(x, y)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// One of the four diagonal edges of the diamond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    TopRight,
    TopLeft,
    BottomLeft,
    BottomRight,
}

impl Edge {
    pub const ALL: [Edge; 4] = [
        Edge::TopRight,
        Edge::TopLeft,
        Edge::BottomLeft,
        Edge::BottomRight,
    ];

    /// The opponent's back edges, where our mobile units score.
    pub const ENEMY: [Edge; 2] = [Edge::TopLeft, Edge::TopRight];

    /// Our back edges, where our mobile units spawn.
    pub const FRIENDLY: [Edge; 2] = [Edge::BottomLeft, Edge::BottomRight];

    /// Returns the 14 cells along this edge, ordered from the middle row
    /// outward to the tip.
    pub fn locations(self) -> Vec<Location> {
        (0..HALF_ARENA)
            .map(|n| match self {
                Edge::TopRight => Location::new(HALF_ARENA + n, ARENA_SIZE - 1 - n),
                Edge::TopLeft => Location::new(HALF_ARENA - 1 - n, ARENA_SIZE - 1 - n),
                Edge::BottomLeft => Location::new(HALF_ARENA - 1 - n, n),
                Edge::BottomRight => Location::new(HALF_ARENA + n, n),
            })
            .collect()
    }

    /// Returns true if `location` lies on this edge.
    pub fn contains(self, location: Location) -> bool {
        let Location { x, y } = location;
        if !location.in_bounds() {
            return false;
        }
        match self {
            Edge::TopRight => x >= HALF_ARENA && x + y == ARENA_SIZE - 1 + HALF_ARENA,
            Edge::TopLeft => x < HALF_ARENA && y - x == HALF_ARENA,
            Edge::BottomLeft => x < HALF_ARENA && x + y == HALF_ARENA - 1,
            Edge::BottomRight => x >= HALF_ARENA && x - y == HALF_ARENA,
        }
    }

    /// The edge a unit spawned at `start` walks toward: the one diagonally
    /// opposite the quadrant it starts in.
    pub fn target_for(start: Location) -> Edge {
        let left = start.x < HALF_ARENA;
        let bottom = start.y < HALF_ARENA;
        match (left, bottom) {
            (true, true) => Edge::TopRight,
            (true, false) => Edge::BottomRight,
            (false, true) => Edge::TopLeft,
            (false, false) => Edge::BottomLeft,
        }
    }

    /// Unit step along x that moves toward this edge.
    pub(crate) fn x_direction(self) -> i32 {
        match self {
            Edge::TopRight | Edge::BottomRight => 1,
            Edge::TopLeft | Edge::BottomLeft => -1,
        }
    }

    /// Unit step along y that moves toward this edge.
    pub(crate) fn y_direction(self) -> i32 {
        match self {
            Edge::TopRight | Edge::TopLeft => 1,
            Edge::BottomLeft | Edge::BottomRight => -1,
        }
    }
}

/// Iterates every in-bounds cell, row by row from the bottom tip.
pub fn all_locations() -> impl Iterator<Item = Location> {
    (0..ARENA_SIZE)
        .flat_map(|y| (0..ARENA_SIZE).map(move |x| Location::new(x, y)))
        .filter(|l| l.in_bounds())
}
