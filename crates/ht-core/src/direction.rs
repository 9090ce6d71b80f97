//! The direction table: four unit vectors and their reverse lookup.
//!
//! Declaration order (North, South, West, East) is the *construction order*.
//! Every ordered collection of directions in the workspace iterates in this
//! order, which makes shortcut tie-breaking deterministic.

use crate::{HtError, HtResult};

/// One of the four grid moves.
///
/// The variant itself is the host-facing command token: hosts receive a
/// `Direction` in [`Actuator::issue_move`][crate::Actuator::issue_move] and
/// map it to whatever their move primitive expects.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All directions in construction order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// `(dx, dy)` unit vector.  North is `+y`, East is `+x`.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::West  => (-1, 0),
            Direction::East  => (1, 0),
        }
    }

    /// Compact token used when caching a tour.  Equals the construction index.
    #[inline]
    pub const fn id(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::West  => 2,
            Direction::East  => 3,
        }
    }

    /// Inverse of [`id`][Self::id].
    pub fn from_id(id: u8) -> HtResult<Direction> {
        Direction::ALL
            .get(id as usize)
            .copied()
            .ok_or(HtError::InvalidDirectionId(id))
    }

    #[inline]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West  => Direction::East,
            Direction::East  => Direction::West,
        }
    }

    /// Human-readable label, useful for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::West  => "west",
            Direction::East  => "east",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `deltaOf(direction)`.
#[inline]
pub fn delta_of(direction: Direction) -> (i32, i32) {
    direction.delta()
}

/// `directionOf(dx, dy)`.  Fails with [`HtError::InvalidVector`] unless the
/// delta is one of the four unit vectors.
pub fn direction_of(dx: i32, dy: i32) -> HtResult<Direction> {
    match (dx, dy) {
        (0, 1)  => Ok(Direction::North),
        (0, -1) => Ok(Direction::South),
        (-1, 0) => Ok(Direction::West),
        (1, 0)  => Ok(Direction::East),
        _       => Err(HtError::InvalidVector { dx, dy }),
    }
}

// ── DirectionSet ──────────────────────────────────────────────────────────────

/// A set of directions packed into one byte.
///
/// Iteration always yields members in construction order regardless of the
/// order they were inserted.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);

    #[inline]
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= 1 << direction.id();
    }

    #[inline]
    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !(1 << direction.id());
    }

    #[inline]
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & (1 << direction.id()) != 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in construction order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::EMPTY;
        for d in iter {
            set.insert(d);
        }
        set
    }
}
