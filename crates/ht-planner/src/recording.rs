//! An actuator that records commands instead of driving a game.

use ht_core::{Actuator, Direction, DirectionSet};

/// Records every issued direction; reports directions in `blocked` as
/// unmovable.
///
/// Useful in tests and for dry runs where no host is attached.
#[derive(Clone, Debug, Default)]
pub struct RecordingActuator {
    pub issued:  Vec<Direction>,
    pub blocked: DirectionSet,
}

impl RecordingActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// An actuator that refuses `blocked` in `can_move`.
    pub fn blocking(blocked: impl IntoIterator<Item = Direction>) -> Self {
        Self { issued: Vec::new(), blocked: blocked.into_iter().collect() }
    }

    /// The most recent issued direction.
    pub fn last(&self) -> Option<Direction> {
        self.issued.last().copied()
    }
}

impl Actuator for RecordingActuator {
    fn can_move(&self, direction: Direction) -> bool {
        !self.blocked.contains(direction)
    }

    fn issue_move(&mut self, direction: Direction) {
        self.issued.push(direction);
    }
}
