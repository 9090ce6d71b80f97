//! An in-memory game host.
//!
//! `GridHost` plays the role of the external environment: it owns the true
//! snake, places targets on free cells, and refuses moves that would leave
//! the grid or hit the body.  A refused move leaves the agent in place, which
//! the round loop reports as [`SimError::HostDesync`][crate::SimError::HostDesync].

use std::collections::VecDeque;

use ht_core::{Actuator, Cell, Direction, GridConfig, Host, Sensor, TargetRng};

/// Self-contained game state for tests, demos, and batch runs.
pub struct GridHost {
    size:     u32,
    /// Head first.
    snake:    VecDeque<Cell>,
    /// Row-major occupancy, mirrors `snake`.
    occupied: Vec<bool>,
    /// `None` once the snake covers the grid.
    target:   Option<Cell>,
    start:    Option<Cell>,
    rng:      TargetRng,
    moves:    u64,
    rejected: u64,
}

impl GridHost {
    /// A host on an `size × size` grid with a random start cell and target.
    pub fn new(size: u32, rng: TargetRng) -> Self {
        let mut host = Self {
            size,
            snake: VecDeque::new(),
            occupied: vec![false; size as usize * size as usize],
            target: None,
            start: None,
            rng,
            moves: 0,
            rejected: 0,
        };
        host.reset();
        host
    }

    /// A host seeded from `config.seed`, starting every round at
    /// `config.start` if set.
    pub fn from_config(config: &GridConfig) -> Self {
        let host = Self::new(config.size, TargetRng::new(config.seed));
        match config.start {
            Some(start) => host.with_start(start),
            None => host,
        }
    }

    /// Pin the start cell for this and every later round.
    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = Some(start);
        self.reset();
        self
    }

    /// Move the current target to `cell`.  Returns `false` (and changes
    /// nothing) if `cell` is off-grid or occupied.
    pub fn place_target(&mut self, cell: Cell) -> bool {
        if !cell.within(self.size) || self.is_occupied(cell) {
            return false;
        }
        self.target = Some(cell);
        true
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Snake cells, head first.
    pub fn snake(&self) -> impl Iterator<Item = Cell> + '_ {
        self.snake.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    /// Moves executed since construction.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Moves refused since construction.
    pub fn rejected_moves(&self) -> u64 {
        self.rejected
    }

    #[inline]
    fn is_occupied(&self, cell: Cell) -> bool {
        self.occupied[cell.index(self.size)]
    }

    fn head(&self) -> Cell {
        self.snake.front().copied().unwrap_or(Cell::ORIGIN)
    }

    // ── State changes ─────────────────────────────────────────────────────

    fn occupy(&mut self, cell: Cell) {
        self.occupied[cell.index(self.size)] = true;
        self.snake.push_front(cell);
    }

    fn spawn_target(&mut self) {
        let free: Vec<Cell> = (0..self.occupied.len())
            .filter(|&i| !self.occupied[i])
            .map(|i| Cell::from_index(i, self.size))
            .collect();
        self.target = self.rng.choose(&free).copied();
    }
}

impl Sensor for GridHost {
    fn position(&self) -> Cell {
        self.head()
    }

    fn target(&self) -> Cell {
        // A full grid has no target left; the round loop never asks then.
        self.target.unwrap_or_else(|| self.head())
    }
}

impl Actuator for GridHost {
    fn can_move(&self, direction: Direction) -> bool {
        let dest = self.head().step(direction);
        if !dest.within(self.size) {
            return false;
        }
        if !self.is_occupied(dest) {
            return true;
        }
        // The tail moves out of the way on a non-eating move, and the target
        // is never on the snake.
        self.snake.back() == Some(&dest)
    }

    fn issue_move(&mut self, direction: Direction) {
        if !self.can_move(direction) {
            self.rejected += 1;
            tracing::debug!(%direction, head = %self.head(), "grid host refused move");
            return;
        }
        self.moves += 1;

        let dest = self.head().step(direction);
        if self.target == Some(dest) {
            self.occupy(dest);
            self.spawn_target();
        } else {
            if let Some(tail) = self.snake.pop_back() {
                self.occupied[tail.index(self.size)] = false;
            }
            self.occupy(dest);
        }
    }
}

impl Host for GridHost {
    fn reset(&mut self) {
        self.snake.clear();
        self.occupied.fill(false);
        if self.occupied.is_empty() {
            return;
        }

        let start = match self.start.filter(|s| s.within(self.size)) {
            Some(start) => start,
            None => {
                let i = self.rng.gen_range(0..self.occupied.len());
                Cell::from_index(i, self.size)
            }
        };
        self.occupy(start);
        self.spawn_target();
    }
}

/// The board, north row first: `H` head, `o` body, `*` target, `.` free.
impl std::fmt::Display for GridHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.size as i32;
        for y in (0..n).rev() {
            for x in 0..n {
                let cell = Cell::new(x, y);
                let glyph = if self.snake.front() == Some(&cell) {
                    'H'
                } else if self.is_occupied(cell) {
                    'o'
                } else if self.target == Some(cell) {
                    '*'
                } else {
                    '.'
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
