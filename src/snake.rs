use std::collections::HashSet;

use crate::Coords;
use crate::grid::Grid;
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// One-cell displacement in pixel units.
    pub fn delta(&self, cell_size: i32) -> Coords {
        match self {
            Up => (0, -cell_size),
            Down => (0, cell_size),
            Left => (-cell_size, 0),
            Right => (cell_size, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

pub struct Snake {
    body: Vec<Coords>,
    direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
}

impl Snake {
    pub fn new(grid: &Grid) -> Self {
        Snake {
            body: vec![grid.center()],
            direction: Right,
            pending_direction: None,
            target_length: 1,
        }
    }

    /// Body cells, head first.
    pub fn segments(&self) -> &[Coords] {
        &self.body
    }

    pub fn head_position(&self) -> Coords {
        self.body[0]
    }

    /// Records the direction to apply on the next step. A request for the
    /// exact reverse of the current direction is dropped, so the snake can
    /// never fold back onto its own neck in a single tick.
    pub fn request_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.pending_direction = Some(new_direction);
        }
    }

    /// One movement step. The pending direction, if any, becomes current
    /// before the head advances. A step that would leave the grid commits
    /// nothing: the snake resets on the spot and the call returns.
    ///
    /// Self-overlap is *not* checked here; it only exists once the new head
    /// has been committed, so the caller queries `has_self_collision` after
    /// the step.
    pub fn advance(&mut self, grid: &Grid) {
        if let Some(dir) = self.pending_direction.take() {
            self.direction = dir;
        }

        let (dx, dy) = self.direction.delta(grid.cell_size());
        let head = self.head_position();
        let new_head = (head.0 + dx, head.1 + dy);

        if !grid.in_bounds(new_head) {
            self.reset(grid);
            return;
        }

        self.body.insert(0, new_head);

        if self.body.len() > self.target_length {
            self.body.pop();
        }
    }

    /// Lets the body keep its tail on the next step, one extra cell per call.
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    pub fn has_self_collision(&self) -> bool {
        let unique: HashSet<Coords> = self.body.iter().copied().collect();
        unique.len() != self.body.len()
    }

    /// Back to the starting configuration: one segment at the grid center,
    /// heading right, nothing pending.
    pub fn reset(&mut self, grid: &Grid) {
        self.body = vec![grid.center()];
        self.direction = Right;
        self.pending_direction = None;
        self.target_length = 1;
    }
}
