use std::collections::VecDeque;

use crate::config::GameConfig;
use crate::grid;
use crate::Coords;

use rand::seq::SliceRandom;
use rand::Rng;

use AdvanceResult::*;
use Direction::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// Unit vector of this direction, in cells.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum AdvanceResult {
    Moved {
        new_head: Coords,
        old_tail: Option<Coords>,
    },
    Collided,
}

/// The player entity: an ordered sequence of occupied cells, head first.
/// Growth is gradual, one cell per tick, realized by withholding tail
/// removal until the body reaches the target length.
pub struct Snake {
    segments: VecDeque<Coords>,
    direction: Direction,
    target_length: usize,
    score: u32,
}

impl Snake {
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut snake = Snake {
            segments: VecDeque::new(),
            direction: Up,
            target_length: 1,
            score: 0,
        };
        snake.reset(config, rng);
        snake
    }

    pub fn head(&self) -> Coords {
        self.segments[0]
    }

    pub fn segments(&self) -> &VecDeque<Coords> {
        &self.segments
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Points the snake in a new direction. A reversal onto the neck is
    /// ignored while the body is longer than one cell; every other request
    /// wins immediately, including one matching the current heading.
    pub fn turn(&mut self, direction: Direction) {
        if self.segments.len() > 1 && direction == self.direction.opposite() {
            return;
        }
        self.direction = direction;
    }

    /// Moves the head one cell in the current direction, wrapping at the
    /// screen edges. Cells at index 2 and beyond form the collision set:
    /// with reversals rejected the head cannot reach its own neck, so a
    /// body of one or two cells never collides.
    pub fn advance(&mut self, config: &GameConfig) -> AdvanceResult {
        let (hx, hy) = self.head();
        let (dx, dy) = self.direction.delta();
        let new_head = grid::wrap(
            (hx + dx * config.cell_size, hy + dy * config.cell_size),
            config.screen_width,
            config.screen_height,
        );

        if self.segments.len() > 2 && self.segments.iter().skip(2).any(|&cell| cell == new_head) {
            return Collided;
        }

        self.segments.push_front(new_head);
        let old_tail = if self.segments.len() > self.target_length {
            self.segments.pop_back()
        } else {
            None
        };

        Moved { new_head, old_tail }
    }

    /// Called when the head lands on food: one more cell of body to earn,
    /// one more point on the board.
    pub fn grow(&mut self) {
        self.target_length += 1;
        self.score += 1;
    }

    /// Back to a single cell at the screen center, heading a random way.
    pub fn reset(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        self.segments.clear();
        self.segments.push_front(config.center());
        self.direction = *Direction::ALL.choose(rng).unwrap();
        self.target_length = 1;
        self.score = 0;
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    #[cfg(test)]
    pub(crate) fn target_length(&self) -> usize {
        self.target_length
    }
}
