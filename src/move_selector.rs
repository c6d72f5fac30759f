// Move selection
//
// Filters the four directions down to the ones that are immediately safe
// (in-bounds and unoccupied) and picks one of them uniformly at random.
// When nothing is safe the snake is lost anyway, so any of the four
// directions is returned instead of an error.

use rand::Rng;
use serde::Deserialize;

use crate::types::{Board, Coord, Direction};

/// In-bounds predicate used by the safety filter
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoundsRule {
    /// Historical edge check: x must lie in `[0, width)`, y is only rejected
    /// below 0 or above `height + 1`. Rows `height` and `height + 1` pass.
    #[default]
    Reference,
    /// Both axes must lie inside the board
    Strict,
}

impl BoundsRule {
    /// Checks if a coordinate is out of bounds under this rule
    /// Compared in i64 so board dimensions near i32::MAX cannot overflow
    pub fn is_out_of_bounds(&self, coord: &Coord, width: i32, height: i32) -> bool {
        let (x, y) = (i64::from(coord.x), i64::from(coord.y));
        let (width, height) = (i64::from(width), i64::from(height));

        match self {
            BoundsRule::Reference => x > width - 1 || y > height + 1 || x < 0 || y < 0,
            BoundsRule::Strict => x < 0 || x >= width || y < 0 || y >= height,
        }
    }
}

/// Outcome of a single move decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub chosen: Direction,
    pub safe_moves: Vec<Direction>,
}

impl Decision {
    /// True when no direction was safe and the move was drawn from all four
    pub fn is_fallback(&self) -> bool {
        self.safe_moves.is_empty()
    }
}

/// Stateless move selector parameterized only by its bounds rule
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveSelector {
    bounds_rule: BoundsRule,
}

impl MoveSelector {
    pub fn new(bounds_rule: BoundsRule) -> Self {
        MoveSelector { bounds_rule }
    }

    /// Returns every direction whose target cell is in-bounds and not
    /// occupied by any snake, own body included. A target past the i32
    /// range is off the board.
    pub fn compute_safe_moves(&self, head: Coord, board: &Board) -> Vec<Direction> {
        Direction::all()
            .iter()
            .filter(|dir| {
                dir.apply(&head)
                    .is_some_and(|target| self.is_safe(&target, board))
            })
            .copied()
            .collect()
    }

    /// A cell is safe if it is on the board and no snake occupies it
    pub fn is_safe(&self, coord: &Coord, board: &Board) -> bool {
        !self
            .bounds_rule
            .is_out_of_bounds(coord, board.width, board.height)
            && !Self::is_occupied(coord, board)
    }

    /// Checks every segment of every snake. Heads are body[0], so they are
    /// covered by the same scan.
    pub fn is_occupied(coord: &Coord, board: &Board) -> bool {
        board.snakes.iter().any(|snake| snake.body.contains(coord))
    }

    /// Reports whether a cell holds food. Never consulted when choosing.
    pub fn is_food(coord: &Coord, board: &Board) -> bool {
        board.food.contains(coord)
    }

    /// Picks uniformly among `safe_moves`, or among all four directions
    /// when the slice is empty
    pub fn select_move<R: Rng>(safe_moves: &[Direction], rng: &mut R) -> Direction {
        if safe_moves.is_empty() {
            let all = Direction::all();
            return all[rng.random_range(0..all.len())];
        }

        safe_moves[rng.random_range(0..safe_moves.len())]
    }

    /// Computes the safe set for `head` and selects from it
    pub fn decide<R: Rng>(&self, head: Coord, board: &Board, rng: &mut R) -> Decision {
        let safe_moves = self.compute_safe_moves(head, board);
        let chosen = Self::select_move(&safe_moves, rng);

        Decision { chosen, safe_moves }
    }
}
