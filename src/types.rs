// Battlesnake API Types
// See https://docs.battlesnake.com/api

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Game metadata including ID and per-move timeout
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Game {
    pub id: String,
    #[serde(default)]
    pub ruleset: HashMap<String, Value>,
    pub timeout: u32,
    #[serde(default)]
    pub source: String,
}

/// Board state including dimensions, food and snakes
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Board {
    pub height: i32,
    pub width: i32,
    pub food: Vec<Coord>,
    pub snakes: Vec<Battlesnake>,
    #[serde(default)]
    pub hazards: Vec<Coord>,
}

/// Snake representation
///
/// The head is not stored: it is always the first body segment. The wire
/// format still carries a `head` field, which is reconciled on decode and
/// regenerated on encode.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(try_from = "WireBattlesnake", into = "WireBattlesnake")]
pub struct Battlesnake {
    pub id: String,
    pub name: String,
    pub health: i32,
    pub body: Vec<Coord>,
    pub length: i32,
    pub shout: Option<String>,
}

impl Battlesnake {
    /// Returns the head segment, or `None` for a body-less snake
    pub fn head(&self) -> Option<Coord> {
        self.body.first().copied()
    }
}

/// Errors raised while decoding a snake from the wire
#[derive(Debug, Error)]
pub enum SnakeDecodeError {
    #[error("snake '{id}' has an empty body")]
    EmptyBody { id: String },
}

/// Battlesnake as it appears in API payloads, with the redundant head field
#[derive(Deserialize, Serialize)]
struct WireBattlesnake {
    id: String,
    name: String,
    health: i32,
    body: Vec<Coord>,
    #[serde(default)]
    head: Option<Coord>,
    length: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shout: Option<String>,
}

impl TryFrom<WireBattlesnake> for Battlesnake {
    type Error = SnakeDecodeError;

    fn try_from(wire: WireBattlesnake) -> Result<Self, Self::Error> {
        let first = match wire.body.first() {
            Some(first) => *first,
            None => return Err(SnakeDecodeError::EmptyBody { id: wire.id }),
        };

        if let Some(head) = wire.head {
            if head != first {
                warn!(
                    "Snake {}: head {} disagrees with body[0] {}, using body[0]",
                    wire.id, head, first
                );
            }
        }

        Ok(Battlesnake {
            id: wire.id,
            name: wire.name,
            health: wire.health,
            body: wire.body,
            length: wire.length,
            shout: wire.shout,
        })
    }
}

impl From<Battlesnake> for WireBattlesnake {
    fn from(snake: Battlesnake) -> Self {
        WireBattlesnake {
            head: snake.head(),
            id: snake.id,
            name: snake.name,
            health: snake.health,
            body: snake.body,
            length: snake.length,
            shout: snake.shout,
        }
    }
}

/// 2D coordinate on the board
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents the four possible movement directions for a Battlesnake
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all possible directions
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// Converts direction to string representation for API response
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Calculates the next coordinate when moving in this direction.
    /// The y axis grows downward: `up` decrements y.
    ///
    /// Returns `None` when the target does not fit in an `i32`; such a cell
    /// cannot be on any board.
    pub fn apply(&self, coord: &Coord) -> Option<Coord> {
        match self {
            Direction::Up => coord.y.checked_sub(1).map(|y| Coord { x: coord.x, y }),
            Direction::Down => coord.y.checked_add(1).map(|y| Coord { x: coord.x, y }),
            Direction::Left => coord.x.checked_sub(1).map(|x| Coord { x, y: coord.y }),
            Direction::Right => coord.x.checked_add(1).map(|x| Coord { x, y: coord.y }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid direction: {0}")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// Complete game state received from the API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GameState {
    pub game: Game,
    pub turn: i32,
    pub board: Board,
    pub you: Battlesnake,
}

/// Body of the POST /move response
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub chosen: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shout: Option<String>,
}

/// Body of the GET / response
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InfoResponse {
    pub apiversion: String,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
}
