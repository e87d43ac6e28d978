//! # Dungeon Module
//!
//! The finished dungeon and everything that lives in it.
//!
//! This module contains the read model produced by the generation pipeline:
//! - Grid coordinates and the four cardinal directions
//! - Cells (caves and tunnels) with their passages and contents
//! - Monsters and the smell oracle that hints at their dens
//! - The `Dungeon` itself, which owns all of the above and answers queries

pub mod cell;
pub mod monster;
pub mod smell;
pub mod state;

pub use cell::*;
pub use monster::*;
pub use smell::*;
pub use state::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row/column coordinate of a cell in the dungeon grid.
///
/// # Examples
///
/// ```
/// use cavern::Location;
///
/// let loc = Location::new(2, 3);
/// assert_eq!(loc.row, 2);
/// assert_eq!(loc.column, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

impl Location {
    /// Creates a new location with the given coordinates.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// The four directions a passage can leave a cell in.
///
/// North decreases the row, south increases it; west decreases the
/// column, east increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in the order cells store their passages.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Returns the direction pointing the other way.
    ///
    /// # Examples
    ///
    /// ```
    /// use cavern::Direction;
    ///
    /// assert_eq!(Direction::North.opposite(), Direction::South);
    /// assert_eq!(Direction::West.opposite(), Direction::East);
    /// ```
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Slot of this direction in per-direction arrays.
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}
