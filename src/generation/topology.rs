//! # Grid Topology
//!
//! Neighbour indexing for a rows x columns grid. Every adjacency decision
//! in the pipeline goes through [`GridTopology::neighbour`], so wrap-around
//! behaviour is defined in exactly one place.

use crate::{CavernError, CavernResult, Direction, Location};
use serde::Serialize;

/// Shape of the dungeon grid and its boundary rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridTopology {
    rows: usize,
    columns: usize,
    wrapped: bool,
}

impl GridTopology {
    /// Creates a topology; both dimensions must be positive.
    pub fn new(rows: usize, columns: usize, wrapped: bool) -> CavernResult<Self> {
        if rows == 0 || columns == 0 {
            return Err(CavernError::InvalidArgument(format!(
                "Rows and columns need to be positive, got {}x{}",
                rows, columns
            )));
        }
        Ok(Self {
            rows,
            columns,
            wrapped,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_wrapped(&self) -> bool {
        self.wrapped
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, location: Location) -> bool {
        location.row < self.rows && location.column < self.columns
    }

    /// Row-major index of `location`, or `None` when it lies outside the grid.
    pub fn index(&self, location: Location) -> Option<usize> {
        self.contains(location)
            .then(|| location.row * self.columns + location.column)
    }

    /// Like [`GridTopology::index`], but reports out-of-range locations as errors.
    pub fn checked_index(&self, location: Location) -> CavernResult<usize> {
        self.index(location).ok_or_else(|| {
            CavernError::InvalidArgument(format!(
                "Location {} is outside the {}x{} grid",
                location, self.rows, self.columns
            ))
        })
    }

    /// Location of the cell at row-major `index`.
    pub fn location(&self, index: usize) -> Location {
        Location::new(index / self.columns, index % self.columns)
    }

    /// Neighbouring location in `direction`.
    ///
    /// At a grid edge the neighbour wraps to the opposite edge when wrapping
    /// is enabled and does not exist otherwise. A dimension of one never
    /// produces a neighbour along that axis, since it would be the cell itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use cavern::{Direction, GridTopology, Location};
    ///
    /// let torus = GridTopology::new(5, 5, true).unwrap();
    /// assert_eq!(torus.neighbour(Location::new(2, 0), Direction::West), Some(Location::new(2, 4)));
    ///
    /// let flat = GridTopology::new(5, 5, false).unwrap();
    /// assert_eq!(flat.neighbour(Location::new(2, 0), Direction::West), None);
    /// ```
    pub fn neighbour(&self, location: Location, direction: Direction) -> Option<Location> {
        let Location { row, column } = location;
        match direction {
            Direction::North => {
                step_back(row, self.rows, self.wrapped).map(|r| Location::new(r, column))
            }
            Direction::South => {
                step_forward(row, self.rows, self.wrapped).map(|r| Location::new(r, column))
            }
            Direction::East => {
                step_forward(column, self.columns, self.wrapped).map(|c| Location::new(row, c))
            }
            Direction::West => {
                step_back(column, self.columns, self.wrapped).map(|c| Location::new(row, c))
            }
        }
    }

    /// Neighbours in all four directions, indexed by `Direction::index`.
    pub fn neighbours(&self, location: Location) -> [Option<Location>; 4] {
        Direction::ALL.map(|dir| self.neighbour(location, dir))
    }

    /// Every pair of adjacent cells, once each, as `(lower, higher)` indexes
    /// in row-major order.
    pub fn adjacent_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for index in 0..self.len() {
            for neighbour in self.neighbours(self.location(index)).into_iter().flatten() {
                if let Some(other) = self.index(neighbour) {
                    let pair = (index.min(other), index.max(other));
                    if !pairs.contains(&pair) {
                        pairs.push(pair);
                    }
                }
            }
        }
        pairs
    }
}

fn step_back(value: usize, size: usize, wrapped: bool) -> Option<usize> {
    if size < 2 {
        None
    } else if value > 0 {
        Some(value - 1)
    } else if wrapped {
        Some(size - 1)
    } else {
        None
    }
}

fn step_forward(value: usize, size: usize, wrapped: bool) -> Option<usize> {
    if size < 2 {
        None
    } else if value + 1 < size {
        Some(value + 1)
    } else if wrapped {
        Some(0)
    } else {
        None
    }
}
