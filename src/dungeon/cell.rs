//! # Cells
//!
//! A cell is one square of the dungeon grid. Its role is fixed by how many
//! passages leave it: exactly two makes a tunnel, any other count a cave.
//! Only caves may hold treasure or host a monster.

use crate::{CavernError, CavernResult, Direction, Location, MonsterId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a cell, derived from its passage count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellRole {
    /// Zero, one, three or four passages
    Cave,
    /// Exactly two passages
    Tunnel,
}

impl CellRole {
    /// Classifies a cell by its number of open passages.
    ///
    /// # Examples
    ///
    /// ```
    /// use cavern::CellRole;
    ///
    /// assert_eq!(CellRole::from_connection_count(2), CellRole::Tunnel);
    /// assert_eq!(CellRole::from_connection_count(3), CellRole::Cave);
    /// ```
    pub fn from_connection_count(count: usize) -> Self {
        if count == 2 {
            CellRole::Tunnel
        } else {
            CellRole::Cave
        }
    }
}

impl fmt::Display for CellRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellRole::Cave => f.write_str("Cave"),
            CellRole::Tunnel => f.write_str("Tunnel"),
        }
    }
}

/// Kinds of treasure a cave can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Treasure {
    Diamond,
    Ruby,
    Sapphire,
}

impl Treasure {
    /// Picks the treasure kind for a placement roll (`roll mod 3`).
    pub fn from_roll(roll: u32) -> Self {
        match roll % 3 {
            0 => Treasure::Diamond,
            1 => Treasure::Ruby,
            _ => Treasure::Sapphire,
        }
    }
}

/// A single square of the dungeon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    location: Location,
    /// Neighbour reached through each open passage, indexed by `Direction::index`
    exits: [Option<Location>; 4],
    role: CellRole,
    treasure: Option<Treasure>,
    arrow: bool,
    monster: Option<MonsterId>,
}

impl Cell {
    /// Creates an empty cell with the given open passages.
    ///
    /// The role follows from the number of passages, so a cell can never be
    /// a cave with two passages or a tunnel without exactly two.
    pub fn new(location: Location, exits: [Option<Location>; 4]) -> Self {
        let count = exits.iter().filter(|exit| exit.is_some()).count();
        Self {
            location,
            exits,
            role: CellRole::from_connection_count(count),
            treasure: None,
            arrow: false,
            monster: None,
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn row(&self) -> usize {
        self.location.row
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn role(&self) -> CellRole {
        self.role
    }

    pub fn is_cave(&self) -> bool {
        self.role == CellRole::Cave
    }

    pub fn is_tunnel(&self) -> bool {
        self.role == CellRole::Tunnel
    }

    /// Whether a passage leaves this cell in `direction`.
    pub fn has_connection(&self, direction: Direction) -> bool {
        self.exits[direction.index()].is_some()
    }

    /// The neighbour reached by leaving in `direction`, if a passage exists.
    pub fn exit(&self, direction: Direction) -> Option<Location> {
        self.exits[direction.index()]
    }

    /// Iterates over the open passages as `(direction, neighbour)` pairs.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, Location)> + '_ {
        Direction::ALL
            .iter()
            .filter_map(move |&dir| self.exit(dir).map(|loc| (dir, loc)))
    }

    /// Neighbours reachable in one step.
    pub fn neighbours(&self) -> Vec<Location> {
        self.exits().map(|(_, loc)| loc).collect()
    }

    pub fn connection_count(&self) -> usize {
        self.exits().count()
    }

    /// Directions of the open passages, in north/south/east/west order.
    pub fn possible_directions(&self) -> Vec<Direction> {
        self.exits().map(|(dir, _)| dir).collect()
    }

    /// Direction of the passage leading to `neighbour`, if one does.
    pub fn direction_to(&self, neighbour: Location) -> Option<Direction> {
        self.exits()
            .find(|(_, loc)| *loc == neighbour)
            .map(|(dir, _)| dir)
    }

    /// Side a traveller leaves through after entering from the `entry` side.
    ///
    /// Caves are crossed in a straight line, so the exit is the opposite
    /// side and must be open. Tunnels bend: entering through one opening
    /// leaves through the other. Returns `None` when the path ends here.
    pub fn exit_for_entry(&self, entry: Direction) -> Option<Direction> {
        match self.role {
            CellRole::Cave => {
                let straight = entry.opposite();
                self.has_connection(straight).then_some(straight)
            }
            CellRole::Tunnel => {
                if !self.has_connection(entry) {
                    return None;
                }
                self.possible_directions()
                    .into_iter()
                    .find(|&dir| dir != entry)
            }
        }
    }

    /// Next cell on a path entering this one from the `entry` side, together
    /// with the side the path enters that cell from.
    pub fn next_step(&self, entry: Direction) -> Option<(Location, Direction)> {
        let exit = self.exit_for_entry(entry)?;
        self.exit(exit).map(|loc| (loc, exit.opposite()))
    }

    pub fn treasure(&self) -> Option<Treasure> {
        self.treasure
    }

    pub fn has_treasure(&self) -> bool {
        self.treasure.is_some()
    }

    /// Stores a treasure in this cell. Tunnels cannot hold treasure.
    pub fn set_treasure(&mut self, treasure: Treasure) -> CavernResult<()> {
        if self.is_tunnel() {
            return Err(CavernError::InvalidState(format!(
                "Tunnel at {} cannot hold treasure",
                self.location
            )));
        }
        self.treasure = Some(treasure);
        Ok(())
    }

    /// Removes and returns the treasure, if any.
    pub fn take_treasure(&mut self) -> Option<Treasure> {
        self.treasure.take()
    }

    pub fn has_arrow(&self) -> bool {
        self.arrow
    }

    /// Drops an arrow here. Any cell can hold one.
    pub fn place_arrow(&mut self) {
        self.arrow = true;
    }

    /// Removes the arrow; returns whether there was one.
    pub fn take_arrow(&mut self) -> bool {
        std::mem::take(&mut self.arrow)
    }

    /// Registry index of the monster denned here, alive or dead.
    pub fn monster_id(&self) -> Option<MonsterId> {
        self.monster
    }

    /// Records `id` as the monster denned in this cell. Only caves host monsters.
    pub fn set_monster(&mut self, id: MonsterId) -> CavernResult<()> {
        if self.is_tunnel() {
            return Err(CavernError::InvalidState(format!(
                "Monsters can only be located in caves, {} is a tunnel",
                self.location
            )));
        }
        self.monster = Some(id);
        Ok(())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.role, self.location)
    }
}
