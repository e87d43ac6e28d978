//! # Smell
//!
//! Monsters can be smelled before they are seen. A live monster one passage
//! away gives off a strong odour, one two passages away a faint one.

use crate::{CavernResult, Dungeon, Location};
use serde::{Deserialize, Serialize};

/// Strength of monster odour at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Smell {
    NoSmell,
    LessPungent,
    MorePungent,
}

impl Dungeon {
    /// Odour level at `location`, looking up to two passages away.
    ///
    /// A live monster in the cell itself is met directly rather than smelled,
    /// so it yields [`Smell::NoSmell`].
    pub fn smell(&self, location: Location) -> CavernResult<Smell> {
        let index = self.index_of(location)?;
        Ok(self.smell_from(index, true))
    }

    /// Recursive part of the oracle. Only a primary query looks at
    /// neighbours of neighbours, which caps the recursion at two hops.
    fn smell_from(&self, index: usize, primary: bool) -> Smell {
        if self.monster_alive_at(index) {
            return Smell::NoSmell;
        }

        let neighbours: Vec<usize> = self.cells()[index]
            .neighbours()
            .into_iter()
            .filter_map(|loc| self.topology().index(loc))
            .collect();

        if neighbours.iter().any(|&n| self.monster_alive_at(n)) {
            return Smell::MorePungent;
        }

        if primary
            && neighbours
                .iter()
                .any(|&n| self.smell_from(n, false) == Smell::MorePungent)
        {
            return Smell::LessPungent;
        }

        Smell::NoSmell
    }
}
