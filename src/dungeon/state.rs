//! # Dungeon State
//!
//! The finished dungeon: cell grid, distance matrix and entity registry.
//!
//! Structure (passages, roles, distances) is frozen once generation
//! completes. The only mutations left are the gameplay ones: collecting
//! treasure and arrows, and wounding monsters.

use crate::generation::{utils, DistanceMatrix, GridTopology, Placement};
use crate::{
    CavernError, CavernResult, Cell, CellRole, DungeonConfig, Generator, GridDungeonGenerator,
    Location, Monster, Treasure,
};
use serde::Serialize;

/// A generated dungeon and everything placed in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dungeon {
    topology: GridTopology,
    interconnectivity: usize,
    /// Row-major cell storage
    cells: Vec<Cell>,
    distances: DistanceMatrix,
    start: usize,
    finish: usize,
    initial_treasure: Vec<Location>,
    initial_arrows: Vec<Location>,
    /// Every monster ever placed, dead ones included; cells refer to them by index
    monsters: Vec<Monster>,
}

/// Serializable overview of a dungeon, used for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DungeonSummary {
    pub rows: usize,
    pub columns: usize,
    pub wrapped: bool,
    pub interconnectivity: usize,
    pub start: Location,
    pub finish: Location,
    pub start_finish_distance: u32,
    pub caves: usize,
    pub tunnels: usize,
    pub treasure: Vec<(Location, Treasure)>,
    pub arrows: Vec<Location>,
    pub monsters: Vec<Location>,
}

impl Dungeon {
    /// Validates `config` and runs the full generation pipeline with one
    /// random source created from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use cavern::{Dungeon, DungeonConfig};
    ///
    /// let dungeon = Dungeon::generate(&DungeonConfig::for_testing(7)).unwrap();
    /// assert_eq!(dungeon.rows(), 5);
    /// assert!(dungeon.has_monster(dungeon.finish()).unwrap());
    /// ```
    pub fn generate(config: &DungeonConfig) -> CavernResult<Self> {
        config.validate()?;
        let mut rng = utils::create_rng(config);
        GridDungeonGenerator::new().generate(config, &mut rng)
    }

    /// Puts the pipeline outputs together.
    pub(crate) fn assemble(
        topology: GridTopology,
        interconnectivity: usize,
        cells: Vec<Cell>,
        distances: DistanceMatrix,
        placement: Placement,
    ) -> Self {
        let initial_treasure = placement
            .treasure_cells
            .iter()
            .map(|&i| topology.location(i))
            .collect();
        let initial_arrows = placement
            .arrow_cells
            .iter()
            .map(|&i| topology.location(i))
            .collect();

        Self {
            topology,
            interconnectivity,
            cells,
            distances,
            start: placement.start,
            finish: placement.finish,
            initial_treasure,
            initial_arrows,
            monsters: placement.monsters,
        }
    }

    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    pub fn rows(&self) -> usize {
        self.topology.rows()
    }

    pub fn columns(&self) -> usize {
        self.topology.columns()
    }

    pub fn is_wrapped(&self) -> bool {
        self.topology.is_wrapped()
    }

    /// Number of extra passages added on top of the spanning tree.
    pub fn interconnectivity(&self) -> usize {
        self.interconnectivity
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell grid, one slice per row.
    pub fn grid(&self) -> Vec<&[Cell]> {
        self.cells.chunks(self.columns()).collect()
    }

    pub(crate) fn index_of(&self, location: Location) -> CavernResult<usize> {
        self.topology.checked_index(location)
    }

    /// Cell at `location`.
    pub fn cell(&self, location: Location) -> CavernResult<&Cell> {
        let index = self.index_of(location)?;
        Ok(&self.cells[index])
    }

    /// Whether a passage joins `a` and `b` directly.
    pub fn are_connected(&self, a: Location, b: Location) -> CavernResult<bool> {
        let from = self.cell(a)?;
        self.index_of(b)?;
        Ok(from.direction_to(b).is_some())
    }

    /// Fewest passages between `a` and `b`.
    pub fn distance(&self, a: Location, b: Location) -> CavernResult<u32> {
        let from = self.index_of(a)?;
        let to = self.index_of(b)?;
        Ok(self.distances.distance(from, to))
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn start(&self) -> Location {
        self.topology.location(self.start)
    }

    pub fn finish(&self) -> Location {
        self.topology.location(self.finish)
    }

    /// Caves that received treasure during generation, collected or not.
    pub fn initial_treasure_locations(&self) -> &[Location] {
        &self.initial_treasure
    }

    /// Cells that received an arrow during generation, collected or not.
    pub fn initial_arrow_locations(&self) -> &[Location] {
        &self.initial_arrows
    }

    /// Every monster placed, including dead ones.
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    pub fn live_monsters(&self) -> Vec<&Monster> {
        self.monsters.iter().filter(|m| m.is_alive()).collect()
    }

    pub(crate) fn monster_alive_at(&self, index: usize) -> bool {
        self.cells[index]
            .monster_id()
            .and_then(|id| self.monsters.get(id))
            .map_or(false, Monster::is_alive)
    }

    /// Whether a live monster dens at `location`.
    pub fn has_monster(&self, location: Location) -> CavernResult<bool> {
        let index = self.index_of(location)?;
        Ok(self.monster_alive_at(index))
    }

    /// Live monster denned at `location`, if any.
    pub fn monster_at(&self, location: Location) -> CavernResult<Option<&Monster>> {
        let index = self.index_of(location)?;
        Ok(self.cells[index]
            .monster_id()
            .and_then(|id| self.monsters.get(id))
            .filter(|m| m.is_alive()))
    }

    /// Hits the live monster at `location` once.
    ///
    /// Returns the monster's remaining health, or `None` when there was no
    /// live monster to hit.
    pub fn damage_monster_at(&mut self, location: Location) -> CavernResult<Option<u8>> {
        let index = self.index_of(location)?;
        let Some(id) = self.cells[index].monster_id() else {
            return Ok(None);
        };
        match self.monsters.get_mut(id) {
            Some(monster) if monster.is_alive() => {
                monster.receive_damage();
                log::debug!("Monster at {} hit, health now {}", location, monster.health());
                Ok(Some(monster.health()))
            }
            Some(_) => Ok(None),
            None => Err(CavernError::InvalidState(format!(
                "Cell {} refers to unknown monster {}",
                location, id
            ))),
        }
    }

    /// Removes and returns the treasure at `location`.
    pub fn collect_treasure(&mut self, location: Location) -> CavernResult<Option<Treasure>> {
        let index = self.index_of(location)?;
        Ok(self.cells[index].take_treasure())
    }

    /// Removes the arrow at `location`; returns whether there was one.
    pub fn collect_arrow(&mut self, location: Location) -> CavernResult<bool> {
        let index = self.index_of(location)?;
        Ok(self.cells[index].take_arrow())
    }

    pub fn count_role(&self, role: CellRole) -> usize {
        self.cells.iter().filter(|c| c.role() == role).count()
    }

    /// Snapshot of the dungeon's layout and current contents.
    pub fn summary(&self) -> DungeonSummary {
        DungeonSummary {
            rows: self.rows(),
            columns: self.columns(),
            wrapped: self.is_wrapped(),
            interconnectivity: self.interconnectivity,
            start: self.start(),
            finish: self.finish(),
            start_finish_distance: self.distances.distance(self.start, self.finish),
            caves: self.count_role(CellRole::Cave),
            tunnels: self.count_role(CellRole::Tunnel),
            treasure: self
                .cells
                .iter()
                .filter_map(|c| c.treasure().map(|t| (c.location(), t)))
                .collect(),
            arrows: self
                .cells
                .iter()
                .filter(|c| c.has_arrow())
                .map(Cell::location)
                .collect(),
            monsters: self.live_monsters().iter().map(|m| m.den()).collect(),
        }
    }
}
