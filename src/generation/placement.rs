//! # Entity Placement
//!
//! Puts the start, finish, treasure, arrows and monsters into a classified
//! dungeon. Start/finish and monster placement are rejection samplers; both
//! give up after a fixed number of draws instead of looping forever on a
//! grid too small for the request.

use crate::generation::{utils, DistanceMatrix, GridTopology};
use crate::{config, CavernError, CavernResult, Cell, Monster, Treasure};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Everything placement decided, by row-major cell index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Placement {
    pub start: usize,
    pub finish: usize,
    pub treasure_cells: Vec<usize>,
    pub arrow_cells: Vec<usize>,
    pub monsters: Vec<Monster>,
}

/// Places entities using one shared random source.
#[derive(Debug, Clone)]
pub struct EntityPlacer {
    /// Draws allowed per rejection-sampling loop
    pub max_attempts: u32,
}

impl EntityPlacer {
    pub fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Gives every cave a chance of holding one treasure.
    ///
    /// Returns the indexes of the caves that received one.
    pub fn place_treasure(
        &self,
        cells: &mut [Cell],
        percentage: u8,
        rng: &mut StdRng,
    ) -> CavernResult<Vec<usize>> {
        let mut placed = Vec::new();
        for (index, cell) in cells.iter_mut().enumerate().filter(|(_, c)| c.is_cave()) {
            let roll = utils::percentage_roll(rng);
            if roll < u32::from(percentage) {
                cell.set_treasure(Treasure::from_roll(roll))?;
                placed.push(index);
            }
        }
        log::debug!("Placed treasure in {} caves", placed.len());
        Ok(placed)
    }

    /// Samples a start and a finish at least
    /// [`config::MIN_START_FINISH_DISTANCE`] passages apart, the finish being a cave.
    pub fn choose_start_finish(
        &self,
        topology: &GridTopology,
        cells: &[Cell],
        distances: &DistanceMatrix,
        rng: &mut StdRng,
    ) -> CavernResult<(usize, usize)> {
        for _ in 0..self.max_attempts {
            let start = random_cell(topology, rng);
            let finish = random_cell(topology, rng);
            let distance = distances.distance(start, finish);

            if cells[finish].is_cave()
                && distance >= config::MIN_START_FINISH_DISTANCE
                && distance < config::UNREACHABLE
            {
                log::debug!(
                    "Start {} and finish {} are {} passages apart",
                    topology.location(start),
                    topology.location(finish),
                    distance
                );
                return Ok((start, finish));
            }
        }
        Err(CavernError::PlacementExhausted {
            what: "start and finish",
            attempts: self.max_attempts,
        })
    }

    /// Places `count` monsters: the first always at `finish`, the rest in
    /// random caves other than `start` that have no monster yet.
    pub fn place_monsters(
        &self,
        topology: &GridTopology,
        cells: &mut [Cell],
        start: usize,
        finish: usize,
        count: usize,
        rng: &mut StdRng,
    ) -> CavernResult<Vec<Monster>> {
        let mut monsters = Vec::with_capacity(count);
        if count == 0 {
            return Ok(monsters);
        }

        spawn(topology, cells, &mut monsters, finish)?;

        let mut attempts = 0;
        while monsters.len() < count {
            if attempts == self.max_attempts {
                return Err(CavernError::PlacementExhausted {
                    what: "monsters",
                    attempts,
                });
            }
            attempts += 1;

            let index = random_cell(topology, rng);
            let cell = &cells[index];
            if index == start || cell.is_tunnel() || cell.monster_id().is_some() {
                continue;
            }
            spawn(topology, cells, &mut monsters, index)?;
        }

        log::debug!("Placed {} monsters", monsters.len());
        Ok(monsters)
    }

    /// Visits every cell in shuffled order and drops an arrow on a
    /// successful roll.
    pub fn place_arrows(&self, cells: &mut [Cell], percentage: u8, rng: &mut StdRng) -> Vec<usize> {
        let mut order: Vec<usize> = (0..cells.len()).collect();
        order.shuffle(rng);

        let mut placed = Vec::new();
        for index in order {
            if utils::percentage_roll(rng) < u32::from(percentage) {
                cells[index].place_arrow();
                placed.push(index);
            }
        }
        log::debug!("Placed {} arrows", placed.len());
        placed
    }
}

impl Default for EntityPlacer {
    fn default() -> Self {
        Self::new(config::DEFAULT_MAX_PLACEMENT_ATTEMPTS)
    }
}

fn random_cell(topology: &GridTopology, rng: &mut StdRng) -> usize {
    let row = rng.gen_range(0..topology.rows());
    let column = rng.gen_range(0..topology.columns());
    row * topology.columns() + column
}

fn spawn(
    topology: &GridTopology,
    cells: &mut [Cell],
    monsters: &mut Vec<Monster>,
    index: usize,
) -> CavernResult<()> {
    cells[index].set_monster(monsters.len())?;
    monsters.push(Monster::new(topology.location(index)));
    Ok(())
}
