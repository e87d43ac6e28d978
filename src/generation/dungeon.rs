//! # Dungeon Generation
//!
//! Runs the generation stages in order against a single random source.
//!
//! This generator creates dungeons by:
//! 1. Drawing random candidate passages between grid neighbours
//! 2. Selecting a spanning tree and promoting extra passages for loops
//! 3. Classifying every cell as a cave or a tunnel
//! 4. Computing all-pairs distances
//! 5. Placing treasure, start/finish, monsters and arrows

use crate::generation::{
    adjacency, classify, spanning, DistanceMatrix, EntityPlacer, GridTopology, Placement,
};
use crate::{
    config, CavernError, CavernResult, CellRole, Dungeon, DungeonConfig, Generator,
};
use rand::rngs::StdRng;

/// Generator for grid dungeons of caves and tunnels.
#[derive(Debug, Clone, Default)]
pub struct GridDungeonGenerator;

impl GridDungeonGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator<Dungeon> for GridDungeonGenerator {
    fn generate(&self, config: &DungeonConfig, rng: &mut StdRng) -> CavernResult<Dungeon> {
        config.validate()?;
        let topology = GridTopology::new(config.rows, config.columns, config.wrapped)?;
        log::info!(
            "Generating {}x{} {} dungeon with interconnectivity {}",
            config.rows,
            config.columns,
            if config.wrapped { "wrapped" } else { "unwrapped" },
            config.interconnectivity
        );

        let candidates = adjacency::candidate_edges(&topology, rng);
        let tree = spanning::select(&topology, &candidates, config.interconnectivity)?;

        let mut cells = classify::classify(&topology, &tree.selected);
        let distances = DistanceMatrix::compute(&topology, &cells);

        let placer = EntityPlacer::new(config.max_placement_attempts);
        let treasure_cells = placer.place_treasure(&mut cells, config.treasure_percentage, rng)?;
        let (start, finish) = placer.choose_start_finish(&topology, &cells, &distances, rng)?;
        let monsters = placer.place_monsters(
            &topology,
            &mut cells,
            start,
            finish,
            config.monster_count,
            rng,
        )?;
        let arrow_cells = placer.place_arrows(&mut cells, config.treasure_percentage, rng);

        let placement = Placement {
            start,
            finish,
            treasure_cells,
            arrow_cells,
            monsters,
        };
        let dungeon = Dungeon::assemble(
            topology,
            config.interconnectivity,
            cells,
            distances,
            placement,
        );

        self.validate(&dungeon, config)?;
        log::info!(
            "Dungeon ready: start {}, finish {}, {} monsters",
            dungeon.start(),
            dungeon.finish(),
            dungeon.live_monsters().len()
        );
        Ok(dungeon)
    }

    fn validate(&self, dungeon: &Dungeon, config: &DungeonConfig) -> CavernResult<()> {
        if !dungeon.distances().is_fully_connected() {
            return Err(CavernError::GenerationFailed(
                "Some cells cannot be reached".to_string(),
            ));
        }

        for cell in dungeon.cells() {
            let tunnel = cell.connection_count() == 2;
            if tunnel != (cell.role() == CellRole::Tunnel) {
                return Err(CavernError::GenerationFailed(format!(
                    "{} has {} passages",
                    cell,
                    cell.connection_count()
                )));
            }
        }

        let (start, finish) = (dungeon.start(), dungeon.finish());
        if dungeon.distance(start, finish)? < config::MIN_START_FINISH_DISTANCE {
            return Err(CavernError::GenerationFailed(format!(
                "Start {} and finish {} are too close",
                start, finish
            )));
        }
        if !dungeon.cell(finish)?.is_cave() || !dungeon.has_monster(finish)? {
            return Err(CavernError::GenerationFailed(format!(
                "Finish {} must be a cave guarded by a monster",
                finish
            )));
        }

        let live = dungeon.live_monsters();
        if live.len() != config.monster_count {
            return Err(CavernError::GenerationFailed(format!(
                "Expected {} monsters, found {}",
                config.monster_count,
                live.len()
            )));
        }
        for monster in live {
            let den = dungeon.cell(monster.den())?;
            if den.is_tunnel() || monster.den() == start {
                return Err(CavernError::GenerationFailed(format!(
                    "Monster denned in invalid cell {}",
                    den
                )));
            }
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "GridDungeonGenerator"
    }
}
