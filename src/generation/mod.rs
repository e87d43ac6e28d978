//! # Generation Module
//!
//! Procedural construction of grid dungeons.
//!
//! Generation is a fixed sequence of stages, each consuming the finished
//! output of the one before it:
//!
//! 1. [`topology`]: neighbour indexing, with or without wrap-around
//! 2. [`adjacency`]: random candidate passages
//! 3. [`spanning`]: union-find tree selection plus extra passages
//! 4. [`classify`]: cave/tunnel cells from the final passages
//! 5. [`distances`]: all-pairs hop counts
//! 6. [`placement`]: start/finish, treasure, arrows and monsters
//!
//! [`GridDungeonGenerator`] runs them in order against a single random source.

pub mod adjacency;
pub mod classify;
pub mod distances;
pub mod dungeon;
pub mod placement;
pub mod spanning;
pub mod topology;

pub use adjacency::*;
pub use distances::*;
pub use dungeon::*;
pub use placement::*;
pub use spanning::*;
pub use topology::*;

use crate::{config, CavernError, CavernResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_max_placement_attempts() -> u32 {
    config::DEFAULT_MAX_PLACEMENT_ATTEMPTS
}

/// Construction parameters for a dungeon.
///
/// All counts are unsigned, so negative values cannot be expressed; the
/// remaining range checks live in [`DungeonConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    /// Number of grid rows
    pub rows: usize,
    /// Number of grid columns
    pub columns: usize,
    /// Whether edge cells connect to the opposite edge
    pub wrapped: bool,
    /// Extra passages added beyond the spanning tree
    pub interconnectivity: usize,
    /// Chance (0 to 100) of a cave holding treasure and of any cell holding an arrow
    pub treasure_percentage: u8,
    /// Number of monsters, the first of which guards the finish
    pub monster_count: usize,
    /// Random seed, honoured in deterministic mode
    pub seed: u64,
    /// Seed the random source from `seed` instead of system entropy
    pub deterministic: bool,
    /// Draws allowed for each rejection-sampling placement before giving up
    #[serde(default = "default_max_placement_attempts")]
    pub max_placement_attempts: u32,
}

impl DungeonConfig {
    /// Creates a configuration for an unwrapped grid with defaults elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use cavern::DungeonConfig;
    ///
    /// let config = DungeonConfig::new(6, 8).with_wrapping(true).with_monsters(3);
    /// assert_eq!(config.rows, 6);
    /// assert_eq!(config.columns, 8);
    /// assert!(config.wrapped);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            wrapped: false,
            interconnectivity: 0,
            treasure_percentage: 20,
            monster_count: 1,
            seed: 0,
            deterministic: false,
            max_placement_attempts: config::DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Creates a reproducible 5x5 wrapped configuration for testing.
    pub fn for_testing(seed: u64) -> Self {
        Self::new(5, 5)
            .with_wrapping(true)
            .with_interconnectivity(1)
            .with_treasure_percentage(30)
            .with_seed(seed)
    }

    pub fn with_wrapping(mut self, wrapped: bool) -> Self {
        self.wrapped = wrapped;
        self
    }

    pub fn with_interconnectivity(mut self, interconnectivity: usize) -> Self {
        self.interconnectivity = interconnectivity;
        self
    }

    pub fn with_treasure_percentage(mut self, percentage: u8) -> Self {
        self.treasure_percentage = percentage;
        self
    }

    pub fn with_monsters(mut self, count: usize) -> Self {
        self.monster_count = count;
        self
    }

    /// Fixes the seed and switches to deterministic mode.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.deterministic = true;
        self
    }

    pub fn with_max_placement_attempts(mut self, attempts: u32) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Reads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> CavernResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every parameter, reporting the first one out of range.
    pub fn validate(&self) -> CavernResult<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(CavernError::InvalidArgument(format!(
                "Rows and columns need to be positive, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.treasure_percentage > 100 {
            return Err(CavernError::InvalidArgument(format!(
                "Treasure percentage must be between 0 and 100, got {}",
                self.treasure_percentage
            )));
        }
        if self.monster_count == 0 {
            return Err(CavernError::InvalidArgument(
                "There must be at least one monster".to_string(),
            ));
        }
        if self.max_placement_attempts == 0 {
            return Err(CavernError::InvalidArgument(
                "Placement attempt cap must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self::new(5, 5)
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &DungeonConfig, rng: &mut StdRng) -> CavernResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &DungeonConfig) -> CavernResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates the random source shared by every stage of one generation run.
    pub fn create_rng(config: &DungeonConfig) -> StdRng {
        if config.deterministic {
            StdRng::seed_from_u64(config.seed)
        } else {
            StdRng::from_entropy()
        }
    }

    /// Draws a percentage roll in `1..100`, as used by treasure and arrow placement.
    pub fn percentage_roll(rng: &mut StdRng) -> u32 {
        use rand::Rng;
        rng.gen_range(1..100)
    }
}
