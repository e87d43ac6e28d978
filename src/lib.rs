//! # Cavern
//!
//! Generator and query engine for grid-shaped cave dungeons.
//!
//! ## Architecture Overview
//!
//! A dungeon is built once by a strictly sequential pipeline and is read-only
//! afterwards, apart from a handful of gameplay mutations:
//!
//! - **Topology**: grid indexing with optional wrap-around (toroidal) edges
//! - **Adjacency**: coin-flip candidate passages between neighbouring cells
//! - **Spanning tree**: union-find selection plus a fixed number of extra passages
//! - **Classification**: every cell becomes a Cave or a Tunnel from its degree
//! - **Distances**: all-pairs hop counts via Floyd–Warshall
//! - **Placement**: start/finish, treasures, arrows and monsters
//!
//! The finished [`Dungeon`] answers the queries the turn loop, renderer and
//! combat resolution need, including the two-hop monster [`Smell`] oracle.
//!
//! Every stage draws from one shared seeded random source, so a dungeon built
//! in deterministic mode is fully reproducible from its [`DungeonConfig`].

pub mod dungeon;
pub mod generation;

pub use dungeon::*;
pub use generation::*;

pub use dungeon::{Cell, CellRole, Direction, Dungeon, Location, Monster, Smell, Treasure};

pub use generation::{DungeonConfig, Generator, GridDungeonGenerator, GridTopology};

/// Core error type for the Cavern dungeon engine.
#[derive(thiserror::Error, Debug)]
pub enum CavernError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A configuration value or query argument is out of range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A mutation contradicts the structure of the dungeon
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Not enough discarded passages to honour the requested interconnectivity
    #[error(
        "Interconnectivity {requested} cannot be satisfied: only {promoted} extra passages were available"
    )]
    ExcessiveInterconnectivity { requested: usize, promoted: usize },

    /// A rejection-sampling placement loop hit its attempt cap
    #[error("Could not place {what} after {attempts} attempts; the grid is too small for this configuration")]
    PlacementExhausted { what: &'static str, attempts: u32 },

    /// Generation produced a dungeon that breaks an invariant
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Cavern codebase.
pub type CavernResult<T> = Result<T, CavernError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dungeon rule constants.
pub mod config {
    /// Minimum number of hops between the start and the finish cell
    pub const MIN_START_FINISH_DISTANCE: u32 = 5;

    /// Health every monster starts with
    pub const MONSTER_STARTING_HEALTH: u8 = 2;

    /// Distance reported between cells with no path between them
    pub const UNREACHABLE: u32 = 9_999_999;

    /// Default cap on rejection-sampling draws during placement
    pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;
}
