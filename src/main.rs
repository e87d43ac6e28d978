//! # Cavern Command Line
//!
//! Generates a dungeon from command line flags or a JSON config file and
//! prints an overview of it.

use cavern::{CavernResult, Dungeon, DungeonConfig, Location};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Command line arguments for the dungeon generator.
#[derive(Parser, Debug)]
#[command(name = "cavern")]
#[command(about = "Generates wrap-around cave dungeons and reports their layout")]
#[command(version)]
struct Args {
    /// Number of grid rows
    #[arg(short, long, default_value_t = 5)]
    rows: usize,

    /// Number of grid columns
    #[arg(short, long, default_value_t = 5)]
    columns: usize,

    /// Connect edge cells to the opposite edge
    #[arg(short, long)]
    wrapped: bool,

    /// Extra passages beyond the spanning tree
    #[arg(short, long, default_value_t = 0)]
    interconnectivity: usize,

    /// Percentage of caves with treasure (also used for arrows)
    #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(u8).range(0..=100))]
    treasure_percentage: u8,

    /// Number of monsters
    #[arg(short, long, default_value_t = 1)]
    monsters: usize,

    /// Random seed; implies deterministic generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Load the whole configuration from a JSON file instead of flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the dungeon summary as JSON
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn dungeon_config(&self) -> CavernResult<DungeonConfig> {
        if let Some(path) = &self.config {
            info!("Loading configuration from {}", path.display());
            return DungeonConfig::from_json_file(path);
        }

        let mut config = DungeonConfig::new(self.rows, self.columns)
            .with_wrapping(self.wrapped)
            .with_interconnectivity(self.interconnectivity)
            .with_treasure_percentage(self.treasure_percentage)
            .with_monsters(self.monsters);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

fn main() -> CavernResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting Cavern v{}", cavern::VERSION);

    let config = args.dungeon_config()?;
    let dungeon = Dungeon::generate(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dungeon.summary())?);
    } else {
        print_report(&dungeon)?;
    }
    Ok(())
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::new()
        .parse_filters(log_level)
        .format_target(false)
        .init();
}

fn print_report(dungeon: &Dungeon) -> CavernResult<()> {
    let summary = dungeon.summary();
    println!(
        "{}x{} {} dungeon, interconnectivity {}",
        summary.rows,
        summary.columns,
        if summary.wrapped { "wrapped" } else { "unwrapped" },
        summary.interconnectivity
    );
    println!("{} caves, {} tunnels", summary.caves, summary.tunnels);
    println!(
        "Start {} -> finish {} ({} passages)",
        summary.start, summary.finish, summary.start_finish_distance
    );
    println!("Monsters: {}", join_locations(&summary.monsters));
    println!("Arrows: {}", join_locations(&summary.arrows));
    for (location, treasure) in &summary.treasure {
        println!("Treasure {:?} at {}", treasure, location);
    }
    println!("Smell at start: {:?}", dungeon.smell(dungeon.start())?);
    Ok(())
}

fn join_locations(locations: &[Location]) -> String {
    if locations.is_empty() {
        return "none".to_string();
    }
    locations
        .iter()
        .map(Location::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
