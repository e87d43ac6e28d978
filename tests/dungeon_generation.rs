//! Integration tests for full dungeon generation scenarios.

use cavern::{
    CavernError, CavernResult, CellRole, Direction, Dungeon, DungeonConfig, Location, Smell,
};
use pathfinding::prelude::bfs;
use std::collections::HashSet;

fn every_location(dungeon: &Dungeon) -> Vec<Location> {
    dungeon.cells().iter().map(|c| c.location()).collect()
}

fn uses_wrap_passage(dungeon: &Dungeon) -> bool {
    let last_row = dungeon.rows() - 1;
    let last_column = dungeon.columns() - 1;
    dungeon.cells().iter().any(|cell| {
        (cell.column() == 0
            && cell.exit(Direction::West) == Some(Location::new(cell.row(), last_column)))
            || (cell.column() == last_column
                && cell.exit(Direction::East) == Some(Location::new(cell.row(), 0)))
            || (cell.row() == 0
                && cell.exit(Direction::North) == Some(Location::new(last_row, cell.column())))
            || (cell.row() == last_row
                && cell.exit(Direction::South) == Some(Location::new(0, cell.column())))
    })
}

#[test]
fn test_wrapped_five_by_five_scenario() -> CavernResult<()> {
    let mut wrapped_somewhere = false;
    for seed in 1..=5 {
        let dungeon = Dungeon::generate(&DungeonConfig::for_testing(seed))?;
        wrapped_somewhere |= uses_wrap_passage(&dungeon);

        assert!(dungeon.distance(dungeon.start(), dungeon.finish())? >= 5);

        let monsters = dungeon.live_monsters();
        assert_eq!(monsters.len(), 1);
        assert_eq!(monsters[0].den(), dungeon.finish());
    }
    assert!(wrapped_somewhere, "expected at least one wrap-around passage");
    Ok(())
}

#[test]
fn test_wrap_topology_for_column_zero() -> CavernResult<()> {
    let dungeon = Dungeon::generate(&DungeonConfig::for_testing(1))?;
    for row in 0..dungeon.rows() {
        let west = dungeon.topology().neighbour(Location::new(row, 0), Direction::West);
        assert_eq!(west, Some(Location::new(row, 4)));
    }
    Ok(())
}

#[test]
fn test_unwrapped_dungeon_has_no_boundary_passages() -> CavernResult<()> {
    let config = DungeonConfig::for_testing(1).with_wrapping(false);
    let dungeon = Dungeon::generate(&config)?;
    let last_row = dungeon.rows() - 1;
    let last_column = dungeon.columns() - 1;

    for cell in dungeon.cells() {
        if cell.column() == 0 {
            assert!(!cell.has_connection(Direction::West), "{}", cell);
        }
        if cell.column() == last_column {
            assert!(!cell.has_connection(Direction::East), "{}", cell);
        }
        if cell.row() == 0 {
            assert!(!cell.has_connection(Direction::North), "{}", cell);
        }
        if cell.row() == last_row {
            assert!(!cell.has_connection(Direction::South), "{}", cell);
        }
    }
    Ok(())
}

#[test]
fn test_every_cell_reachable() -> CavernResult<()> {
    for seed in 0..10 {
        let dungeon = Dungeon::generate(&DungeonConfig::for_testing(seed))?;
        let locations = every_location(&dungeon);
        for &a in &locations {
            for &b in &locations {
                assert!(dungeon.distance(a, b)? < cavern::config::UNREACHABLE);
            }
        }
    }
    Ok(())
}

#[test]
fn test_distances_match_breadth_first_search() -> CavernResult<()> {
    let config = DungeonConfig::new(6, 5)
        .with_wrapping(true)
        .with_interconnectivity(2)
        .with_seed(77);
    let dungeon = Dungeon::generate(&config)?;

    let successors = |loc: &Location| -> Vec<Location> {
        dungeon
            .cell(*loc)
            .map(|cell| cell.neighbours())
            .unwrap_or_default()
    };

    for a in every_location(&dungeon) {
        for b in every_location(&dungeon) {
            let path = bfs(&a, successors, |loc| *loc == b).expect("dungeon is connected");
            assert_eq!(dungeon.distance(a, b)? as usize, path.len() - 1);
            assert_eq!(dungeon.distance(a, b)?, dungeon.distance(b, a)?);
        }
    }
    Ok(())
}

#[test]
fn test_five_monsters_on_distinct_caves() -> CavernResult<()> {
    let config = DungeonConfig::for_testing(1).with_monsters(5);
    let dungeon = Dungeon::generate(&config)?;

    let monsters = dungeon.live_monsters();
    assert_eq!(monsters.len(), 5);

    let dens: HashSet<Location> = monsters.iter().map(|m| m.den()).collect();
    assert_eq!(dens.len(), 5);
    assert!(dens.contains(&dungeon.finish()));
    assert!(!dens.contains(&dungeon.start()));
    for den in dens {
        assert_eq!(dungeon.cell(den)?.role(), CellRole::Cave);
    }
    Ok(())
}

#[test]
fn test_treasure_only_in_caves() -> CavernResult<()> {
    let config = DungeonConfig::for_testing(4).with_treasure_percentage(90);
    let dungeon = Dungeon::generate(&config)?;
    for &loc in dungeon.initial_treasure_locations() {
        let cell = dungeon.cell(loc)?;
        assert!(cell.is_cave());
        assert!(cell.has_treasure());
    }
    for &loc in dungeon.initial_arrow_locations() {
        assert!(dungeon.cell(loc)?.has_arrow());
    }
    Ok(())
}

#[test]
fn test_monster_survives_one_hit_and_dies_on_second() -> CavernResult<()> {
    let mut dungeon = Dungeon::generate(&DungeonConfig::for_testing(2))?;
    let finish = dungeon.finish();

    assert_eq!(dungeon.monster_at(finish)?.map(|m| m.health()), Some(2));

    assert_eq!(dungeon.damage_monster_at(finish)?, Some(1));
    assert!(dungeon.has_monster(finish)?);
    assert_eq!(dungeon.monster_at(finish)?.map(|m| m.health()), Some(1));

    assert_eq!(dungeon.damage_monster_at(finish)?, Some(0));
    assert!(!dungeon.has_monster(finish)?);
    assert!(dungeon.monster_at(finish)?.is_none());
    assert!(dungeon.live_monsters().is_empty());

    // The den still records its monster
    assert!(dungeon.cell(finish)?.monster_id().is_some());
    assert_eq!(dungeon.damage_monster_at(finish)?, None);
    Ok(())
}

#[test]
fn test_smell_near_finish() -> CavernResult<()> {
    let dungeon = Dungeon::generate(&DungeonConfig::for_testing(3))?;
    let finish = dungeon.finish();

    assert_eq!(dungeon.smell(finish)?, Smell::NoSmell);
    for neighbour in dungeon.cell(finish)?.neighbours() {
        assert_eq!(dungeon.smell(neighbour)?, Smell::MorePungent);
    }
    // Start is at least five passages from the only monster
    assert_eq!(dungeon.smell(dungeon.start())?, Smell::NoSmell);
    Ok(())
}

#[test]
fn test_same_seed_same_dungeon() -> CavernResult<()> {
    let config = DungeonConfig::for_testing(31337).with_monsters(3);
    assert_eq!(Dungeon::generate(&config)?, Dungeon::generate(&config)?);
    Ok(())
}

#[test]
fn test_excessive_interconnectivity() {
    let config = DungeonConfig::new(3, 3).with_interconnectivity(100).with_seed(1);
    assert!(matches!(
        Dungeon::generate(&config),
        Err(CavernError::ExcessiveInterconnectivity { requested: 100, .. })
    ));
}

#[test]
fn test_walk_follows_tunnels() -> CavernResult<()> {
    let dungeon = Dungeon::generate(&DungeonConfig::for_testing(6))?;
    for cell in dungeon.cells().iter().filter(|c| c.is_tunnel()) {
        for entry in cell.possible_directions() {
            let (next, next_entry) = cell.next_step(entry).expect("tunnels always lead on");
            assert!(dungeon.are_connected(cell.location(), next)?);
            // Coming back through the same passage leads where we came from
            let back = dungeon.cell(next)?.direction_to(cell.location());
            assert_eq!(back, Some(next_entry));
        }
    }
    Ok(())
}
