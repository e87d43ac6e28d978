//! Property tests for the invariants every generated dungeon must hold.

use cavern::{config, CellRole, Dungeon, DungeonConfig, Location};
use proptest::prelude::*;

fn wrapped_config() -> impl Strategy<Value = DungeonConfig> {
    (5_usize..=7, 5_usize..=7, 0_usize..=1, 0_u8..=100, 1_usize..=3, any::<u64>()).prop_map(
        |(rows, columns, interconnectivity, percentage, monsters, seed)| {
            DungeonConfig::new(rows, columns)
                .with_wrapping(true)
                .with_interconnectivity(interconnectivity)
                .with_treasure_percentage(percentage)
                .with_monsters(monsters)
                .with_seed(seed)
        },
    )
}

fn unwrapped_config() -> impl Strategy<Value = DungeonConfig> {
    (5_usize..=7, 5_usize..=7, 0_u8..=100, any::<u64>()).prop_map(
        |(rows, columns, percentage, seed)| {
            DungeonConfig::new(rows, columns)
                .with_treasure_percentage(percentage)
                .with_seed(seed)
        },
    )
}

fn check_invariants(dungeon: &Dungeon, config: &DungeonConfig) -> Result<(), TestCaseError> {
    prop_assert!(dungeon.distances().is_fully_connected());

    for cell in dungeon.cells() {
        prop_assert_eq!(cell.role() == CellRole::Tunnel, cell.connection_count() == 2);
        if cell.has_treasure() {
            prop_assert!(cell.is_cave());
        }
    }

    let (start, finish) = (dungeon.start(), dungeon.finish());
    prop_assert!(dungeon.distance(start, finish).unwrap() >= config::MIN_START_FINISH_DISTANCE);
    prop_assert!(dungeon.cell(finish).unwrap().is_cave());
    prop_assert!(dungeon.has_monster(finish).unwrap());

    let monsters = dungeon.live_monsters();
    prop_assert_eq!(monsters.len(), config.monster_count);
    for monster in monsters {
        prop_assert!(monster.den() != start);
        prop_assert!(dungeon.cell(monster.den()).unwrap().is_cave());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn wrapped_dungeons_hold_invariants(config in wrapped_config()) {
        let dungeon = Dungeon::generate(&config).unwrap();
        check_invariants(&dungeon, &config)?;
    }

    #[test]
    fn unwrapped_dungeons_hold_invariants(config in unwrapped_config()) {
        let dungeon = Dungeon::generate(&config).unwrap();
        check_invariants(&dungeon, &config)?;
    }

    #[test]
    fn distance_is_symmetric(config in wrapped_config(), a in 0_usize..25, b in 0_usize..25) {
        let dungeon = Dungeon::generate(&config).unwrap();
        let a = Location::new(a / 5, a % 5);
        let b = Location::new(b / 5, b % 5);
        prop_assert_eq!(dungeon.distance(a, b).unwrap(), dungeon.distance(b, a).unwrap());
    }

    #[test]
    fn passages_are_mutual(config in unwrapped_config()) {
        let dungeon = Dungeon::generate(&config).unwrap();
        for cell in dungeon.cells() {
            for (direction, neighbour) in cell.exits() {
                let back = dungeon.cell(neighbour).unwrap().exit(direction.opposite());
                prop_assert_eq!(back, Some(cell.location()));
            }
        }
    }
}
