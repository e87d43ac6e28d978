//! # Monsters
//!
//! Monsters never move: each is bound to the cave it was placed in (its den)
//! and only loses health when hit. A monster at zero health is dead and no
//! longer reported by any dungeon query, even though its den still refers to it.

use crate::{config, Location};
use serde::{Deserialize, Serialize};

/// Index of a monster in the dungeon's monster registry.
pub type MonsterId = usize;

/// A monster denned in a cave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    den: Location,
    health: u8,
}

impl Monster {
    /// Creates a monster at full health in `den`.
    pub fn new(den: Location) -> Self {
        Self {
            den,
            health: config::MONSTER_STARTING_HEALTH,
        }
    }

    pub fn den(&self) -> Location {
        self.den
    }

    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Takes one point of damage; health never drops below zero.
    pub fn receive_damage(&mut self) {
        self.health = self.health.saturating_sub(1);
    }
}
