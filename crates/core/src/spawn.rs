//! Spawn policy - where new tiles appear and what they are worth
//!
//! A new tile lands on a uniformly chosen empty cell and is a 2 nine times out
//! of ten, a 4 otherwise. All randomness comes from the caller's [`Rng`], so a
//! seeded generator replays the same game.

use rand::Rng;

use crate::types::{Pos, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE, SPAWN_TWO_PROBABILITY};

/// Pick one of `empty` uniformly at random. `None` if there is nothing to pick.
pub fn choose_cell<R: Rng + ?Sized>(empty: &[Pos], rng: &mut R) -> Option<Pos> {
    if empty.is_empty() {
        return None;
    }
    Some(empty[rng.gen_range(0..empty.len())])
}

/// Draw the value of a freshly spawned tile.
pub fn spawn_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_bool(SPAWN_TWO_PROBABILITY) {
        SPAWN_LOW_VALUE
    } else {
        SPAWN_HIGH_VALUE
    }
}
