use super::MapBuilder;
use crate::{
    constants::{MAX_COINS, MIN_COINS},
    types::{Cell, Chest},
};

use rand::{Rng, seq::SliceRandom};

impl MapBuilder<'_> {
    /// Shuffles `cells` and turns the first `count` of them into chests.
    /// Returns the chests and the cells left over, in shuffled order.
    pub(super) fn place_chests<R: Rng + ?Sized>(
        mut cells: Vec<Cell>,
        count: usize,
        rng: &mut R,
    ) -> (Vec<Chest>, Vec<Cell>) {
        cells.shuffle(rng);

        let remaining = cells.split_off(count.min(cells.len()));

        let chests = cells
            .into_iter()
            .map(|cell| Chest::new(cell, rng.random_range(MIN_COINS..=MAX_COINS)))
            .collect();

        (chests, remaining)
    }
}
