use super::MapBuilder;
use crate::{
    constants::{NOVELTY_FILLERS, PLACEHOLDER_FILLER},
    types::Cell,
};

use rand::{Rng, seq::SliceRandom};

pub(super) struct FilledCells {
    pub search_again: Vec<Cell>,
    pub novelty: Vec<(Cell, &'static str)>,
    pub fillers: Vec<(Cell, String)>,
}

impl MapBuilder<'_> {
    /// Shuffles the unclaimed `cells` and slices them into search again,
    /// novelty and generic filler cells, in that order.
    pub(super) fn fill_cells<R: Rng + ?Sized>(
        &self,
        mut cells: Vec<Cell>,
        rng: &mut R,
    ) -> FilledCells {
        cells.shuffle(rng);

        let mut remaining = cells.into_iter();

        let search_again = remaining
            .by_ref()
            .take(self.config.search_again)
            .collect::<Vec<_>>();

        // Phrases cycle by slice index, not by draw.
        let novelty = match self.config.novelty {
            Some(count) => remaining
                .by_ref()
                .take(count)
                .enumerate()
                .map(|(i, cell)| (cell, NOVELTY_FILLERS[i % NOVELTY_FILLERS.len()]))
                .collect(),
            None => Vec::new(),
        };

        let fillers = remaining
            .map(|cell| (cell, self.filler_text(rng)))
            .collect();

        FilledCells {
            search_again,
            novelty,
            fillers,
        }
    }

    fn filler_text<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        if self.config.novelty.is_some() {
            PLACEHOLDER_FILLER.to_string()
        } else {
            self.descriptions.choose(rng).to_string()
        }
    }
}
