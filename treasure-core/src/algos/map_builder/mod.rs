use crate::{
    descriptions::Descriptions,
    types::{Assignment, Cell, ChestLayout, Shortfall, TreasureMap},
};

use rand::Rng;
use tracing::event;

mod builder_config;
mod fill_cells;
mod place_chests;
mod place_hints;

pub use builder_config::{MapBuilderConfig, MapRequest};
pub use place_hints::hint_content;

pub(crate) struct MapBuilder<'a> {
    config: &'a MapBuilderConfig,
    descriptions: &'a Descriptions,
}

impl<'a> MapBuilder<'a> {
    pub fn new(config: &'a MapBuilderConfig, descriptions: &'a Descriptions) -> Self {
        MapBuilder {
            config,
            descriptions,
        }
    }

    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> TreasureMap {
        let build_start = std::time::Instant::now();

        let (rows, cols) = (self.config.rows, self.config.cols);

        let (chests, free_cells) = Self::place_chests(self.all_cells(), self.config.chests, rng);

        let chests_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Placed {} chests in {:.2}ms",
            chests.len(),
            chests_time.duration_since(build_start).as_millis()
        );

        let layout = ChestLayout::new(rows, cols, chests.iter().map(|chest| chest.cell));
        let (hints, free_cells) = Self::place_hints(free_cells, &layout, self.config.hints, rng);

        let hints_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Placed {} hints in {:.2}ms",
            hints.len(),
            hints_time.duration_since(chests_time).as_millis()
        );

        let filled = self.fill_cells(free_cells, rng);

        let shortfall = Shortfall {
            chests: self.config.chests - chests.len(),
            hints: self.config.hints - hints.len(),
            search_again: self.config.search_again - filled.search_again.len(),
            novelty: self
                .config
                .novelty
                .map_or(0, |count| count - filled.novelty.len()),
        };

        if !shortfall.is_empty() {
            event!(
                tracing::Level::DEBUG,
                "Board of {} cells too small, skipped {}",
                self.config.cell_count(),
                shortfall
            );
        }

        let mut assignments = vec![None; self.config.cell_count()];
        let index = |cell: &Cell| cell.row as usize * cols as usize + cell.col as usize;

        for chest in chests.iter() {
            assignments[index(&chest.cell)] = Some(Assignment::Chest(chest.coins));
        }
        for hint in hints.iter() {
            assignments[index(&hint.cell)] = Some(Assignment::Hint(hint.content.clone()));
        }
        for cell in filled.search_again.iter() {
            assignments[index(cell)] = Some(Assignment::SearchAgain);
        }
        for (cell, phrase) in filled.novelty.iter() {
            assignments[index(cell)] = Some(Assignment::Novelty(*phrase));
        }
        for (cell, text) in filled.fillers.iter() {
            assignments[index(cell)] = Some(Assignment::Filler(text.clone()));
        }

        let assignments = assignments.into_iter().flatten().collect::<Vec<_>>();
        debug_assert_eq!(assignments.len(), self.config.cell_count());

        event!(
            tracing::Level::DEBUG,
            "Built {}x{} map with {} chests, {} hints, {} search again and {} novelty cells in {:.2}ms total",
            rows,
            cols,
            chests.len(),
            hints.len(),
            filled.search_again.len(),
            filled.novelty.len(),
            build_start.elapsed().as_millis()
        );

        TreasureMap {
            rows,
            cols,
            chests,
            hints,
            search_again: filled.search_again,
            novelty: filled.novelty.into_iter().map(|(cell, _)| cell).collect(),
            fillers: filled.fillers.into_iter().map(|(cell, _)| cell).collect(),
            assignments,
            shortfall,
        }
    }

    fn all_cells(&self) -> Vec<Cell> {
        let cols = self.config.cols;
        (0..self.config.rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::new(row, col)))
            .collect()
    }
}
