mod algos;
mod constants;
mod descriptions;
mod errors;
mod types;

use algos::MapDrawer;

use rand::Rng;
use tracing::{Level, span};

pub use algos::{MapBuilderConfig, MapRequest, hint_content};
pub use constants::{
    FALLBACK_DESCRIPTION, MAX_CELLS, NOVELTY_FILLERS, PLACEHOLDER_FILLER, SEARCH_AGAIN_TEXT,
};
pub use descriptions::{
    DescriptionSource, Descriptions, JsonFileSource, load_or_fallback, parse_descriptions,
};
pub use errors::{ConfigurationError, DescriptionsError};
pub use types::{
    Assignment, Category, Cell, Chest, ChestLayout, Direction, Grid, Hint, HintMode, Shortfall,
    TreasureMap, column_label,
};

/// Generates a fresh treasure map using the thread-local random generator.
pub fn create_map(config: &MapBuilderConfig, descriptions: &Descriptions) -> TreasureMap {
    let mut rng = algos::RngHandler::rng();

    generate_map(config, descriptions, &mut rng)
}

/// Same as [create_map], drawing randomness from `rng`.
pub fn generate_map<R: Rng + ?Sized>(
    config: &MapBuilderConfig,
    descriptions: &Descriptions,
    rng: &mut R,
) -> TreasureMap {
    let span = span!(Level::DEBUG, "generate_map");
    let _guard = span.enter();

    algos::MapBuilder::new(config, descriptions).build(rng)
}

/// Labelled grid view with hover tooltips.
pub fn draw_grid(grid: &Grid) -> svg::Document {
    algos::SvgGridDrawer.draw(grid, &algos::DrawConfig::default())
}

/// Newline-joined `"<Label>: <description>"` list in row-major order.
pub fn draw_list(grid: &Grid) -> String {
    algos::ListDrawer.draw(grid, &algos::DrawConfig::default())
}

#[cfg(test)]
mod test {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_single_chest_scenario() {
        let config = MapBuilderConfig::new(3, 3, 1, 0, 0).unwrap();
        let descriptions = Descriptions::new(vec!["Sand.".to_string()]).unwrap();

        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = generate_map(&config, &descriptions, &mut rng).grid();

            let texts = grid.entries().map(|(_, text)| text).collect::<Vec<_>>();
            let chests = texts
                .iter()
                .filter(|text| text.starts_with("Treasure chest ("))
                .collect::<Vec<_>>();

            assert_eq!(texts.len(), 9);
            assert_eq!(chests.len(), 1);
            assert!(
                ["(1 coin)", "(2 coins)", "(3 coins)"]
                    .iter()
                    .any(|coins| chests[0].ends_with(coins))
            );
            assert_eq!(texts.iter().filter(|text| **text == "Sand.").count(), 8);
        }
    }

    #[test]
    fn test_over_allocated_chests_fill_the_board() {
        let config = MapBuilderConfig::new(3, 3, 9 + 5, 0, 0).unwrap();

        let map = create_map(&config, &Descriptions::fallback());

        assert_eq!(map.chests().len(), 9);
        assert!(map.hints().is_empty());
        assert!(map.search_again().is_empty());
        assert!(map.fillers().is_empty());
        assert_eq!(map.shortfall().chests, 5);
        assert!(
            map.grid()
                .entries()
                .all(|(_, text)| text.starts_with("Treasure chest"))
        );
    }

    #[test]
    fn test_every_cell_has_a_description() {
        let request = MapRequest {
            rows: 7,
            cols: 30,
            chests: 20,
            hints: 25,
            search_again: 10,
            novelty: Some(12),
        };
        let config = MapBuilderConfig::try_from(request).unwrap();

        let grid = create_map(&config, &Descriptions::fallback()).grid();

        assert_eq!(grid.rows(), 7);
        assert_eq!(grid.cols(), 30);
        assert_eq!(grid.entries().count(), 210);
        assert!(grid.entries().all(|(_, text)| !text.is_empty()));
        assert_eq!(grid.to_rows().len(), 7);
        assert_eq!(grid.get(6, 29).map(str::is_empty), Some(false));
        assert_eq!(grid.get(7, 0), None);

        let list = draw_list(&grid);
        assert_eq!(list.lines().count(), 210);
        assert!(list.starts_with("A1: "));
        assert!(list.lines().last().unwrap().starts_with("AD7: "));

        let svg = draw_grid(&grid).to_string();
        assert_eq!(svg.matches("<title").count(), 210);
    }
}
