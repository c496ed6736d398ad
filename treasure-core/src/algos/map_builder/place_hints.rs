use super::MapBuilder;
use crate::{
    constants::{DIRECTIONAL_HINT_PROB, DIRECTIONS},
    types::{Cell, ChestLayout, Hint, HintMode},
};

use rand::{Rng, seq::SliceRandom};

/// Text of a hint at `cell` for the given chest layout. Pure: the same layout,
/// cell and mode always produce the same content.
pub fn hint_content(layout: &ChestLayout, cell: Cell, mode: HintMode) -> String {
    match mode {
        HintMode::Directional(direction) => {
            if layout.count_towards(cell, direction) > 0 {
                format!("There is at least one treasure to the {}.", direction)
            } else {
                format!("There are no chests to the {}.", direction)
            }
        }
        HintMode::Neighbourhood => match layout.count_neighbours(cell) {
            0 => "There are no chests in the neighborhood of this field.".to_string(),
            1 => "There is exactly one chest nearby.".to_string(),
            count => format!("There are {} chests in the neighborhood.", count),
        },
    }
}

impl MapBuilder<'_> {
    /// Shuffles the non-chest `cells` and places up to `count` hints on them.
    pub(super) fn place_hints<R: Rng + ?Sized>(
        mut cells: Vec<Cell>,
        layout: &ChestLayout,
        count: usize,
        rng: &mut R,
    ) -> (Vec<Hint>, Vec<Cell>) {
        cells.shuffle(rng);

        let remaining = cells.split_off(count.min(cells.len()));

        let hints = cells
            .into_iter()
            .map(|cell| {
                let mode = Self::draw_hint_mode(rng);
                Hint::new(cell, mode, hint_content(layout, cell, mode))
            })
            .collect();

        (hints, remaining)
    }

    fn draw_hint_mode<R: Rng + ?Sized>(rng: &mut R) -> HintMode {
        let direction = DIRECTIONS[rng.random_range(0..DIRECTIONS.len())];

        if rng.random_bool(DIRECTIONAL_HINT_PROB) {
            HintMode::Directional(direction)
        } else {
            HintMode::Neighbourhood
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::Direction;

    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_directional_hint_finds_chest_to_the_north() {
        /*
           +---+---+---+
           |   | C |   |
           +---+---+---+
           |   | H |   |
           +---+---+---+
           |   |   |   |
           +---+---+---+
        */
        let layout = ChestLayout::new(3, 3, [Cell::new(0, 1)]);
        let hint_cell = Cell::new(1, 1);

        assert_eq!(
            hint_content(&layout, hint_cell, HintMode::Directional(Direction::North)),
            "There is at least one treasure to the north."
        );
        assert_eq!(
            hint_content(&layout, hint_cell, HintMode::Directional(Direction::South)),
            "There are no chests to the south."
        );
        assert_eq!(
            hint_content(&layout, hint_cell, HintMode::Directional(Direction::West)),
            "There are no chests to the west."
        );
    }

    #[test]
    fn test_directional_hint_scans_to_the_edge() {
        let layout = ChestLayout::new(1, 6, [Cell::new(0, 5)]);

        assert_eq!(
            hint_content(&layout, Cell::new(0, 0), HintMode::Directional(Direction::East)),
            "There is at least one treasure to the east."
        );
        assert_eq!(
            hint_content(&layout, Cell::new(0, 5), HintMode::Directional(Direction::East)),
            "There are no chests to the east."
        );
    }

    #[test]
    fn test_neighbourhood_hints() {
        let hint_cell = Cell::new(1, 1);

        let empty = ChestLayout::new(4, 4, [Cell::new(3, 3)]);
        assert_eq!(
            hint_content(&empty, hint_cell, HintMode::Neighbourhood),
            "There are no chests in the neighborhood of this field."
        );

        let single = ChestLayout::new(4, 4, [Cell::new(2, 2), Cell::new(3, 3)]);
        assert_eq!(
            hint_content(&single, hint_cell, HintMode::Neighbourhood),
            "There is exactly one chest nearby."
        );

        let many = ChestLayout::new(4, 4, [Cell::new(0, 0), Cell::new(0, 2), Cell::new(2, 1)]);
        assert_eq!(
            hint_content(&many, hint_cell, HintMode::Neighbourhood),
            "There are 3 chests in the neighborhood."
        );
    }

    #[test]
    fn test_hint_content_is_pure() {
        let layout = ChestLayout::new(5, 5, [Cell::new(0, 4), Cell::new(4, 0)]);

        for mode in [
            HintMode::Neighbourhood,
            HintMode::Directional(Direction::North),
            HintMode::Directional(Direction::East),
        ] {
            let first = hint_content(&layout, Cell::new(2, 2), mode);
            let second = hint_content(&layout.clone(), Cell::new(2, 2), mode);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_place_hints_caps_at_available_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let layout = ChestLayout::new(2, 2, [Cell::new(0, 0)]);
        let free = vec![Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)];

        let (hints, remaining) = MapBuilder::place_hints(free, &layout, 10, &mut rng);

        assert_eq!(hints.len(), 3);
        assert!(remaining.is_empty());
        assert!(hints.iter().all(|hint| !hint.content.is_empty()));
    }
}
