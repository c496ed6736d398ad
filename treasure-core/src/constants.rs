use crate::types::Direction;

pub(crate) const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

// Upper bound on rows * cols, keeps generation and drawing allocations small.
pub const MAX_CELLS: usize = 100_000;

pub(crate) const MIN_COINS: u8 = 1;
pub(crate) const MAX_COINS: u8 = 3;

// Chance of a hint scanning a compass direction instead of its neighbourhood.
pub(crate) const DIRECTIONAL_HINT_PROB: f64 = 0.5;

pub const FALLBACK_DESCRIPTION: &str = "Nothing here.";
pub const SEARCH_AGAIN_TEXT: &str = "Search again!";
pub const PLACEHOLDER_FILLER: &str = "Nothing to see here.";

pub const NOVELTY_FILLERS: [&str; 8] = [
    "A seagull stares at you judgmentally.",
    "You find a single sock. Just the one.",
    "A crab waves at you. You wave back.",
    "An old map of this exact spot. Helpful.",
    "Someone was here before you. They left a sandwich.",
    "The sand here is especially sandy.",
    "X marks the spot. Wrong X, unfortunately.",
    "A message in a bottle: \"Keep digging.\"",
];

// Drawing
pub(crate) const CELL_SIZE: u32 = 48;
pub(crate) const LABEL_FONT_SIZE: u32 = 14;
pub(crate) const HEADER_FILL: &str = "#c0edcf";
pub(crate) const CELL_FILL: &str = "#f4e7c5";
pub(crate) const GRID_STROKE: &str = "#6b5b3e";
pub(crate) const STROKE_WIDTH: u32 = 1;
