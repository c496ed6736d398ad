use crate::constants::SEARCH_AGAIN_TEXT;

use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Spreadsheet-style bijective base-26 label for a 0-indexed column:
/// `A..Z`, then `AA, AB, ..`.
pub fn column_label(col: u32) -> String {
    let mut label = String::new();
    let mut n = col as u64;
    loop {
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    label
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    pub const fn new(row: u32, col: u32) -> Self {
        Cell { row, col }
    }

    /// Display label, e.g. `B3` for row 2, column 1.
    pub fn label(&self) -> String {
        format!("{}{}", column_label(self.col), self.row + 1)
    }

    // Moves one step towards `direction`, returning None when the step
    // leaves a `rows` x `cols` board.
    pub fn step(&self, direction: Direction, rows: u32, cols: u32) -> Option<Cell> {
        let (d_row, d_col) = direction.offset();
        Self::checked_offset(self, d_row, d_col, rows, cols)
    }

    /// The up to 8 cells around this one, clipped at the board edges.
    pub fn neighbours(&self, rows: u32, cols: u32) -> impl Iterator<Item = Cell> + '_ {
        (-1_i64..=1)
            .flat_map(|d_row| (-1_i64..=1).map(move |d_col| (d_row, d_col)))
            .filter(|&offset| offset != (0, 0))
            .filter_map(move |(d_row, d_col)| self.checked_offset(d_row, d_col, rows, cols))
    }

    fn checked_offset(&self, d_row: i64, d_col: i64, rows: u32, cols: u32) -> Option<Cell> {
        let row = self.row as i64 + d_row;
        let col = self.col as i64 + d_col;

        if row < 0 || col < 0 || row >= rows as i64 || col >= cols as i64 {
            return None;
        }

        Some(Cell::new(row as u32, col as u32))
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Unit step as `(row, col)` deltas.
    pub fn offset(&self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chest {
    pub cell: Cell,
    pub coins: u8,
}

impl Chest {
    pub const fn new(cell: Cell, coins: u8) -> Self {
        Chest { cell, coins }
    }

    pub fn description(&self) -> String {
        chest_description(self.coins)
    }
}

fn chest_description(coins: u8) -> String {
    let plural = if coins > 1 { "s" } else { "" };
    format!("Treasure chest ({} coin{})", coins, plural)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintMode {
    Directional(Direction),
    Neighbourhood,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub cell: Cell,
    pub mode: HintMode,
    pub content: String,
}

impl Hint {
    pub fn new(cell: Cell, mode: HintMode, content: String) -> Self {
        Hint {
            cell,
            mode,
            content,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Chest,
    Hint,
    SearchAgain,
    Novelty,
    Filler,
}

/// What a single cell holds. Every cell of a [TreasureMap] has exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Chest(u8),
    Hint(String),
    SearchAgain,
    Novelty(&'static str),
    Filler(String),
}

impl Assignment {
    pub fn category(&self) -> Category {
        match self {
            Assignment::Chest(_) => Category::Chest,
            Assignment::Hint(_) => Category::Hint,
            Assignment::SearchAgain => Category::SearchAgain,
            Assignment::Novelty(_) => Category::Novelty,
            Assignment::Filler(_) => Category::Filler,
        }
    }

    pub fn description(&self) -> String {
        match self {
            Assignment::Chest(coins) => chest_description(*coins),
            Assignment::Hint(content) => content.clone(),
            Assignment::SearchAgain => SEARCH_AGAIN_TEXT.to_string(),
            Assignment::Novelty(phrase) => phrase.to_string(),
            Assignment::Filler(text) => text.clone(),
        }
    }
}

/// Row-major chest occupancy used to compute hint contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChestLayout {
    rows: u32,
    cols: u32,
    occupied: Vec<bool>,
}

impl ChestLayout {
    pub fn new(rows: u32, cols: u32, chests: impl IntoIterator<Item = Cell>) -> Self {
        let mut occupied = vec![false; rows as usize * cols as usize];

        for cell in chests {
            if cell.row < rows && cell.col < cols {
                occupied[cell.row as usize * cols as usize + cell.col as usize] = true;
            }
        }

        ChestLayout {
            rows,
            cols,
            occupied,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn has_chest(&self, cell: Cell) -> bool {
        cell.row < self.rows
            && cell.col < self.cols
            && self.occupied[cell.row as usize * self.cols as usize + cell.col as usize]
    }

    /// Chests on the straight line from `cell` (exclusive) to the board edge.
    pub fn count_towards(&self, cell: Cell, direction: Direction) -> usize {
        std::iter::successors(cell.step(direction, self.rows, self.cols), |current| {
            current.step(direction, self.rows, self.cols)
        })
        .filter(|&current| self.has_chest(current))
        .count()
    }

    /// Chests in the Moore neighbourhood of `cell`.
    pub fn count_neighbours(&self, cell: Cell) -> usize {
        cell.neighbours(self.rows, self.cols)
            .filter(|&neighbour| self.has_chest(neighbour))
            .count()
    }
}

/// Number of requested cells per category that did not fit on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    pub chests: usize,
    pub hints: usize,
    pub search_again: usize,
    pub novelty: usize,
}

impl Shortfall {
    pub fn total(&self) -> usize {
        self.chests + self.hints + self.search_again + self.novelty
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl Display for Shortfall {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} chest/s, {} hint/s, {} search again, {} novelty filler/s",
            self.chests, self.hints, self.search_again, self.novelty
        )
    }
}

/// A fully generated treasure map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreasureMap {
    pub(crate) rows: u32,
    pub(crate) cols: u32,
    pub(crate) chests: Vec<Chest>,
    pub(crate) hints: Vec<Hint>,
    pub(crate) search_again: Vec<Cell>,
    pub(crate) novelty: Vec<Cell>,
    pub(crate) fillers: Vec<Cell>,
    // Row-major, one entry per cell.
    pub(crate) assignments: Vec<Assignment>,
    pub(crate) shortfall: Shortfall,
}

impl TreasureMap {
    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn chests(&self) -> &[Chest] {
        &self.chests
    }

    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    pub fn search_again(&self) -> &[Cell] {
        &self.search_again
    }

    pub fn novelty(&self) -> &[Cell] {
        &self.novelty
    }

    pub fn fillers(&self) -> &[Cell] {
        &self.fillers
    }

    pub fn shortfall(&self) -> Shortfall {
        self.shortfall
    }

    pub fn assignment(&self, cell: Cell) -> Option<&Assignment> {
        if cell.row >= self.rows || cell.col >= self.cols {
            return None;
        }

        self.assignments
            .get(cell.row as usize * self.cols as usize + cell.col as usize)
    }

    /// Every cell with its assignment, in row-major order.
    pub fn iter_assignments(&self) -> impl Iterator<Item = (Cell, &Assignment)> {
        let cols = self.cols;
        self.assignments.iter().enumerate().map(move |(idx, assignment)| {
            let idx = idx as u64;
            let cell = Cell::new((idx / cols as u64) as u32, (idx % cols as u64) as u32);
            (cell, assignment)
        })
    }

    pub fn chest_layout(&self) -> ChestLayout {
        ChestLayout::new(
            self.rows,
            self.cols,
            self.chests.iter().map(|chest| chest.cell),
        )
    }

    pub fn grid(&self) -> Grid {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .assignments
                .iter()
                .map(Assignment::description)
                .collect(),
        }
    }
}

/// The `rows` x `cols` matrix of cell descriptions handed to the drawers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<String>,
}

impl Grid {
    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn get(&self, row: u32, col: u32) -> Option<&str> {
        if row >= self.rows || col >= self.cols {
            return None;
        }

        self.cells
            .get(row as usize * self.cols as usize + col as usize)
            .map(String::as_str)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[String]> {
        self.cells.chunks(self.cols.max(1) as usize)
    }

    /// Labelled entries in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (Cell, &str)> {
        self.iter_rows().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, text)| (Cell::new(row as u32, col as u32), text.as_str()))
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.iter_rows().map(<[String]>::to_vec).collect()
    }
}
