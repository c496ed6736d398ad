use crate::{
    constants::{CELL_SIZE, LABEL_FONT_SIZE},
    types::Grid,
};

mod list;
mod svg_grid;

pub(crate) use list::ListDrawer;
pub(crate) use svg_grid::SvgGridDrawer;

#[derive(Debug, Clone, Copy)]
pub(crate) struct DrawConfig {
    pub(crate) cell_size: u32,
    pub(crate) font_size: u32,
}

impl Default for DrawConfig {
    fn default() -> Self {
        DrawConfig {
            cell_size: CELL_SIZE,
            font_size: LABEL_FONT_SIZE,
        }
    }
}

pub(crate) trait MapDrawer {
    type Output;

    fn draw(&self, grid: &Grid, config: &DrawConfig) -> Self::Output;
}
