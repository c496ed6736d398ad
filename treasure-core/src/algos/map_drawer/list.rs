use super::{DrawConfig, MapDrawer};
use crate::types::Grid;

/// Renders the grid as `"<Label>: <description>"` lines in row-major order.
pub(crate) struct ListDrawer;

impl MapDrawer for ListDrawer {
    type Output = String;

    fn draw(&self, grid: &Grid, _: &DrawConfig) -> String {
        grid.entries()
            .map(|(cell, description)| format!("{}: {}", cell.label(), description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
