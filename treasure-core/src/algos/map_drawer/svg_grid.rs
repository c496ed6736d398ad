use super::{DrawConfig, MapDrawer};
use crate::{
    constants::{CELL_FILL, GRID_STROKE, HEADER_FILL, STROKE_WIDTH},
    types::{Cell, Grid, column_label},
};

use svg::{
    Document,
    node::element::{Group, Rectangle, Text, Title},
};

/// Draws the labelled grid view. Column headers use spreadsheet letters, row
/// headers 1-based numbers, and every body cell carries its description in a
/// `<title>` so viewers reveal it on hover.
pub(crate) struct SvgGridDrawer;

impl MapDrawer for SvgGridDrawer {
    type Output = Document;

    fn draw(&self, grid: &Grid, config: &DrawConfig) -> Document {
        let width = (grid.cols() + 1) * config.cell_size;
        let height = (grid.rows() + 1) * config.cell_size;

        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height));

        // The top-left corner stays empty.
        for col in 0..grid.cols() {
            let header = Self::draw_header(col + 1, 0, column_label(col), config);
            document = document.add(header);
        }

        for row in 0..grid.rows() {
            let header = Self::draw_header(0, row + 1, (row + 1).to_string(), config);
            document = document.add(header);
        }

        for (cell, description) in grid.entries() {
            document = document.add(Self::draw_cell(cell, description, config));
        }

        document
    }
}

impl SvgGridDrawer {
    fn draw_box(col: u32, row: u32, fill: &str, config: &DrawConfig) -> Rectangle {
        Rectangle::new()
            .set("x", col * config.cell_size)
            .set("y", row * config.cell_size)
            .set("width", config.cell_size)
            .set("height", config.cell_size)
            .set("fill", fill)
            .set("stroke", GRID_STROKE)
            .set("stroke-width", STROKE_WIDTH)
    }

    fn draw_label(col: u32, row: u32, label: String, config: &DrawConfig) -> Text {
        Text::new(label)
            .set("x", col * config.cell_size + config.cell_size / 2)
            .set("y", row * config.cell_size + config.cell_size / 2)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", "sans-serif")
            .set("font-size", config.font_size)
    }

    fn draw_header(col: u32, row: u32, label: String, config: &DrawConfig) -> Group {
        Group::new()
            .set("class", "grid-header")
            .add(Self::draw_box(col, row, HEADER_FILL, config))
            .add(Self::draw_label(col, row, label, config))
    }

    fn draw_cell(cell: Cell, description: &str, config: &DrawConfig) -> Group {
        // Grid cells are offset by the header row and column.
        let (col, row) = (cell.col + 1, cell.row + 1);

        Group::new()
            .set("class", "grid-cell")
            .add(Title::new(description))
            .add(Self::draw_box(col, row, CELL_FILL, config))
            .add(Self::draw_label(col, row, cell.label(), config))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        algos::{MapBuilder, MapBuilderConfig},
        descriptions::Descriptions,
    };

    use rand::{SeedableRng, rngs::StdRng};

    fn draw(rows: u32, cols: u32) -> String {
        let config = MapBuilderConfig::new(rows, cols, 0, 0, 0).unwrap();
        let descriptions = Descriptions::fallback();
        let mut rng = StdRng::seed_from_u64(0);
        let grid = MapBuilder::new(&config, &descriptions)
            .build(&mut rng)
            .grid();

        SvgGridDrawer
            .draw(&grid, &DrawConfig::default())
            .to_string()
    }

    #[test]
    fn test_grid_has_tooltip_per_cell() {
        let svg = draw(3, 4);

        assert_eq!(svg.matches("<title").count(), 12);
        assert_eq!(svg.matches("Nothing here.").count(), 12);
        assert_eq!(svg.matches("class=\"grid-cell\"").count(), 12);
        assert_eq!(svg.matches("class=\"grid-header\"").count(), 7);
    }

    #[test]
    fn test_grid_labels() {
        let svg = draw(2, 27);

        assert!(svg.contains("AA1"), "Column 27 should be labelled AA");
        assert!(svg.contains("AA2"), "Last cell should be labelled AA2");
        assert!(!svg.contains("AB1"), "There are only 27 columns");
        assert!(svg.contains("width=\"1344\""));
        assert!(svg.contains("height=\"144\""));
    }
}
