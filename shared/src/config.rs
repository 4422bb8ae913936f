use serde::{Deserialize, Serialize};

pub const DATASET_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/video-game-sales-data.json";

pub const DEFAULT_TITLE: &str = "Video Game Sales";
pub const DEFAULT_DESCRIPTION: &str = "Top 100 Most Sold Video Games Grouped by Platform";

/// Fixed geometry of the chart canvas. All values are CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Width of the treemap canvas.
    pub width: f64,
    /// Height of the treemap canvas, including the title margin.
    pub height: f64,
    /// Band at the top of the canvas reserved for title and description text.
    pub title_margin: f64,
    /// Gap enforced between adjacent tiles.
    pub tile_padding: f64,
    pub label_font_px: f64,
    pub label_line_height: f64,
    /// Offset of the first label baseline from the tile's top-left corner.
    pub label_inset: (f64, f64),
    /// Fixed row count of the legend grid.
    pub legend_rows: usize,
    /// Space between the bottom of the treemap and the first legend row.
    pub legend_gap: f64,
    pub legend_row_height: f64,
    pub legend_swatch: f64,
    pub title: String,
    pub description: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            title_margin: 60.0,
            tile_padding: 1.0,
            label_font_px: 10.0,
            label_line_height: 10.0,
            label_inset: (4.0, 12.0),
            legend_rows: 3,
            legend_gap: 20.0,
            legend_row_height: 26.0,
            legend_swatch: 18.0,
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl ChartConfig {
    /// Area available to the treemap: the canvas minus the title band.
    pub fn layout_area(&self) -> crate::layout::LayoutRect {
        crate::layout::LayoutRect {
            x0: 0.0,
            y0: self.title_margin,
            x1: self.width.max(0.0),
            y1: self.height.max(self.title_margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChartConfig;

    #[test]
    fn layout_area_excludes_title_margin() {
        let config = ChartConfig::default();
        let area = config.layout_area();
        assert_eq!(area.x0, 0.0);
        assert_eq!(area.y0, 60.0);
        assert_eq!(area.x1, 1000.0);
        assert_eq!(area.y1, 600.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"width": 1200, "height": 900}"#).unwrap();
        assert_eq!(config.width, 1200.0);
        assert_eq!(config.height, 900.0);
        assert_eq!(config.title_margin, 60.0);
        assert_eq!(config.legend_rows, 3);
    }
}
