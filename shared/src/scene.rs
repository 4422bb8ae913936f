use crate::cell::DatasetCell;
use crate::colors::{CategorySet, ColorScale, Rgb, default_palette};
use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::hierarchy::Hierarchy;
use crate::labels::wrap_label;
use crate::layout::{LayoutRect, treemap};
use crate::legend::LegendLayout;

/// Centered text drawn inside the canvas' title band.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub id: &'static str,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// One rendered leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub name: String,
    pub category: String,
    pub value: f64,
    /// Source text of `value`, shown in `data-value` and the tooltip.
    pub value_text: String,
    pub rect: LayoutRect,
    pub fill: Rgb,
    pub label_color: Rgb,
    pub label: Vec<String>,
}

impl Tile {
    /// Label lines with their baseline positions, dropping lines that would
    /// spill past the bottom of the tile.
    pub fn label_lines(&self, config: &ChartConfig) -> Vec<(f64, f64, &str)> {
        let (inset_x, inset_y) = config.label_inset;
        let x = self.rect.x0 + inset_x;
        self.label
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let y = self.rect.y0 + inset_y + i as f64 * config.label_line_height;
                (x, y, line.as_str())
            })
            .take_while(|&(_, y, _)| y <= self.rect.y1)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub category: String,
    pub fill: Rgb,
    pub x: f64,
    pub y: f64,
    pub swatch_size: f64,
}

/// Everything a rendering backend needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub title: Caption,
    pub description: Caption,
    pub tiles: Vec<Tile>,
    pub legend: Vec<LegendEntry>,
}

impl Scene {
    /// Scene with chrome only: no tiles, no legend.
    pub fn empty(config: &ChartConfig) -> Self {
        let center = config.width / 2.0;
        let title_y = config.title_margin / 2.0;
        Self {
            width: config.width,
            height: config.height,
            title: Caption {
                id: "title",
                text: config.title.clone(),
                x: center,
                y: title_y,
            },
            description: Caption {
                id: "description",
                text: config.description.clone(),
                x: center,
                y: title_y + 20.0,
            },
            tiles: Vec::new(),
            legend: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Index of the tile under a canvas-space point.
    pub fn tile_at(&self, x: f64, y: f64) -> Option<usize> {
        self.tiles.iter().position(|t| t.rect.contains(x, y))
    }
}

/// Build the full scene for `dataset`. Pure: equal inputs give equal scenes.
pub fn build_scene(dataset: &Dataset, config: &ChartConfig) -> Scene {
    let mut scene = Scene::empty(config);

    let hierarchy = Hierarchy::from_dataset(dataset);
    let rects = treemap(&hierarchy, config.layout_area(), config.tile_padding);
    let categories = CategorySet::from_hierarchy(&hierarchy);
    let scale = ColorScale::new(&categories, &default_palette());

    for id in hierarchy.leaves() {
        let node = hierarchy.node(id);
        let Some(leaf) = node.leaf.as_ref() else {
            continue;
        };
        let fill = scale.color(&leaf.category).unwrap_or(Rgb::WHITE);
        scene.tiles.push(Tile {
            name: leaf.name.clone(),
            category: leaf.category.clone(),
            value: leaf.value,
            value_text: leaf.value_text.clone(),
            rect: rects[id],
            fill,
            label_color: fill.label_color(),
            label: wrap_label(&leaf.name),
        });
    }

    let legend = LegendLayout::new(categories.len(), config);
    for (i, category) in categories.iter().enumerate() {
        let (x, y) = legend.position(i);
        scene.legend.push(LegendEntry {
            category: category.to_string(),
            fill: scale.color(category).unwrap_or(Rgb::WHITE),
            x,
            y,
            swatch_size: config.legend_swatch,
        });
    }
    scene.height = config.height + legend.band_height(categories.len(), config);

    tracing::debug!(
        tiles = scene.tiles.len(),
        categories = categories.len(),
        "treemap scene built"
    );
    scene
}

/// Scene for whatever the cell currently holds; empty until a dataset is published.
pub fn render_cell(cell: &DatasetCell, config: &ChartConfig) -> Scene {
    match cell.current() {
        Some(dataset) => build_scene(dataset, config),
        None => Scene::empty(config),
    }
}
