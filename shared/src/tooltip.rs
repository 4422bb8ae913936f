use crate::colors::Rgb;
use crate::scene::Tile;

pub const FADE_IN_MS: u32 = 200;
pub const FADE_OUT_MS: u32 = 500;
pub const VISIBLE_OPACITY: f64 = 0.9;
/// Tooltip position relative to the pointer's page coordinates.
pub const OFFSET_X: f64 = 10.0;
pub const OFFSET_Y: f64 = -28.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub name: String,
    pub category: String,
    pub value: f64,
    pub value_text: String,
    /// Fill of the hovered tile, used as the tooltip accent.
    pub fill: Rgb,
}

impl TooltipContent {
    pub fn from_tile(tile: &Tile) -> Self {
        Self {
            name: tile.name.clone(),
            category: tile.category.clone(),
            value: tile.value,
            value_text: tile.value_text.clone(),
            fill: tile.fill,
        }
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("Name: {}", self.name),
            format!("Category: {}", self.category),
            format!("Value: {}", self.value_text),
        ]
    }
}

/// Hover tooltip. Hiding keeps the last content so the fade-out still shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub content: Option<TooltipContent>,
    pub left: f64,
    pub top: f64,
    pub opacity: f64,
    /// Duration of the transition towards `opacity`.
    pub transition_ms: u32,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            content: None,
            left: 0.0,
            top: 0.0,
            opacity: 0.0,
            transition_ms: 0,
        }
    }
}

impl TooltipState {
    pub fn show(&mut self, tile: &Tile, page_x: f64, page_y: f64) {
        self.content = Some(TooltipContent::from_tile(tile));
        self.follow(page_x, page_y);
        self.opacity = VISIBLE_OPACITY;
        self.transition_ms = FADE_IN_MS;
    }

    /// Move with the pointer without restarting the fade.
    pub fn follow(&mut self, page_x: f64, page_y: f64) {
        self.left = page_x + OFFSET_X;
        self.top = page_y + OFFSET_Y;
    }

    pub fn hide(&mut self) {
        self.opacity = 0.0;
        self.transition_ms = FADE_OUT_MS;
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.content.is_some()
    }

    /// Mirrors the hovered tile's `data-value` for inspection.
    pub fn data_value(&self) -> Option<String> {
        self.content.as_ref().map(|c| c.value_text.clone())
    }
}
