use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::hierarchy::Hierarchy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// CSS hex notation, e.g. `#8dd3c7`.
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Text color that stays legible on top of this fill.
    pub fn label_color(&self) -> Rgb {
        let (_, _, l) = rgb_to_hsl(self.0, self.1, self.2);
        if l < 0.45 { Rgb::WHITE } else { Rgb::BLACK }
    }
}

/// ColorBrewer Set3, 12 pastel colors.
pub const SET3: [Rgb; 12] = [
    Rgb::from_hex(0x8dd3c7),
    Rgb::from_hex(0xffffb3),
    Rgb::from_hex(0xbebada),
    Rgb::from_hex(0xfb8072),
    Rgb::from_hex(0x80b1d3),
    Rgb::from_hex(0xfdb462),
    Rgb::from_hex(0xb3de69),
    Rgb::from_hex(0xfccde5),
    Rgb::from_hex(0xd9d9d9),
    Rgb::from_hex(0xbc80bd),
    Rgb::from_hex(0xccebc5),
    Rgb::from_hex(0xffed6f),
];

/// ColorBrewer Paired, 12 colors.
pub const PAIRED: [Rgb; 12] = [
    Rgb::from_hex(0xa6cee3),
    Rgb::from_hex(0x1f78b4),
    Rgb::from_hex(0xb2df8a),
    Rgb::from_hex(0x33a02c),
    Rgb::from_hex(0xfb9a99),
    Rgb::from_hex(0xe31a1c),
    Rgb::from_hex(0xfdbf6f),
    Rgb::from_hex(0xff7f00),
    Rgb::from_hex(0xcab2d6),
    Rgb::from_hex(0x6a3d9a),
    Rgb::from_hex(0xffff99),
    Rgb::from_hex(0xb15928),
];

/// Default ordinal palette: Set3 followed by Paired.
pub fn default_palette() -> Vec<Rgb> {
    SET3.iter().chain(PAIRED.iter()).copied().collect()
}

/// Distinct leaf categories in first-seen pre-order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategorySet {
    order: Vec<String>,
}

impl CategorySet {
    pub fn from_hierarchy(hierarchy: &Hierarchy) -> Self {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        for id in hierarchy.leaves() {
            let Some(leaf) = hierarchy.node(id).leaf.as_ref() else {
                continue;
            };
            if seen.insert(leaf.category.as_str()) {
                order.push(leaf.category.clone());
            }
        }
        Self { order }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.order.iter().position(|c| c == category)
    }
}

impl FromIterator<String> for CategorySet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = CategorySet::default();
        for category in iter {
            if !set.order.contains(&category) {
                set.order.push(category);
            }
        }
        set
    }
}

/// Category → color mapping. Domain index `i` takes `palette[i % len]`;
/// `is_exhausted` reports when that wraparound produced a collision.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    domain: CategorySet,
    palette: Vec<Rgb>,
}

impl ColorScale {
    pub fn new(categories: &CategorySet, palette: &[Rgb]) -> Self {
        let scale = Self {
            domain: categories.clone(),
            palette: palette.to_vec(),
        };
        if scale.is_exhausted() {
            tracing::warn!(
                categories = scale.domain.len(),
                palette = scale.palette.len(),
                "category count exceeds palette size, colors will repeat"
            );
        }
        scale
    }

    /// `None` for categories outside the domain or when the palette is empty.
    pub fn color(&self, category: &str) -> Option<Rgb> {
        let index = self.domain.index_of(category)?;
        let len = self.palette.len();
        (len > 0).then(|| self.palette[index % len])
    }

    pub fn is_exhausted(&self) -> bool {
        self.domain.len() > self.palette.len()
    }
}

/// Convert RGB to HSL. Returns (h: 0..360, s: 0..1, l: 0..1).
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f64::EPSILON {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s, l)
}
