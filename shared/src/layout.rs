use crate::hierarchy::{Hierarchy, NodeId};

/// Target aspect ratio for squarified rows: the golden ratio.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl LayoutRect {
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// True when the interiors of the two rectangles intersect.
    pub fn overlaps(&self, other: &LayoutRect) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    /// Shrink by `p` on every side, collapsing to the midpoint instead of inverting.
    fn inset(self, p: f64) -> Self {
        let (mut x0, mut y0, mut x1, mut y1) = (self.x0 + p, self.y0 + p, self.x1 - p, self.y1 - p);
        if x1 < x0 {
            x0 = (x0 + x1) / 2.0;
            x1 = x0;
        }
        if y1 < y0 {
            y0 = (y0 + y1) / 2.0;
            y1 = y0;
        }
        Self { x0, y0, x1, y1 }
    }
}

/// Squarified treemap over `hierarchy` inside `area`.
///
/// `padding` is applied both between siblings and between a parent's edge and
/// its children, so adjacent leaves are separated by exactly `padding` pixels.
/// Returns one rectangle per node, indexed by `NodeId`.
pub fn treemap(hierarchy: &Hierarchy, area: LayoutRect, padding: f64) -> Vec<LayoutRect> {
    let mut rects = vec![LayoutRect::default(); hierarchy.len()];
    if hierarchy.is_empty() {
        return rects;
    }
    rects[Hierarchy::ROOT] = area;

    let half = padding / 2.0;
    for id in hierarchy.pre_order() {
        let node = hierarchy.node(id);
        // The root keeps its full area; everything below gives up half the
        // inner padding on each side.
        let own_padding = if node.depth == 0 { 0.0 } else { half };
        let rect = rects[id].inset(own_padding);
        rects[id] = rect;

        if node.is_leaf() {
            continue;
        }
        let inner = rect.inset(padding - half);
        squarify(hierarchy, &node.children, node.value, inner, &mut rects);
    }
    rects
}

/// Partition `area` among `children` in rows, growing each row while the
/// worst aspect ratio keeps improving. `children` must be sorted by
/// descending value.
fn squarify(
    hierarchy: &Hierarchy,
    children: &[NodeId],
    total: f64,
    area: LayoutRect,
    rects: &mut [LayoutRect],
) {
    let value_of = |i: usize| hierarchy.node(children[i]).value;
    let n = children.len();
    let (mut x0, mut y0, x1, y1) = (area.x0, area.y0, area.x1, area.y1);
    let mut remaining = total;
    let mut i0 = 0usize;
    let mut i1 = 0usize;

    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // First non-empty node opens the row; leading zeros ride along.
        let mut sum;
        loop {
            sum = value_of(i1);
            i1 += 1;
            if sum != 0.0 || i1 >= n {
                break;
            }
        }
        let mut min_value = sum;
        let mut max_value = sum;
        let alpha = (dy / dx).max(dx / dy) / (remaining * GOLDEN_RATIO);
        let mut beta = sum * sum * alpha;
        let mut min_ratio = (max_value / beta).max(beta / min_value);

        while i1 < n {
            let v = value_of(i1);
            sum += v;
            min_value = min_value.min(v);
            max_value = max_value.max(v);
            beta = sum * sum * alpha;
            let ratio = (max_value / beta).max(beta / min_value);
            if ratio > min_ratio {
                sum -= v;
                break;
            }
            min_ratio = ratio;
            i1 += 1;
        }

        let row = &children[i0..i1];
        if dx < dy {
            let row_y1 = if remaining != 0.0 {
                y0 + dy * sum / remaining
            } else {
                y1
            };
            dice(hierarchy, row, sum, LayoutRect::new(x0, y0, x1, row_y1), rects);
            if remaining != 0.0 {
                y0 = row_y1;
            }
        } else {
            let row_x1 = if remaining != 0.0 {
                x0 + dx * sum / remaining
            } else {
                x1
            };
            slice(hierarchy, row, sum, LayoutRect::new(x0, y0, row_x1, y1), rects);
            if remaining != 0.0 {
                x0 = row_x1;
            }
        }
        remaining -= sum;
        i0 = i1;
    }
}

/// Lay a row out left to right across `area`.
fn dice(hierarchy: &Hierarchy, row: &[NodeId], row_value: f64, area: LayoutRect, rects: &mut [LayoutRect]) {
    let k = if row_value != 0.0 {
        area.width() / row_value
    } else {
        0.0
    };
    let mut x = area.x0;
    for &id in row {
        let w = hierarchy.node(id).value * k;
        rects[id] = LayoutRect::new(x, area.y0, x + w, area.y1);
        x += w;
    }
}

/// Lay a row out top to bottom down `area`.
fn slice(hierarchy: &Hierarchy, row: &[NodeId], row_value: f64, area: LayoutRect, rects: &mut [LayoutRect]) {
    let k = if row_value != 0.0 {
        area.height() / row_value
    } else {
        0.0
    };
    let mut y = area.y0;
    for &id in row {
        let h = hierarchy.node(id).value * k;
        rects[id] = LayoutRect::new(area.x0, y, area.x1, y + h);
        y += h;
    }
}
