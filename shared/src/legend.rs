use crate::config::ChartConfig;

/// Grid placement for legend entries.
///
/// The row count is fixed by configuration; the column count is derived by
/// spreading the categories across those rows. Entries fill row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendLayout {
    pub rows: usize,
    pub columns: usize,
    pub column_width: f64,
    pub row_height: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl LegendLayout {
    pub fn new(count: usize, config: &ChartConfig) -> Self {
        let rows = config.legend_rows.max(1);
        let columns = count.div_ceil(rows);
        let column_width = if columns == 0 {
            0.0
        } else {
            config.width / columns as f64
        };
        Self {
            rows,
            columns,
            column_width,
            row_height: config.legend_row_height,
            origin_x: 0.0,
            origin_y: config.height + config.legend_gap,
        }
    }

    /// Top-left corner of entry `index`.
    pub fn position(&self, index: usize) -> (f64, f64) {
        if self.columns == 0 {
            return (self.origin_x, self.origin_y);
        }
        let col = index % self.columns;
        let row = index / self.columns;
        (
            self.origin_x + col as f64 * self.column_width,
            self.origin_y + row as f64 * self.row_height,
        )
    }

    /// Rows actually occupied by `count` entries.
    pub fn used_rows(&self, count: usize) -> usize {
        if self.columns == 0 {
            0
        } else {
            count.div_ceil(self.columns)
        }
    }

    /// Vertical space the legend band needs below the treemap, gap included.
    pub fn band_height(&self, count: usize, config: &ChartConfig) -> f64 {
        let rows = self.used_rows(count);
        if rows == 0 {
            0.0
        } else {
            config.legend_gap + rows as f64 * self.row_height
        }
    }
}
