use crate::foundation::error::{FramesheetError, FramesheetResult};

pub use kurbo::{Point, Rect, Vec2};

/// Grid layout of an animated sprite sheet.
///
/// Frames are 0-based and packed row-major starting from the top-left cell.
/// Trailing cells past `frames` are unused.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameGrid {
    /// Number of valid animation frames.
    pub frames: u32,
    /// Number of grid rows.
    pub rows: u32,
    /// Number of grid columns.
    pub cols: u32,
}

impl FrameGrid {
    /// Build a validated grid.
    pub fn new(frames: u32, rows: u32, cols: u32) -> FramesheetResult<Self> {
        if frames == 0 {
            return Err(FramesheetError::validation("FrameGrid frames must be >= 1"));
        }
        if rows == 0 || cols == 0 {
            return Err(FramesheetError::validation(
                "FrameGrid rows and cols must be >= 1",
            ));
        }
        if u64::from(rows) * u64::from(cols) < u64::from(frames) {
            return Err(FramesheetError::validation(
                "FrameGrid rows * cols must be >= frames",
            ));
        }
        Ok(Self { frames, rows, cols })
    }

    /// The 1x1 grid of a non-animated sheet.
    pub fn single() -> Self {
        Self {
            frames: 1,
            rows: 1,
            cols: 1,
        }
    }

    /// Whether the grid satisfies the constructor invariants.
    ///
    /// Grids built by literal can violate them; the sequencer checks here and
    /// degrades instead of panicking.
    pub fn is_valid(self) -> bool {
        self.frames > 0
            && self.rows > 0
            && self.cols > 0
            && u64::from(self.rows) * u64::from(self.cols) >= u64::from(self.frames)
    }

    /// Normalized width of one cell.
    pub fn frame_width(self) -> f64 {
        1.0 / f64::from(self.cols.max(1))
    }

    /// Normalized height of one cell.
    pub fn frame_height(self) -> f64 {
        1.0 / f64::from(self.rows.max(1))
    }

    /// Row-major unwrap of a frame index into 0-based `(row, col)`.
    pub fn cell(self, index: u32) -> (u32, u32) {
        let cols = self.cols.max(1);
        (index / cols, index % cols)
    }

    /// Normalized rectangle of the cell holding `index`, origin bottom-left.
    ///
    /// Grid row 0 (top) maps to the highest `y` band.
    pub fn cell_rect(self, index: u32) -> NormalizedRect {
        let rows = self.rows.max(1);
        let (row, col) = self.cell(index);
        let row = row.min(rows - 1);
        let fw = self.frame_width();
        let fh = self.frame_height();
        NormalizedRect {
            x: fw * f64::from(col),
            y: fh * f64::from(rows - 1 - row),
            width: fw,
            height: fh,
        }
    }
}

impl Default for FrameGrid {
    fn default() -> Self {
        Self::single()
    }
}

/// Axis-aligned rectangle in normalized texture coordinates.
///
/// Coordinates are relative to the full texture, origin at the bottom-left,
/// so all fields stay in `[0, 1]` for any valid grid.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NormalizedRect {
    /// Left edge.
    pub x: f64,
    /// Bottom edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl NormalizedRect {
    /// The full texture.
    pub const FULL: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    /// Convert to a [`kurbo::Rect`] for hosts that already speak kurbo.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Whether every edge lies inside the unit square (with float slack).
    pub fn is_unit_bounded(self) -> bool {
        const EPS: f64 = 1e-9;
        self.x >= -EPS
            && self.y >= -EPS
            && self.width >= -EPS
            && self.height >= -EPS
            && self.x + self.width <= 1.0 + EPS
            && self.y + self.height <= 1.0 + EPS
    }
}

/// Cache key for one sliced frame of one texture.
///
/// Hosts that cut sheets into per-frame sprites key their cache on this
/// instead of re-slicing every tick.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameKey {
    /// Host-assigned texture identifier.
    pub texture: u64,
    /// 0-based frame index within the sheet.
    pub frame: u32,
}

impl std::fmt::Display for FrameKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.texture, self.frame)
    }
}
