// File: crates/pathline-core/src/types.rs
// Summary: Shared types and constants (surface size, margins, plot layout).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 300;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // room for the left value axis and the bottom index axis
        Self::new(30, 10, 10, 20)
    }
}

/// Outer surface size plus margins; the inner plot area is what scales map into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl Layout {
    pub const fn new(width: i32, height: i32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - self.insets.hsum() as i32).max(1) as f64
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.insets.vsum() as i32).max(1) as f64
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
