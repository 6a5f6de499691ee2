/// Placement of one lily pad, in percent of the river's width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadPosition {
    pub horizontal: f32,
    pub vertical: f32,
}

impl PadPosition {
    pub const HORIZONTAL_MIN: f32 = 5.0;
    pub const HORIZONTAL_MAX: f32 = 95.0;
    pub const VERTICAL_MIN: f32 = 25.0;
    pub const VERTICAL_MAX: f32 = 75.0;

    /// Builds a position, clamping both axes into their allowed bands.
    #[must_use]
    pub fn clamped(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal: horizontal.clamp(Self::HORIZONTAL_MIN, Self::HORIZONTAL_MAX),
            vertical: vertical.clamp(Self::VERTICAL_MIN, Self::VERTICAL_MAX),
        }
    }

    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        (Self::HORIZONTAL_MIN..=Self::HORIZONTAL_MAX).contains(&self.horizontal)
            && (Self::VERTICAL_MIN..=Self::VERTICAL_MAX).contains(&self.vertical)
    }
}
