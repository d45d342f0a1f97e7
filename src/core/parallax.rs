use super::constants::{PARALLAX_SCALE_X, PARALLAX_SCALE_Y, PARALLAX_SMOOTHING};
use super::pointer::PointerState;
use glam::Vec2;

/// Smoothed background offset derived from pointer deviation.
///
/// The offset is only written here; the presentation layer reads it back as
/// `--camx` / `--camy`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxCamera {
    pub offset: Vec2,
}

impl ParallaxCamera {
    /// Target offset for a pointer; horizontal deviation weighs more than vertical.
    #[inline]
    pub fn target(pointer: &PointerState) -> Vec2 {
        pointer.deviation() * Vec2::new(PARALLAX_SCALE_X, PARALLAX_SCALE_Y)
    }

    /// Advance one tick. Disabled pins the offset to exactly zero.
    pub fn step(&mut self, pointer: &PointerState, enabled: bool) -> Vec2 {
        if enabled {
            let target = Self::target(pointer);
            self.offset += (target - self.offset) * PARALLAX_SMOOTHING;
        } else {
            self.offset = Vec2::ZERO;
        }
        self.offset
    }
}
