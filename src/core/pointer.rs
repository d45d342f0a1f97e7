use super::surface::Viewport;
use glam::Vec2;

/// The single logical pointer (mouse or first active touch).
///
/// `position` is normalized to the surface (0..1 inside it), `velocity` is the
/// delta between the last two normalized positions. `down` only changes on
/// explicit press/release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub down: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vec2::splat(0.5),
            velocity: Vec2::ZERO,
            down: false,
        }
    }
}

impl PointerState {
    /// Record a movement at surface-local logical coordinates.
    ///
    /// Returns the new normalized position, or `None` (state untouched) when
    /// the coordinates are not finite or the surface has no area.
    pub fn move_to(&mut self, local: Vec2, viewport: &Viewport) -> Option<Vec2> {
        let normalized = normalize(local, viewport)?;
        self.velocity = normalized - self.position;
        self.position = normalized;
        Some(normalized)
    }

    #[inline]
    pub fn press(&mut self) {
        self.down = true;
    }

    #[inline]
    pub fn release(&mut self) {
        self.down = false;
    }

    /// Deviation from the surface centre, each axis in -0.5..0.5 while inside.
    #[inline]
    pub fn deviation(&self) -> Vec2 {
        self.position - Vec2::splat(0.5)
    }
}

#[inline]
pub fn normalize(local: Vec2, viewport: &Viewport) -> Option<Vec2> {
    if viewport.is_empty() || !local.is_finite() {
        return None;
    }
    Some(local / viewport.size())
}
