use super::constants::{DPR_MAX, DPR_MIN};
use super::error::FxResult;
use glam::Vec2;
use std::fmt;

/// Straight-alpha RGB color, formatted as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn new(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// HSL color with alpha, formatted as a CSS `hsla()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {}%, {}%, {:.4})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Minimal 2D raster surface the renderer draws through.
///
/// All coordinates are logical units; the implementation owns the mapping to
/// backing pixels. Glow is always two calls (core then halo), never a filter.
pub trait DrawSurface {
    /// Paint a translucent rectangle from the origin over `size`.
    fn fill_rect(&mut self, size: Vec2, color: Rgba) -> FxResult<()>;

    /// Fill a disc.
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Hsla) -> FxResult<()>;

    /// Stroke one connected polyline with round caps and joins.
    fn stroke_polyline<'a, I>(&mut self, points: I, width: f32, color: Hsla) -> FxResult<()>
    where
        I: IntoIterator<Item = &'a Vec2>;
}

/// Logical size of the drawing surface plus its device scale.
///
/// Simulation code only ever reads `width`/`height`; `backing_*` is what the
/// browser layer assigns to the canvas element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            scale: DPR_MIN,
        }
    }
}

impl Viewport {
    /// Build from a rendered CSS box and a raw device pixel ratio.
    pub fn from_css(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width: css_width.max(0.0).floor() as f32,
            height: css_height.max(0.0).floor() as f32,
            scale: clamp_dpr(device_pixel_ratio),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    #[inline]
    pub fn backing_width(&self) -> u32 {
        (self.width as f64 * self.scale).floor() as u32
    }

    #[inline]
    pub fn backing_height(&self) -> u32 {
        (self.height as f64 * self.scale).floor() as u32
    }
}

/// Clamp a device pixel ratio into the supported band; non-finite input maps to 1.
#[inline]
pub fn clamp_dpr(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() {
        device_pixel_ratio.clamp(DPR_MIN, DPR_MAX)
    } else {
        DPR_MIN
    }
}
