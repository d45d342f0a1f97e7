// Host-side harness for the effects core.
// The main crate is wasm-only, so the pure-Rust modules are included directly.

#![allow(dead_code)]

pub mod core {
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod error {
        include!("../../src/core/error.rs");
    }
    pub mod moves {
        include!("../../src/core/moves.rs");
    }
    pub mod parallax {
        include!("../../src/core/parallax.rs");
    }
    pub mod particles {
        include!("../../src/core/particles.rs");
    }
    pub mod pointer {
        include!("../../src/core/pointer.rs");
    }
    pub mod ribbons {
        include!("../../src/core/ribbons.rs");
    }
    pub mod scene {
        include!("../../src/core/scene.rs");
    }
    pub mod surface {
        include!("../../src/core/surface.rs");
    }
}

use self::core::error::{FxError, FxResult};
use self::core::surface::{DrawSurface, Hsla, Rgba};
use glam::Vec2;

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect { size: Vec2, color: Rgba },
    Disc { center: Vec2, radius: f32, color: Hsla },
    Polyline { points: Vec<Vec2>, width: f32, color: Hsla },
}

/// Surface double that records every call.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn discs(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Disc { .. }))
    }

    pub fn polylines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Polyline { .. }))
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, size: Vec2, color: Rgba) -> FxResult<()> {
        self.ops.push(DrawOp::Rect { size, color });
        Ok(())
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Hsla) -> FxResult<()> {
        self.ops.push(DrawOp::Disc {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_polyline<'a, I>(&mut self, points: I, width: f32, color: Hsla) -> FxResult<()>
    where
        I: IntoIterator<Item = &'a Vec2>,
    {
        self.ops.push(DrawOp::Polyline {
            points: points.into_iter().copied().collect(),
            width,
            color,
        });
        Ok(())
    }
}

/// Surface double that discards everything.
#[derive(Default)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn fill_rect(&mut self, _size: Vec2, _color: Rgba) -> FxResult<()> {
        Ok(())
    }

    fn fill_disc(&mut self, _center: Vec2, _radius: f32, _color: Hsla) -> FxResult<()> {
        Ok(())
    }

    fn stroke_polyline<'a, I>(&mut self, _points: I, _width: f32, _color: Hsla) -> FxResult<()>
    where
        I: IntoIterator<Item = &'a Vec2>,
    {
        Ok(())
    }
}

/// Surface double whose every call fails.
#[derive(Default)]
pub struct FailingSurface {
    pub calls: usize,
}

impl DrawSurface for FailingSurface {
    fn fill_rect(&mut self, _size: Vec2, _color: Rgba) -> FxResult<()> {
        self.calls += 1;
        Err(FxError::Draw("rect".into()))
    }

    fn fill_disc(&mut self, _center: Vec2, _radius: f32, _color: Hsla) -> FxResult<()> {
        self.calls += 1;
        Err(FxError::Draw("disc".into()))
    }

    fn stroke_polyline<'a, I>(&mut self, _points: I, _width: f32, _color: Hsla) -> FxResult<()>
    where
        I: IntoIterator<Item = &'a Vec2>,
    {
        self.calls += 1;
        Err(FxError::Draw("polyline".into()))
    }
}
