use crate::core::constants::BACKGROUND_RGB;
use crate::core::{DrawSurface, FxError, FxResult, Hsla, Rgba, Viewport};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
fn draw_err(e: JsValue) -> FxError {
    FxError::Draw(format!("{:?}", e))
}

/// `DrawSurface` over a canvas 2D context.
///
/// The context transform is kept at `scale` so every call takes logical units.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Acquire the 2D context; fails when the canvas cannot provide one.
    pub fn new(canvas: web::HtmlCanvasElement) -> FxResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(FxError::SurfaceUnavailable)?;
        Ok(Self { canvas, ctx })
    }

    /// Measure the rendered box and resize the backing store to
    /// `logical × clamp(dpr, 1, 2)`, resetting the transform to match.
    pub fn sync_backing_size(&self, window: &web::Window) -> Viewport {
        let rect = self.canvas.get_bounding_client_rect();
        let viewport = Viewport::from_css(rect.width(), rect.height(), window.device_pixel_ratio());
        let (w, h) = (viewport.backing_width(), viewport.backing_height());
        if self.canvas.width() != w {
            self.canvas.set_width(w);
        }
        if self.canvas.height() != h {
            self.canvas.set_height(h);
        }
        let s = viewport.scale;
        if let Err(e) = self.ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0) {
            log::warn!("[canvas] set_transform failed: {:?}", e);
        }
        viewport
    }

    /// Opaque first fill so the page never flashes before the first frame.
    pub fn fill_background(&mut self, viewport: &Viewport) -> FxResult<()> {
        self.fill_rect(viewport.size(), Rgba::new(BACKGROUND_RGB, 1.0))
    }
}

impl DrawSurface for CanvasSurface {
    fn fill_rect(&mut self, size: Vec2, color: Rgba) -> FxResult<()> {
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Hsla) -> FxResult<()> {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_string());
        self.ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .map_err(draw_err)?;
        self.ctx.fill();
        Ok(())
    }

    fn stroke_polyline<'a, I>(&mut self, points: I, width: f32, color: Hsla) -> FxResult<()>
    where
        I: IntoIterator<Item = &'a Vec2>,
    {
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        for (i, p) in points.into_iter().enumerate() {
            if i == 0 {
                self.ctx.move_to(p.x as f64, p.y as f64);
            } else {
                self.ctx.line_to(p.x as f64, p.y as f64);
            }
        }
        self.ctx.stroke();
        Ok(())
    }
}
