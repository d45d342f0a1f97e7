use crate::canvas::CanvasSurface;
use crate::constants::{CAMERA_X_PROPERTY, CAMERA_Y_PROPERTY};
use crate::core::constants::FRAME_BUDGET_MS;
use crate::core::{FxResult, Scene};
use crate::dom;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Slow frames are summarised rather than logged one by one.
const SLOW_FRAME_REPORT_EVERY: u32 = 120;

pub struct FrameContext {
    scene: Rc<RefCell<Scene>>,
    pub surface: CanvasSurface,
    document: web::Document,
    published_offset: Option<Vec2>,
    slow_frames: u32,
    dropped_frames: u32,
}

impl FrameContext {
    pub fn new(scene: Rc<RefCell<Scene>>, surface: CanvasSurface, document: web::Document) -> Self {
        Self {
            scene,
            surface,
            document,
            published_offset: None,
            slow_frames: 0,
            dropped_frames: 0,
        }
    }

    /// One scheduler iteration: simulate + draw, then publish the camera offset.
    pub fn frame(&mut self) -> FxResult<()> {
        let started = Instant::now();
        let (drawn, offset) = {
            let mut scene = self.scene.borrow_mut();
            let drawn = scene.tick(&mut self.surface);
            (drawn, scene.camera_offset())
        };
        self.publish_offset(offset);

        let elapsed_ms = started.elapsed().as_secs_f32() * 1000.0;
        if elapsed_ms > FRAME_BUDGET_MS {
            self.slow_frames += 1;
            if self.slow_frames % SLOW_FRAME_REPORT_EVERY == 0 {
                log::debug!(
                    "[frame] {} frames over {:.0}ms budget (last {:.1}ms)",
                    self.slow_frames,
                    FRAME_BUDGET_MS,
                    elapsed_ms
                );
            }
        }
        drawn
    }

    /// Re-measure the canvas and hand the new viewport to the scene.
    pub fn resize(&mut self, window: &web::Window) {
        let viewport = self.surface.sync_backing_size(window);
        self.scene.borrow_mut().resize(viewport);
    }

    fn publish_offset(&mut self, offset: Vec2) {
        if self.published_offset == Some(offset) {
            return;
        }
        dom::set_root_property(&self.document, CAMERA_X_PROPERTY, &format!("{}px", offset.x));
        dom::set_root_property(&self.document, CAMERA_Y_PROPERTY, &format!("{}px", offset.y));
        self.published_offset = Some(offset);
    }

    fn run(&mut self) {
        if let Err(e) = self.frame() {
            self.dropped_frames += 1;
            log::warn!("[frame] dropped frame #{}: {}", self.dropped_frames, e);
        }
    }
}

/// Start the requestAnimationFrame chain. It never stops on its own.
///
/// The next frame is requested before the current one runs, so a frame that
/// throws cannot break the chain.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        request_frame(&tick_clone);
        frame_ctx.borrow_mut().run();
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
        }
    }
}
