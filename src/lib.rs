#![cfg(target_arch = "wasm32")]
use crate::core::config::PARAM_KEYS;
use crate::core::{Feature, FxParams, MoveCycle, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod panel;

use constants::*;

/// Read `data-*` overrides from the canvas; rejected values keep their defaults.
fn params_from_canvas(canvas: &web::HtmlCanvasElement) -> FxParams {
    let found: Vec<(&str, String)> = PARAM_KEYS
        .iter()
        .filter_map(|key| {
            canvas
                .get_attribute(&format!("data-{}", key))
                .map(|value| (*key, value))
        })
        .collect();
    let (params, rejected) =
        FxParams::default().with_overrides(found.iter().map(|(k, v)| (*k, v.as_str())));
    for e in rejected {
        log::warn!("[config] {}", e);
    }
    params
}

fn wire_resize(frame_ctx: &Rc<RefCell<frame::FrameContext>>, document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let ctx = frame_ctx.clone();
    let win = window.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        ctx.borrow_mut().resize(&win);
    }) as Box<dyn FnMut()>);

    match web::ResizeObserver::new(resize_closure.as_ref().unchecked_ref()) {
        Ok(observer) => {
            if let Some(body) = document.body() {
                observer.observe(&body);
            }
            // Observes for the lifetime of the page.
            std::mem::forget(observer);
        }
        Err(e) => log::warn!("[resize] ResizeObserver unavailable: {:?}", e),
    }
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();
}

fn wire_toggle_buttons(scene: &Rc<RefCell<Scene>>, document: &web::Document) {
    for feature in Feature::ALL {
        let scene = scene.clone();
        let doc = document.clone();
        dom::add_click_listener(document, panel::toggle_button_id(feature), move || {
            let on = scene.borrow_mut().toggle(feature);
            panel::sync_toggle(&doc, feature, on);
        });
    }
}

fn wire_move_cycle(moves: Rc<RefCell<MoveCycle>>, document: &web::Document, interval_ms: u32) {
    panel::show_move(document, moves.borrow().current());
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let entry = moves.borrow_mut().advance();
        log::info!("[move] {}", entry.key);
        panel::show_move(&doc, entry);
    }) as Box<dyn FnMut()>);
    if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        interval_ms.min(i32::MAX as u32) as i32,
    ) {
        log::warn!("[move] could not start move timer: {:?}", e);
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("qi-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Without a 2D context the effects never start; the rest of the page is untouched.
    let surface = canvas::CanvasSurface::new(canvas.clone())?;

    let params = params_from_canvas(&canvas);
    let reduced_motion = dom::prefers_reduced_motion(&window, REDUCED_MOTION_QUERY);
    let move_interval_ms = params.move_interval_ms;
    let scene = Rc::new(RefCell::new(Scene::new(
        params,
        rand::random::<u64>(),
        reduced_motion,
    )));
    log::info!("[init] reduced_motion={}", reduced_motion);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene.clone(),
        surface,
        document.clone(),
    )));
    {
        let mut ctx = frame_ctx.borrow_mut();
        ctx.resize(&window);
        let viewport = scene.borrow().viewport();
        if let Err(e) = ctx.surface.fill_background(&viewport) {
            log::warn!("[init] background fill failed: {}", e);
        }
    }
    wire_resize(&frame_ctx, &document);

    wire_move_cycle(
        Rc::new(RefCell::new(MoveCycle::default())),
        &document,
        move_interval_ms,
    );

    wire_toggle_buttons(&scene, &document);
    panel::sync_all_toggles(&document, scene.borrow().flags());

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });
    events::wire_freeze_key(scene.clone(), document.clone());

    frame::start_loop(frame_ctx);
    Ok(())
}
