use crate::core::Scene;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Mouse and first-touch input folded into the scene's single pointer.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mouse(&w);
    wire_touch(&w);
}

impl InputWiring {
    /// Every movement updates state synchronously; emission is at most one ribbon.
    fn move_to_client(&self, client_x: f64, client_y: f64) {
        let local = dom::client_to_local(&self.canvas, client_x, client_y);
        self.scene.borrow_mut().pointer_moved(local);
    }
}

fn listen<E, F>(target: &web::EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("[input] could not listen for {}", event);
    }
    closure.forget();
}

fn wire_mouse(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };

    let wm = w.clone();
    listen(&window, "mousemove", move |ev: web::MouseEvent| {
        wm.move_to_client(ev.client_x() as f64, ev.client_y() as f64);
    });

    let wd = w.clone();
    listen(&window, "mousedown", move |_ev: web::MouseEvent| {
        wd.scene.borrow_mut().pointer_pressed();
    });

    let wu = w.clone();
    listen(&window, "mouseup", move |_ev: web::MouseEvent| {
        wu.scene.borrow_mut().pointer_released();
    });
}

#[inline]
fn first_touch(ev: &web::TouchEvent) -> Option<web::Touch> {
    ev.touches().get(0)
}

fn wire_touch(w: &InputWiring) {
    let Some(window) = web::window() else {
        return;
    };

    let ws = w.clone();
    listen(&window, "touchstart", move |ev: web::TouchEvent| {
        ws.scene.borrow_mut().pointer_pressed();
        if let Some(t) = first_touch(&ev) {
            ws.move_to_client(t.client_x() as f64, t.client_y() as f64);
        }
    });

    let wm = w.clone();
    listen(&window, "touchmove", move |ev: web::TouchEvent| {
        // An empty touch list carries no position; ignore it.
        if let Some(t) = first_touch(&ev) {
            wm.move_to_client(t.client_x() as f64, t.client_y() as f64);
        }
    });

    let we = w.clone();
    listen(&window, "touchend", move |_ev: web::TouchEvent| {
        we.scene.borrow_mut().pointer_released();
    });
}
