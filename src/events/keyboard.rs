use crate::constants::FREEZE_KEY_CODE;
use crate::core::Scene;
use crate::panel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_freeze_key(code: &str) -> bool {
    code == FREEZE_KEY_CODE
}

pub fn handle_keydown(ev: &web::KeyboardEvent, scene: &Rc<RefCell<Scene>>, document: &web::Document) {
    if is_freeze_key(&ev.code()) {
        let frozen = scene.borrow_mut().toggle_freeze();
        panel::apply_freeze(document, frozen);
        ev.prevent_default();
    }
}

// Space freezes the figure only; the particle/ribbon loop keeps running.
pub fn wire_freeze_key(scene: Rc<RefCell<Scene>>, document: web::Document) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_keydown(&ev, &scene, &document);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
