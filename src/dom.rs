use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        if el
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("[dom] could not listen for clicks on #{}", element_id);
        }
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Replace the text of `#element_id` if it exists.
#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Publish a custom property on the document element.
pub fn set_root_property(document: &web::Document, name: &str, value: &str) {
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        _ = root.style().set_property(name, value);
    }
}

/// Set `animation-play-state` on an element.
#[inline]
pub fn set_animation_paused(el: &web::HtmlElement, paused: bool) {
    _ = el
        .style()
        .set_property("animation-play-state", if paused { "paused" } else { "running" });
}

/// Position of a client-space point relative to the element's rendered box,
/// in logical (CSS) units.
#[inline]
pub fn client_to_local(el: &web::Element, client_x: f64, client_y: f64) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (client_x - rect.left()) as f32,
        (client_y - rect.top()) as f32,
    )
}

/// Sample the reduced-motion preference; absent support reads as false.
pub fn prefers_reduced_motion(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}
