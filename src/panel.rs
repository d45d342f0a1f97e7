use crate::constants::*;
use crate::core::{Feature, FeatureFlags, MoveEntry};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn toggle_button_id(feature: Feature) -> &'static str {
    match feature {
        Feature::Trails => TOGGLE_TRAILS_ID,
        Feature::Particles => TOGGLE_PARTICLES_ID,
        Feature::Parallax => TOGGLE_PARALLAX_ID,
    }
}

/// Publish the active move: `data-move` on the figure plus the three texts.
pub fn show_move(document: &web::Document, entry: &MoveEntry) {
    if let Some(figure) = document.get_element_by_id(FIGURE_ID) {
        _ = figure.set_attribute(FIGURE_MOVE_ATTR, entry.key);
    }
    dom::set_text(document, MOVE_NAME_ID, entry.title);
    dom::set_text(document, MOVE_DESC_ID, entry.description);
    dom::set_text(document, MOVE_NOTE_ID, entry.note);
}

/// Reflect one flag on its button: label text and the `off` class.
pub fn sync_toggle(document: &web::Document, feature: Feature, on: bool) {
    if let Some(btn) = document.get_element_by_id(toggle_button_id(feature)) {
        _ = btn
            .class_list()
            .toggle_with_force(TOGGLE_OFF_CLASS, !on);
        btn.set_text_content(Some(feature.label(on)));
    }
}

pub fn sync_all_toggles(document: &web::Document, flags: FeatureFlags) {
    for feature in Feature::ALL {
        sync_toggle(document, feature, flags.get(feature));
    }
}

/// Pause or resume the figure's own animations. The canvas is not affected.
pub fn apply_freeze(document: &web::Document, frozen: bool) {
    let Some(figure) = document.get_element_by_id(FIGURE_ID) else {
        return;
    };
    if let Some(el) = figure.dyn_ref::<web::HtmlElement>() {
        dom::set_animation_paused(el, frozen);
    }
    if let Ok(parts) = figure.query_selector_all(FIGURE_PARTS_SELECTOR) {
        for i in 0..parts.length() {
            if let Some(el) = parts
                .get(i)
                .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
            {
                dom::set_animation_paused(&el, frozen);
            }
        }
    }
}
