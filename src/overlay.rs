use crate::constants::{
    OPEN_CLASS, OVERLAY_CLOSE_ATTR, OVERLAY_CLOSE_SELECTOR, OVERLAY_OPEN_ATTR,
    OVERLAY_OPEN_SELECTOR,
};
use crate::core::{PauseContext, PauseReason};
use crate::dom;
use web_sys as web;

#[inline]
fn is_open(document: &web::Document, overlay_id: &str) -> bool {
    document
        .get_element_by_id(overlay_id)
        .map(|el| el.class_list().contains(OPEN_CLASS))
        .unwrap_or(false)
}

/// Show an overlay and freeze the sprites behind it.
pub fn open(document: &web::Document, overlay_id: &str, pause: &PauseContext) {
    if let Some(el) = document.get_element_by_id(overlay_id) {
        _ = el.class_list().add_1(OPEN_CLASS);
        pause.hold(PauseReason::Overlay);
        log::info!("[overlay] open {}", overlay_id);
    }
}

/// Hide an overlay; sprites resume once no overlay remains open.
pub fn close(document: &web::Document, overlay_id: &str, pause: &PauseContext) {
    if let Some(el) = document.get_element_by_id(overlay_id) {
        _ = el.class_list().remove_1(OPEN_CLASS);
        log::info!("[overlay] close {}", overlay_id);
    }
    if !any_open(document) {
        pause.release(PauseReason::Overlay);
    }
}

fn any_open(document: &web::Document) -> bool {
    dom::query_all(document, OVERLAY_OPEN_SELECTOR)
        .iter()
        .filter_map(|trigger| trigger.get_attribute(OVERLAY_OPEN_ATTR))
        .any(|id| is_open(document, &id))
}

/// Wire every `[data-overlay-open]` / `[data-overlay-close]` trigger.
pub fn wire_overlay_buttons(document: &web::Document, pause: &PauseContext) {
    for trigger in dom::query_all(document, OVERLAY_OPEN_SELECTOR) {
        let Some(id) = trigger.get_attribute(OVERLAY_OPEN_ATTR) else {
            continue;
        };
        let doc = document.clone();
        let pause = pause.clone();
        dom::add_click_listener(&trigger, move |ev| {
            ev.prevent_default();
            open(&doc, &id, &pause);
        });
    }
    for trigger in dom::query_all(document, OVERLAY_CLOSE_SELECTOR) {
        let Some(id) = trigger.get_attribute(OVERLAY_CLOSE_ATTR) else {
            continue;
        };
        let doc = document.clone();
        let pause = pause.clone();
        dom::add_click_listener(&trigger, move |ev| {
            ev.prevent_default();
            close(&doc, &id, &pause);
        });
    }
}
