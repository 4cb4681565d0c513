use crate::constants::{
    ACTIVE_CLASS, MOBILE_OVERLAY_ID, MOBILE_TOGGLE_ID, NAV_FOLDER_ATTR, NAV_LINK_SELECTOR,
    OPEN_CLASS,
};
use crate::core::normalize_collection_path;
use crate::dom;
use crate::scene::{self, SceneRef};
use web_sys as web;

/// Collection tabs: clicking a link highlights every link for that folder
/// (desktop and mobile copies), switches collection when it changed, and
/// closes the mobile menu.
pub fn wire_nav_links(document: &web::Document, scene: &SceneRef) {
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let doc = document.clone();
        let scene = scene.clone();
        let link_el = link.clone();
        dom::add_click_listener(&link, move |ev| {
            ev.prevent_default();
            let Some(folder) = link_el.get_attribute(NAV_FOLDER_ATTR) else {
                return;
            };
            mark_active(&doc, &folder);
            let path = normalize_collection_path(&folder);
            let changed = scene.borrow().controller.should_switch(&path);
            if changed {
                log::info!("[nav] switch to {}", path);
                scene::switch_collection(&scene, &path);
            }
            close_mobile_menu(&doc);
        });
    }

    let doc = document.clone();
    dom::add_click_listener_by_id(document, MOBILE_TOGGLE_ID, move |_| {
        if is_mobile_menu_open(&doc) {
            close_mobile_menu(&doc);
        } else {
            open_mobile_menu(&doc);
        }
    });
}

pub fn mark_active(document: &web::Document, folder: &str) {
    let wanted = normalize_collection_path(folder);
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let is_match = link
            .get_attribute(NAV_FOLDER_ATTR)
            .map(|f| normalize_collection_path(&f) == wanted)
            .unwrap_or(false);
        let cl = link.class_list();
        if is_match {
            _ = cl.add_1(ACTIVE_CLASS);
        } else {
            _ = cl.remove_1(ACTIVE_CLASS);
        }
    }
}

#[inline]
fn is_mobile_menu_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(MOBILE_OVERLAY_ID)
        .map(|el| el.class_list().contains(OPEN_CLASS))
        .unwrap_or(false)
}

#[inline]
fn open_mobile_menu(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MOBILE_OVERLAY_ID) {
        _ = el.class_list().add_1(OPEN_CLASS);
    }
}

#[inline]
fn close_mobile_menu(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(MOBILE_OVERLAY_ID) {
        _ = el.class_list().remove_1(OPEN_CLASS);
    }
}
