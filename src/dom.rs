use crate::constants::NAV_BAR_ID;
use crate::core::Bounds;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    element: &web::Element,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener_by_id(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::MouseEvent) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        add_click_listener(&el, handler);
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Current playable area: the window's inner size minus the navigation bar
/// while it is displayed. Read live; layout can change at any time.
pub fn viewport_bounds() -> Bounds {
    let Some(window) = web::window() else {
        return Bounds::new(0.0, 0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let top = window
        .document()
        .and_then(|d| d.get_element_by_id(NAV_BAR_ID))
        .map(|nav| nav.get_bounding_client_rect().height() as f32)
        .unwrap_or(0.0);
    Bounds::new(width, height, top)
}

pub fn set_style(element: &web::HtmlElement, property: &str, value: &str) {
    _ = element.style().set_property(property, value);
}

pub fn set_timeout(delay_ms: f64, callback: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let cb = Closure::once_into_js(callback);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms as i32,
        );
    }
}
