use crate::core::PauseContext;
use crate::dom;
use crate::sprite::SpriteView;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drive one sprite from `requestAnimationFrame` until it is retired. The loop
/// keeps rescheduling while the scene is paused so it notices when the pause
/// ends; once the sprite is dead it drops its own callback and stops.
pub fn start_loop(view: Rc<SpriteView>, pause: PauseContext) {
    let tick: FrameSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mut last_instant = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !view.is_alive() {
            // breaks the closure <-> slot cycle so the view can be freed
            _ = tick_clone.borrow_mut().take();
            return;
        }
        let now = Instant::now();
        let dt = now - last_instant;
        last_instant = now;
        let bounds = dom::viewport_bounds();
        view.tick(dt, &bounds, &pause, now);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &FrameSlot) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
