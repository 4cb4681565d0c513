use crate::assets;
use crate::core::BeginOutcome;
use crate::scene::SceneRef;
use crate::sprite::SpriteView;
use glam::Vec2;
use instant::Instant;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Attach grab/move/release handlers to one sprite's canvas. Handlers hold
/// weak references so a retired sprite is freed once its loop stops.
pub fn wire_sprite_pointer(view: &Rc<SpriteView>, scene: &SceneRef) {
    wire_pointerdown(view, scene);
    wire_pointermove(view);
    wire_pointerup(view, scene, "pointerup");
    wire_pointerup(view, scene, "pointercancel");
}

#[inline]
fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointerdown(view: &Rc<SpriteView>, scene: &SceneRef) {
    let weak_view = Rc::downgrade(view);
    let weak_scene = Rc::downgrade(scene);

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (Some(view), Some(scene)) = (weak_view.upgrade(), weak_scene.upgrade()) else {
            return;
        };
        let pause = scene.borrow().pause();
        let outcome = view.sprite.borrow_mut().grab(
            ev.pointer_id(),
            pointer_client_px(&ev),
            &pause,
            Instant::now(),
        );
        let Some(outcome) = outcome else {
            return;
        };
        view.raise();
        _ = view.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
        log::debug!("[sprite] grab {} -> {:?}", view.sprite.borrow().id, outcome);

        if outcome == BeginOutcome::Discover {
            spawn_local(assets::discover_spin_frames(view.clone(), weak_scene.clone()));
        }
    }) as Box<dyn FnMut(_)>);
    view.add_listener("pointerdown", closure);
}

fn wire_pointermove(view: &Rc<SpriteView>) {
    let weak_view = Rc::downgrade(view);

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(view) = weak_view.upgrade() else {
            return;
        };
        let moved = view
            .sprite
            .borrow_mut()
            .drag_to(ev.pointer_id(), pointer_client_px(&ev));
        if moved {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    view.add_listener("pointermove", closure);
}

fn wire_pointerup(view: &Rc<SpriteView>, scene: &SceneRef, event: &'static str) {
    let weak_view = Rc::downgrade(view);
    let weak_scene = Rc::downgrade(scene);

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (Some(view), Some(scene)) = (weak_view.upgrade(), weak_scene.upgrade()) else {
            return;
        };
        let released = {
            let mut s = scene.borrow_mut();
            let pause = s.pause();
            view.sprite
                .borrow_mut()
                .release(ev.pointer_id(), &pause, &mut s.rng)
        };
        let Some(redraw_base) = released else {
            return;
        };
        if redraw_base {
            view.draw_base();
        }
        _ = view.canvas.release_pointer_capture(ev.pointer_id());
        view.lower();
        log::debug!(
            "[sprite] release {} v=({:.2},{:.2})",
            view.sprite.borrow().id,
            view.sprite.borrow().body.velocity.x,
            view.sprite.borrow().body.velocity.y
        );
    }) as Box<dyn FnMut(_)>);
    view.add_listener(event, closure);
}
