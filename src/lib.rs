#![cfg(target_arch = "wasm32")]
use crate::core::EngineConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod scene;
mod sprite;

fn wire_window_resize(scene: &scene::SceneRef) {
    let scene_resize = scene.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        scene::resize_all(&scene_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Engine settings with overrides from `<body data-spin-mode data-collection>`.
fn read_config(document: &web::Document) -> EngineConfig {
    let body = document.body();
    let attr = |name: &str| body.as_ref().and_then(|b| b.get_attribute(name));
    let spin_mode = attr(constants::SPIN_MODE_ATTR);
    let collection = attr(constants::COLLECTION_ATTR);
    EngineConfig::default().with_overrides(spin_mode.as_deref(), collection.as_deref())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ceramics-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = read_config(&document);
    log::info!(
        "[config] spin={} collection={} max_check={}",
        config.spin_mode.name(),
        config.initial_collection,
        config.max_check
    );
    let initial = config.initial_collection.clone();

    let scene: scene::SceneRef = Rc::new(RefCell::new(scene::Scene::new(
        document.clone(),
        config,
        StdRng::from_entropy(),
    )));

    events::wire_nav_links(&document, &scene);
    let pause = scene.borrow().pause();
    overlay::wire_overlay_buttons(&document, &pause);
    wire_window_resize(&scene);

    events::mark_active(&document, &initial);
    scene::switch_collection(&scene, &initial);
    Ok(())
}
