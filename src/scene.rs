use crate::assets;
use crate::core::constants::FADE_IN_DELAY_MAX_MS;
use crate::core::{
    CollectionController, EngineConfig, Generation, PauseContext, ProbeRequest, SpriteSeed,
};
use crate::dom;
use crate::events;
use crate::frame;
use crate::sprite::{SpawnParams, SpriteView};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Everything the page-level handlers share: the collection controller with
/// its live sprites, the engine settings, and the scene's RNG.
pub struct Scene {
    pub controller: CollectionController<Rc<SpriteView>>,
    pub config: EngineConfig,
    pub rng: StdRng,
    document: web::Document,
}

pub type SceneRef = Rc<RefCell<Scene>>;

impl Scene {
    pub fn new(document: web::Document, config: EngineConfig, rng: StdRng) -> Self {
        let controller =
            CollectionController::new(PauseContext::new(), config.max_check, &config.extension);
        Self {
            controller,
            config,
            rng,
            document,
        }
    }

    pub fn pause(&self) -> PauseContext {
        self.controller.pause().clone()
    }

    fn display_size(&self, natural: Vec2) -> Vec2 {
        let bounds = dom::viewport_bounds();
        let max = Vec2::new(bounds.width, bounds.playable_height());
        self.config.display.display_size(
            natural,
            self.controller.active_path(),
            bounds.width,
            max,
        )
    }
}

#[inline]
pub fn is_current(scene: &SceneRef, generation: Generation) -> bool {
    scene.borrow().controller.is_current(generation)
}

/// Replace the whole sprite set with the collection at `path`. Old sprites
/// are retired before any probe for the new collection is issued.
pub fn switch_collection(scene: &SceneRef, path: &str) {
    let probes = {
        let mut s = scene.borrow_mut();
        let plan = s.controller.switch_collection(path);
        let pause = s.pause();
        for view in &plan.retired {
            view.retire(&pause);
        }
        plan.probes
    };
    for probe in probes {
        spawn_local(load_sprite(scene.clone(), probe));
    }
}

async fn load_sprite(scene: SceneRef, probe: ProbeRequest) {
    let loaded = match assets::probe_image(&probe.url).await {
        Ok(l) => l,
        Err(e) => {
            log::debug!("[collection] skip: {}", e);
            return;
        }
    };

    let view = {
        let mut guard = scene.borrow_mut();
        let s = &mut *guard;
        if !s.controller.is_current(probe.generation) {
            log::debug!(
                "[collection] discarding {} from generation {}",
                probe.url,
                probe.generation.0
            );
            return;
        }
        let seed = SpriteSeed {
            id: probe.id,
            generation: probe.generation,
            mode: s.config.spin_mode,
            natural_size: loaded.natural,
            size: s.display_size(loaded.natural),
        };
        let params = SpawnParams {
            seed,
            collection: s.controller.active_path(),
            extension: s.controller.extension(),
            bounds: dom::viewport_bounds(),
        };
        let view = match SpriteView::create(&s.document, loaded, params, &mut s.rng) {
            Ok(v) => v,
            Err(e) => {
                log::error!("[sprite] create {} failed: {:?}", probe.id, e);
                return;
            }
        };
        if let Err((e, rejected)) = s.controller.admit(probe.generation, probe.id, view.clone()) {
            log::warn!("[collection] {}", e);
            rejected.retire(&s.controller.pause().clone());
            return;
        }
        let delay = s.rng.gen::<f64>() * FADE_IN_DELAY_MAX_MS;
        view.fade_in(delay);
        view
    };

    let pause = scene.borrow().pause();
    events::wire_sprite_pointer(&view, &scene);
    frame::start_loop(view, pause);
}

/// Recompute every sprite's on-screen size after a viewport change.
pub fn resize_all(scene: &SceneRef) {
    let s = scene.borrow();
    for view in s.controller.sprites() {
        let natural = view.sprite.borrow().natural_size();
        view.resize(s.display_size(natural));
    }
}
