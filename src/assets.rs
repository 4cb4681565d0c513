use crate::core::spin_frame_url;
use crate::scene::{self, Scene};
use crate::sprite::SpriteView;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use thiserror::Error;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// A decoded image and its natural pixel size.
pub struct LoadedImage {
    pub image: web::HtmlImageElement,
    pub natural: Vec2,
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("no image at {0}")]
    Missing(String),
    #[error("could not create image element: {0}")]
    Dom(String),
}

/// Try to load and decode `url`. A missing or undecodable image is an
/// ordinary `Err`, never a thrown exception.
pub async fn probe_image(url: &str) -> Result<LoadedImage, ProbeError> {
    let image = web::HtmlImageElement::new().map_err(|e| ProbeError::Dom(format!("{:?}", e)))?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(url);
    let loaded = JsFuture::from(promise).await;
    image.set_onload(None);
    image.set_onerror(None);

    match loaded {
        Ok(_) if image.natural_width() > 0 && image.natural_height() > 0 => {
            let natural = Vec2::new(image.natural_width() as f32, image.natural_height() as f32);
            Ok(LoadedImage { image, natural })
        }
        _ => Err(ProbeError::Missing(url.to_string())),
    }
}

/// Discover the sprite's spin frames: `{id}_1` decides whether it spins at
/// all, then `{id}_2..` are appended in the order the player asks for them
/// until one is missing or the cap is reached. Every completion re-checks
/// that the sprite is still alive and its generation current before touching
/// it.
pub async fn discover_spin_frames(view: Rc<SpriteView>, scene_ref: Weak<RefCell<Scene>>) {
    let (id, generation) = {
        let sprite = view.sprite.borrow();
        (sprite.id, sprite.generation)
    };
    let still_wanted = |view: &SpriteView| -> bool {
        view.is_alive()
            && scene_ref
                .upgrade()
                .is_some_and(|s| scene::is_current(&s, generation))
    };

    // the player names each suffix in turn and stops after the first miss
    loop {
        let Some(k) = view.sprite.borrow().spin().next_probe() else {
            break;
        };
        let url = spin_frame_url(&view.collection, id, k, &view.extension);
        let probed = probe_image(&url).await;
        if !still_wanted(&view) {
            log::debug!("[spin] dropping frames for retired sprite {}", id);
            return;
        }
        let mut sprite = view.sprite.borrow_mut();
        match probed {
            Ok(frame) => {
                sprite.spin_mut().frame_found(k, frame.image, Instant::now());
            }
            Err(e) => {
                if k == 1 {
                    log::debug!("[spin] sprite {} has no spin frames: {}", id, e);
                }
                sprite.spin_mut().frame_missing(k);
            }
        }
    }
    let sprite = view.sprite.borrow();
    if sprite.spin().has_spin() {
        log::info!(
            "[spin] sprite {} loaded {} frames",
            id,
            sprite.spin().frame_count()
        );
    }
}
