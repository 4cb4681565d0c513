use crate::assets::LoadedImage;
use crate::constants::{SPRITE_CLASS, SPRITE_ID_ATTR};
use crate::core::constants::DRAG_Z_INDEX;
use crate::core::{Bounds, PauseContext, Sprite, SpriteSeed};
use crate::dom;
use glam::Vec2;
use instant::Instant;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type PointerListener = Closure<dyn FnMut(web::PointerEvent)>;

/// A sprite bound to its own `<canvas>`. The canvas backing store matches the
/// image's natural size; CSS width/height scale it for display.
pub struct SpriteView {
    pub canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    pub sprite: RefCell<Sprite<web::HtmlImageElement>>,
    pub collection: String,
    pub extension: String,
    listeners: RefCell<Vec<(&'static str, PointerListener)>>,
}

pub struct SpawnParams<'a> {
    pub seed: SpriteSeed,
    pub collection: &'a str,
    pub extension: &'a str,
    pub bounds: Bounds,
}

impl SpriteView {
    pub fn create<R: Rng + ?Sized>(
        document: &web::Document,
        loaded: LoadedImage,
        params: SpawnParams<'_>,
        rng: &mut R,
    ) -> anyhow::Result<Rc<Self>> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        canvas.set_class_name(SPRITE_CLASS);
        canvas.set_width(loaded.natural.x as u32);
        canvas.set_height(loaded.natural.y as u32);
        _ = canvas.set_attribute(SPRITE_ID_ATTR, &params.seed.id.to_string());

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        _ = ctx.draw_image_with_html_image_element(&loaded.image, 0.0, 0.0);

        dom::set_style(&canvas, "opacity", "0");
        let sprite = Sprite::spawn(params.seed, loaded.image, &params.bounds, rng);

        let view = Rc::new(Self {
            canvas,
            ctx,
            sprite: RefCell::new(sprite),
            collection: params.collection.to_string(),
            extension: params.extension.to_string(),
            listeners: RefCell::new(Vec::new()),
        });
        view.apply_size(params.seed.size);
        view.apply_transform(view.sprite.borrow().body.position);

        let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
        body.append_child(&view.canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(view)
    }

    pub fn is_alive(&self) -> bool {
        self.sprite.borrow().is_alive()
    }

    /// Reveal after `delay_ms` with a short opacity transition.
    pub fn fade_in(&self, delay_ms: f64) {
        let canvas = self.canvas.clone();
        dom::set_timeout(delay_ms, move || {
            dom::set_style(&canvas, "opacity", "1");
            dom::set_style(&canvas, "transition", "opacity 0.5s ease");
        });
    }

    /// One animation frame: step the sprite, move the canvas, and repaint if
    /// the spin frame changed.
    pub fn tick(&self, dt: Duration, bounds: &Bounds, pause: &PauseContext, now: Instant) {
        let (frame, position) = {
            let mut sprite = self.sprite.borrow_mut();
            let frame = sprite.step(dt, bounds, pause, now);
            (frame, sprite.body.position)
        };
        self.apply_transform(position);
        if let Some(index) = frame {
            self.draw_frame(index);
        }
    }

    pub fn draw_frame(&self, index: usize) {
        let sprite = self.sprite.borrow();
        if let Some(image) = sprite.spin().frame(index) {
            self.paint(image);
        }
    }

    pub fn draw_base(&self) {
        let sprite = self.sprite.borrow();
        if let Some(image) = sprite.spin().base() {
            self.paint(image);
        }
    }

    fn paint(&self, image: &web::HtmlImageElement) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        _ = self.ctx.draw_image_with_html_image_element(image, 0.0, 0.0);
    }

    pub fn apply_transform(&self, position: Vec2) {
        dom::set_style(
            &self.canvas,
            "transform",
            &format!("translate3d({:.2}px, {:.2}px, 0)", position.x, position.y),
        );
    }

    pub fn apply_size(&self, size: Vec2) {
        dom::set_style(&self.canvas, "width", &format!("{:.1}px", size.x));
        dom::set_style(&self.canvas, "height", &format!("{:.1}px", size.y));
    }

    pub fn resize(&self, size: Vec2) {
        self.sprite.borrow_mut().set_size(size);
        self.apply_size(size);
    }

    pub fn raise(&self) {
        dom::set_style(&self.canvas, "z-index", DRAG_Z_INDEX);
        dom::set_style(&self.canvas, "transition", "none");
    }

    pub fn lower(&self) {
        _ = self.canvas.style().remove_property("z-index");
    }

    pub fn add_listener(&self, event: &'static str, listener: PointerListener) {
        _ = self
            .canvas
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        self.listeners.borrow_mut().push((event, listener));
    }

    /// Take the sprite out of the scene: stop its loop, detach its listeners
    /// and remove the canvas from the page.
    pub fn retire(&self, pause: &PauseContext) {
        self.sprite.borrow_mut().destroy(pause);
        for (event, listener) in self.listeners.borrow_mut().drain(..) {
            _ = self
                .canvas
                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
        self.canvas.remove();
    }
}
