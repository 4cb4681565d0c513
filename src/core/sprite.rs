// One free-floating, draggable ceramic. Holds its own motion, drag and spin
// state; the web layer wraps it with a canvas and event listeners.

use super::collection::Generation;
use super::pause::{PauseContext, PauseReason};
use super::physics::{self, Body, Bounds};
use super::spin::{BeginOutcome, SpinMode, SpinPlayer};
use glam::Vec2;
use instant::Instant;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub pointer_id: i32,
    /// Pointer position minus sprite position at grab time.
    pub offset: Vec2,
    pub last_pointer: Vec2,
}

/// Identity and sizing for a sprite about to be spawned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteSeed {
    pub id: u32,
    pub generation: Generation,
    pub mode: SpinMode,
    pub natural_size: Vec2,
    /// Display size in CSS px.
    pub size: Vec2,
}

pub struct Sprite<F> {
    pub id: u32,
    pub generation: Generation,
    pub body: Body,
    natural_size: Vec2,
    drag: Option<DragState>,
    spin: SpinPlayer<F>,
    alive: bool,
}

impl<F> Sprite<F> {
    /// Place a new sprite at a random spot with a random drift.
    pub fn spawn<R: Rng + ?Sized>(
        seed: SpriteSeed,
        base: F,
        bounds: &Bounds,
        rng: &mut R,
    ) -> Self {
        let position = physics::spawn_position(bounds, rng);
        let velocity = physics::random_drift(rng);
        Self::new(
            seed.id,
            seed.generation,
            base,
            seed.natural_size,
            Body::new(position, velocity, seed.size),
            seed.mode,
        )
    }

    pub fn new(
        id: u32,
        generation: Generation,
        base: F,
        natural_size: Vec2,
        body: Body,
        mode: SpinMode,
    ) -> Self {
        Self {
            id,
            generation,
            body,
            natural_size,
            drag: None,
            spin: SpinPlayer::new(mode, base),
            alive: true,
        }
    }

    pub fn natural_size(&self) -> Vec2 {
        self.natural_size
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_state(&self) -> Option<DragState> {
        self.drag
    }

    pub fn spin(&self) -> &SpinPlayer<F> {
        &self.spin
    }

    pub fn spin_mut(&mut self) -> &mut SpinPlayer<F> {
        &mut self.spin
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.body.size = size;
    }

    /// Pointer down on this sprite. Freezes the scene, zeroes velocity and
    /// starts spin playback. Returns `None` if another pointer already holds
    /// the sprite.
    pub fn grab(
        &mut self,
        pointer_id: i32,
        pointer: Vec2,
        pause: &PauseContext,
        now: Instant,
    ) -> Option<BeginOutcome> {
        if !self.alive || self.drag.is_some() {
            return None;
        }
        self.drag = Some(DragState {
            pointer_id,
            offset: pointer - self.body.position,
            last_pointer: pointer,
        });
        pause.hold(PauseReason::Drag);
        self.body.velocity = Vec2::ZERO;
        Some(self.spin.begin(now))
    }

    /// Pointer moved. Only the capturing pointer moves the sprite; the
    /// frame-to-frame delta becomes the throw velocity.
    pub fn drag_to(&mut self, pointer_id: i32, pointer: Vec2) -> bool {
        match self.drag.as_mut() {
            Some(drag) if drag.pointer_id == pointer_id => {
                self.body.position = pointer - drag.offset;
                self.body.velocity = pointer - drag.last_pointer;
                drag.last_pointer = pointer;
                true
            }
            _ => false,
        }
    }

    /// Pointer up or cancelled. Returns `Some(redraw_base)` when this pointer
    /// was holding the sprite, `None` otherwise.
    pub fn release<R: Rng + ?Sized>(
        &mut self,
        pointer_id: i32,
        pause: &PauseContext,
        rng: &mut R,
    ) -> Option<bool> {
        match self.drag {
            Some(drag) if drag.pointer_id == pointer_id => {
                self.drag = None;
                pause.release(PauseReason::Drag);
                self.body.velocity = physics::release_velocity(self.body.velocity, rng);
                Some(self.spin.end())
            }
            _ => None,
        }
    }

    /// Advance one animation frame. Integration is skipped while this sprite
    /// is held or the scene is paused. Returns the spin frame index to draw
    /// when it changed.
    pub fn step(
        &mut self,
        dt: Duration,
        bounds: &Bounds,
        pause: &PauseContext,
        now: Instant,
    ) -> Option<usize> {
        if !self.alive {
            return None;
        }
        if self.drag.is_none() && !pause.is_paused() {
            physics::step(&mut self.body, bounds, physics::ticks_from_dt(dt));
        }
        self.spin.poll(now)
    }

    /// Retire the sprite. Its animation loop observes this and stops, and
    /// spin frames still in flight are dropped.
    pub fn destroy(&mut self, pause: &PauseContext) {
        if !self.alive {
            return;
        }
        self.alive = false;
        if self.drag.take().is_some() {
            pause.release(PauseReason::Drag);
        }
        self.spin.end();
        self.spin.cancel_discovery();
    }
}
