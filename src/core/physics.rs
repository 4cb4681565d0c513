// Free-floating sprite motion: integration, a soft speed governor, and
// reflective collision against the playable area of the viewport.
//
// Velocities are in CSS px per 60 Hz tick. Callers convert wall-clock frame
// intervals with [`ticks_from_dt`] so a 30 Hz display moves sprites the same
// distance per second as a 60 Hz one.

use super::constants::*;
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

/// Playable area in CSS px. `top` is the exclusion zone under the navigation
/// bar; sprites never spawn or bounce above it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub top: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32, top: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            top: top.clamp(0.0, height.max(0.0)),
        }
    }

    #[inline]
    pub fn playable_height(&self) -> f32 {
        (self.height - self.top).max(0.0)
    }

    /// Whether a box of `size` fits inside the playable area at all.
    #[inline]
    pub fn fits(&self, size: Vec2) -> bool {
        size.x <= self.width && size.y <= self.playable_height()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity,
            size,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Elapsed wall-clock time expressed in 60 Hz ticks, capped so a long stall
/// (hidden tab, debugger) does not teleport sprites.
#[inline]
pub fn ticks_from_dt(dt: Duration) -> f32 {
    (dt.as_secs_f32() * TICK_HZ).clamp(0.0, MAX_TICKS_PER_STEP)
}

/// Nudge `velocity` toward the cruising band without ever snapping to it.
pub fn govern_speed(velocity: Vec2, ticks: f32) -> Vec2 {
    let speed = velocity.length();
    if speed > CRUISE_SPEED_MAX {
        velocity * OVERSPEED_DAMPING.powf(ticks)
    } else if speed < CRUISE_SPEED_MIN {
        velocity * UNDERSPEED_BOOST.powf(ticks)
    } else {
        velocity
    }
}

/// Clamp `body` into `bounds` and reflect the velocity component of every
/// axis whose edge crossed a wall. Returns true if any wall was hit.
///
/// The reflected component always points back into the playable area, so a
/// sprite left outside by a viewport shrink does not oscillate on the edge.
pub fn collide(body: &mut Body, bounds: &Bounds) -> bool {
    let mut hit = false;
    let right = bounds.width - body.size.x;
    let bottom = bounds.height - body.size.y;

    if body.position.x > right {
        body.position.x = right;
        body.velocity.x = -body.velocity.x.abs();
        hit = true;
    }
    if body.position.x < 0.0 {
        body.position.x = 0.0;
        body.velocity.x = body.velocity.x.abs();
        hit = true;
    }
    if body.position.y > bottom {
        body.position.y = bottom;
        body.velocity.y = -body.velocity.y.abs();
        hit = true;
    }
    if body.position.y < bounds.top {
        body.position.y = bounds.top;
        body.velocity.y = body.velocity.y.abs();
        hit = true;
    }
    hit
}

/// One free-flight tick: integrate, govern, collide.
pub fn step(body: &mut Body, bounds: &Bounds, ticks: f32) -> bool {
    body.position += body.velocity * ticks;
    body.velocity = govern_speed(body.velocity, ticks);
    collide(body, bounds)
}

/// Velocity a sprite keeps after being let go: the throw is clamped to
/// [`THROW_SPEED_MAX`], and a throw that is effectively still is replaced with
/// a random drift so no sprite ever settles motionless.
pub fn release_velocity<R: Rng + ?Sized>(throw: Vec2, rng: &mut R) -> Vec2 {
    let v = throw.clamp_length_max(THROW_SPEED_MAX);
    if !v.is_finite() || (v.x.abs() < RESTING_SPEED_EPSILON && v.y.abs() < RESTING_SPEED_EPSILON)
    {
        random_drift(rng)
    } else {
        v
    }
}

/// Nonzero velocity with components uniform in `[-DRIFT_SPEED_SPAN, DRIFT_SPEED_SPAN)`.
pub fn random_drift<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    loop {
        let v = Vec2::new(
            rng.gen_range(-DRIFT_SPEED_SPAN..DRIFT_SPEED_SPAN),
            rng.gen_range(-DRIFT_SPEED_SPAN..DRIFT_SPEED_SPAN),
        );
        if v != Vec2::ZERO {
            return v;
        }
    }
}

/// Random spawn point inside the playable area, keeping a margin off the
/// right and bottom edges.
pub fn spawn_position<R: Rng + ?Sized>(bounds: &Bounds, rng: &mut R) -> Vec2 {
    let span_x = (bounds.width - SPAWN_MARGIN_PX).max(0.0);
    let span_y = (bounds.playable_height() - SPAWN_MARGIN_PX).max(0.0);
    Vec2::new(
        rng.gen::<f32>() * span_x,
        bounds.top + rng.gen::<f32>() * span_y,
    )
}
