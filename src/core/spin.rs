// Frame-sequence player for sprites that have alternate "spin" images.
//
// The player is clock-driven: instead of owning a browser interval it keeps
// a single playback schedule (next step deadline, or dwell deadline) that the
// owning sprite's animation loop polls with the current time. Only one
// schedule exists per player, so there is never more than one live timer for
// a sprite, and dropping the sprite drops its timer.
//
// Frame 0 is always the static base image; discovered spin frames `{id}_1`
// onward follow it in order. Discovery is gap-free: the player names the
// next suffix to probe, accepts only that suffix, and stops at the first
// miss.

use super::constants::{
    LOOP_FRAME_MS, MAX_SPIN_FRAMES, PENDULUM_DWELL_MS, PENDULUM_FRAME_MS,
};
use instant::Instant;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinMode {
    /// Cycle `0, 1, .., n-1, 0, 1, ..` on a fixed cadence.
    Looping,
    /// Sweep forward and back, resting at each end.
    #[default]
    Pendulum,
}

impl SpinMode {
    pub fn frame_interval(self) -> Duration {
        match self {
            SpinMode::Looping => Duration::from_millis(LOOP_FRAME_MS),
            SpinMode::Pendulum => Duration::from_millis(PENDULUM_FRAME_MS),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpinMode::Looping => "looping",
            SpinMode::Pendulum => "pendulum",
        }
    }
}

impl FromStr for SpinMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "looping" | "loop" => Ok(SpinMode::Looping),
            "pendulum" | "bounce" => Ok(SpinMode::Pendulum),
            other => Err(format!("unknown spin mode: {other}")),
        }
    }
}

/// Whether the sprite has spin frames. `Absent` is terminal and never retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discovery {
    Unchecked,
    Probing,
    Absent,
    Present,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Playback {
    Stopped,
    Stepping { due: Instant },
    Dwelling { until: Instant },
}

/// What the caller should do after [`SpinPlayer::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeginOutcome {
    /// First grab ever: probe `{id}_1` and report back.
    Discover,
    /// Discovery is still in flight; playback starts when the first frame lands.
    AwaitingFrames,
    Started,
    AlreadyPlaying,
    NoSpin,
}

pub struct SpinPlayer<F> {
    mode: SpinMode,
    frames: Vec<F>,
    index: usize,
    direction: isize,
    discovery: Discovery,
    /// Suffix of the next frame to probe while discovery is running.
    next_probe: Option<u32>,
    held: bool,
    playback: Playback,
}

impl<F> SpinPlayer<F> {
    pub fn new(mode: SpinMode, base: F) -> Self {
        Self {
            mode,
            frames: vec![base],
            index: 0,
            direction: 1,
            discovery: Discovery::Unchecked,
            next_probe: None,
            held: false,
            playback: Playback::Stopped,
        }
    }

    pub fn mode(&self) -> SpinMode {
        self.mode
    }

    pub fn discovery(&self) -> Discovery {
        self.discovery
    }

    pub fn has_spin(&self) -> bool {
        self.discovery == Discovery::Present
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> isize {
        self.direction
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<&F> {
        self.frames.get(index)
    }

    pub fn current_frame(&self) -> Option<&F> {
        self.frames.get(self.index)
    }

    pub fn base(&self) -> Option<&F> {
        self.frames.first()
    }

    /// Suffix `k` of the next `{id}_{k}` image to probe, or `None` once
    /// discovery has finished or was never requested.
    pub fn next_probe(&self) -> Option<u32> {
        self.next_probe
    }

    pub fn is_playing(&self) -> bool {
        self.playback != Playback::Stopped
    }

    pub fn is_dwelling(&self) -> bool {
        matches!(self.playback, Playback::Dwelling { .. })
    }

    /// Grab started. Starting while already playing is a no-op.
    pub fn begin(&mut self, now: Instant) -> BeginOutcome {
        self.held = true;
        match self.discovery {
            Discovery::Unchecked => {
                self.discovery = Discovery::Probing;
                self.next_probe = Some(1);
                BeginOutcome::Discover
            }
            Discovery::Probing => BeginOutcome::AwaitingFrames,
            Discovery::Absent => BeginOutcome::NoSpin,
            Discovery::Present => self.start(now),
        }
    }

    /// Grab ended. Stops stepping and any pending dwell and rewinds to the
    /// base image. Returns true if the surface must be redrawn with the base.
    pub fn end(&mut self) -> bool {
        self.held = false;
        self.playback = Playback::Stopped;
        self.index = 0;
        self.direction = 1;
        self.has_spin()
    }

    /// `{id}_{k}` decoded. Only the suffix named by [`Self::next_probe`] is
    /// accepted; anything else is ignored and `false` returned. The first
    /// frame marks the sprite as spinning and starts playback right away if
    /// it is still held.
    pub fn frame_found(&mut self, k: u32, frame: F, now: Instant) -> bool {
        if self.next_probe != Some(k) {
            return false;
        }
        self.frames.push(frame);
        self.next_probe = (k < MAX_SPIN_FRAMES).then_some(k + 1);
        if k == 1 {
            self.discovery = Discovery::Present;
            log::debug!("[spin] frames present ({} mode)", self.mode.name());
            if self.held {
                self.start(now);
            }
        }
        true
    }

    /// `{id}_{k}` is missing: discovery ends here. A missing `{id}_1` means
    /// the sprite never spins.
    pub fn frame_missing(&mut self, k: u32) {
        if self.next_probe != Some(k) {
            return;
        }
        self.next_probe = None;
        if k == 1 {
            self.discovery = Discovery::Absent;
        }
    }

    /// Abandon discovery for a retired sprite. Frames that arrive later are
    /// ignored.
    pub fn cancel_discovery(&mut self) {
        self.next_probe = None;
        if self.discovery == Discovery::Probing {
            self.discovery = Discovery::Absent;
        }
    }

    /// Advance playback to `now`. Returns the new frame index when the visible
    /// frame changed. At most one step is taken per call; a late poll does not
    /// burst through several frames.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        let due = match self.playback {
            Playback::Stopped => return None,
            Playback::Stepping { due } => due,
            Playback::Dwelling { until } => until,
        };
        if now < due || self.frames.len() < 2 {
            return None;
        }
        match self.mode {
            SpinMode::Looping => {
                self.index = (self.index + 1) % self.frames.len();
                self.playback = Playback::Stepping {
                    due: next_due(due, now, self.mode.frame_interval()),
                };
            }
            SpinMode::Pendulum => {
                let last = self.frames.len() - 1;
                let next = (self.index as isize + self.direction).clamp(0, last as isize);
                self.index = next as usize;
                if self.index == 0 || self.index == last {
                    self.direction = -self.direction;
                    self.playback = Playback::Dwelling {
                        until: now + Duration::from_millis(PENDULUM_DWELL_MS),
                    };
                } else {
                    self.playback = Playback::Stepping {
                        due: next_due(due, now, self.mode.frame_interval()),
                    };
                }
            }
        }
        Some(self.index)
    }

    fn start(&mut self, now: Instant) -> BeginOutcome {
        if self.is_playing() {
            return BeginOutcome::AlreadyPlaying;
        }
        self.playback = Playback::Stepping {
            due: now + self.mode.frame_interval(),
        };
        BeginOutcome::Started
    }
}

#[inline]
fn next_due(due: Instant, now: Instant, interval: Duration) -> Instant {
    let next = due + interval;
    if next <= now {
        now + interval
    } else {
        next
    }
}
