use std::cell::Cell;
use std::rc::Rc;

/// Why the scene is frozen. Reasons are tracked independently so closing an
/// overlay mid-drag does not unfreeze the other sprites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseReason {
    /// A sprite is being dragged. Counted, so two simultaneous touch drags
    /// keep the scene frozen until both end.
    Drag,
    /// A full-page overlay (catalogue, about) is open.
    Overlay,
}

#[derive(Debug, Default)]
struct PauseState {
    drags: Cell<u32>,
    overlay: Cell<bool>,
}

/// Shared pause state read by every sprite's step. Cloning shares the same
/// state; there is one context per scene.
#[derive(Clone, Debug, Default)]
pub struct PauseContext {
    state: Rc<PauseState>,
}

impl PauseContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.state.drags.get() > 0 || self.state.overlay.get()
    }

    #[inline]
    pub fn is_held(&self, reason: PauseReason) -> bool {
        match reason {
            PauseReason::Drag => self.state.drags.get() > 0,
            PauseReason::Overlay => self.state.overlay.get(),
        }
    }

    pub fn hold(&self, reason: PauseReason) {
        match reason {
            PauseReason::Drag => self.state.drags.set(self.state.drags.get() + 1),
            PauseReason::Overlay => self.state.overlay.set(true),
        }
    }

    pub fn release(&self, reason: PauseReason) {
        match reason {
            PauseReason::Drag => self
                .state
                .drags
                .set(self.state.drags.get().saturating_sub(1)),
            PauseReason::Overlay => self.state.overlay.set(false),
        }
    }

    /// Drop every hold. Used when the whole sprite set is replaced.
    pub fn clear(&self) {
        self.state.drags.set(0);
        self.state.overlay.set(false);
    }
}
