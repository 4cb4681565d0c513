// Owns the live sprite set for the active collection and the generation
// counter that fences off loads issued for a collection that is no longer
// shown.
//
// Image loads cannot be cancelled, so every probe carries the generation it
// was issued under and its completion is admitted only while that generation
// is still current.

use super::assets::base_image_url;
use super::pause::PauseContext;
use fnv::FnvHashSet;
use thiserror::Error;

/// Snapshot of the controller's switch counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeRequest {
    pub generation: Generation,
    pub id: u32,
    pub url: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdmitError {
    #[error("load from generation {} arrived after switch to generation {}", token.0, current.0)]
    Stale {
        token: Generation,
        current: Generation,
    },
    #[error("sprite {0} already exists in this generation")]
    Duplicate(u32),
}

/// Result of a collection switch: the sprites to tear down and the probes to
/// issue for the new collection.
pub struct SwitchPlan<S> {
    pub retired: Vec<S>,
    pub probes: Vec<ProbeRequest>,
}

pub struct CollectionController<S> {
    active_path: String,
    generation: Generation,
    sprites: Vec<S>,
    admitted: FnvHashSet<u32>,
    pause: PauseContext,
    max_check: u32,
    extension: String,
}

impl<S> CollectionController<S> {
    pub fn new(pause: PauseContext, max_check: u32, extension: &str) -> Self {
        Self {
            active_path: String::new(),
            generation: Generation::default(),
            sprites: Vec::new(),
            admitted: FnvHashSet::default(),
            pause,
            max_check,
            extension: extension.to_string(),
        }
    }

    pub fn active_path(&self) -> &str {
        &self.active_path
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn pause(&self) -> &PauseContext {
        &self.pause
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[inline]
    pub fn is_current(&self, token: Generation) -> bool {
        token == self.generation
    }

    /// Navigation only switches when a different collection is picked.
    pub fn should_switch(&self, path: &str) -> bool {
        path != self.active_path
    }

    /// Retire every sprite, move to `new_path` under a fresh generation, clear
    /// the pause state, and plan one probe per index in `1..=max_check`.
    pub fn switch_collection(&mut self, new_path: &str) -> SwitchPlan<S> {
        let retired = std::mem::take(&mut self.sprites);
        self.admitted.clear();
        self.active_path = new_path.to_string();
        self.generation = Generation(self.generation.0 + 1);
        self.pause.clear();
        log::info!(
            "[collection] switching to {} (generation {}, retiring {})",
            self.active_path,
            self.generation.0,
            retired.len()
        );

        let probes = (1..=self.max_check)
            .map(|id| ProbeRequest {
                generation: self.generation,
                id,
                url: base_image_url(&self.active_path, id, &self.extension),
            })
            .collect();
        SwitchPlan { retired, probes }
    }

    /// Add a sprite whose load completed under `token`. Stale and duplicate
    /// completions are rejected and the sprite is handed back unused.
    pub fn admit(&mut self, token: Generation, id: u32, sprite: S) -> Result<&S, (AdmitError, S)> {
        if !self.is_current(token) {
            return Err((
                AdmitError::Stale {
                    token,
                    current: self.generation,
                },
                sprite,
            ));
        }
        if !self.admitted.insert(id) {
            return Err((AdmitError::Duplicate(id), sprite));
        }
        self.sprites.push(sprite);
        Ok(&self.sprites[self.sprites.len() - 1])
    }

    pub fn sprites(&self) -> &[S] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
