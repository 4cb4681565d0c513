use super::assets::DisplayPolicy;
use super::constants::{DEFAULT_COLLECTION, FILE_EXTENSION, MAX_CHECK};
use super::spin::SpinMode;

/// Per-deployment engine settings. The web front-end starts from `Default`
/// and applies overrides found on the page's `<body>` data attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub spin_mode: SpinMode,
    pub initial_collection: String,
    pub max_check: u32,
    pub extension: String,
    pub display: DisplayPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            spin_mode: SpinMode::default(),
            initial_collection: DEFAULT_COLLECTION.to_string(),
            max_check: MAX_CHECK,
            extension: FILE_EXTENSION.to_string(),
            display: DisplayPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Apply optional page-supplied overrides. Unknown or empty values are
    /// logged and ignored.
    pub fn with_overrides(mut self, spin_mode: Option<&str>, collection: Option<&str>) -> Self {
        if let Some(raw) = spin_mode.filter(|s| !s.trim().is_empty()) {
            match raw.parse::<SpinMode>() {
                Ok(mode) => self.spin_mode = mode,
                Err(e) => log::warn!("[config] {e}; keeping {}", self.spin_mode.name()),
            }
        }
        if let Some(path) = collection.map(str::trim).filter(|s| !s.is_empty()) {
            self.initial_collection = normalize_collection_path(path);
        }
        self
    }
}

/// Collection paths are URL prefixes and must end with `/`.
pub fn normalize_collection_path(path: &str) -> String {
    let path = path.trim();
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}
