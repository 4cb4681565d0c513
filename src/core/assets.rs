// Image naming convention and display sizing for collections.
//
// Base images live at `{path}{id}{ext}`, spin frames and catalogue detail
// shots at `{path}{id}_{k}{ext}`. Numbering is sparse; a missing index is
// normal and simply produces no sprite.

use super::constants::*;
use glam::Vec2;

#[inline]
pub fn base_image_url(path: &str, id: u32, ext: &str) -> String {
    format!("{path}{id}{ext}")
}

#[inline]
pub fn suffixed_image_url(path: &str, id: u32, k: u32, ext: &str) -> String {
    format!("{path}{id}_{k}{ext}")
}

/// Spin frame `k` (1-based) of sprite `id`.
#[inline]
pub fn spin_frame_url(path: &str, id: u32, k: u32, ext: &str) -> String {
    suffixed_image_url(path, id, k, ext)
}

/// Candidate detail image URLs for one catalogue item, `{id}_1..{id}_4`.
///
/// Nothing in the sprite engine calls this. It is the URL plan for the host
/// page's catalogue script, which builds the gallery markup itself.
pub fn catalogue_detail_urls(path: &str, id: u32, ext: &str) -> Vec<String> {
    (1..=CATALOGUE_DETAIL_IMAGES)
        .map(|k| suffixed_image_url(path, id, k, ext))
        .collect()
}

/// Display width policy: a base width (narrower on compact viewports) times
/// a per-collection scale factor.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayPolicy {
    pub base_width: f32,
    pub compact_width: f32,
    pub compact_breakpoint: f32,
    /// `(path substring, factor)`; the first matching entry wins.
    pub scale_overrides: Vec<(String, f32)>,
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self {
            base_width: BASE_DISPLAY_WIDTH_PX,
            compact_width: COMPACT_DISPLAY_WIDTH_PX,
            compact_breakpoint: COMPACT_VIEWPORT_BREAKPOINT_PX,
            scale_overrides: vec![("glazed".to_string(), GLAZED_SCALE)],
        }
    }
}

impl DisplayPolicy {
    pub fn scale_for(&self, collection: &str) -> f32 {
        self.scale_overrides
            .iter()
            .find(|(needle, _)| collection.contains(needle.as_str()))
            .map(|(_, factor)| *factor)
            .unwrap_or(1.0)
    }

    /// On-screen size for an image of `natural` px in `collection`, given the
    /// current viewport. Aspect ratio is preserved and the result never
    /// exceeds `max` (the playable area).
    pub fn display_size(&self, natural: Vec2, collection: &str, viewport_width: f32, max: Vec2) -> Vec2 {
        if natural.x <= 0.0 || natural.y <= 0.0 {
            return Vec2::ZERO;
        }
        let base = if viewport_width < self.compact_breakpoint {
            self.compact_width
        } else {
            self.base_width
        };
        let width = base * self.scale_for(collection);
        let mut size = Vec2::new(width, width * natural.y / natural.x);
        if max.x > 0.0 && max.y > 0.0 {
            let shrink = (max.x / size.x).min(max.y / size.y).min(1.0);
            size *= shrink;
        }
        size
    }
}
