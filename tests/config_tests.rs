// Host-side tests for constants, display sizing and engine configuration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod page {
    include!("../src/constants.rs");
}
mod constants {
    include!("../src/core/constants.rs");
}
mod assets {
    include!("../src/core/assets.rs");
}
mod spin {
    include!("../src/core/spin.rs");
}
mod config {
    include!("../src/core/config.rs");
}

use assets::*;
use config::*;
use constants::*;
use glam::Vec2;
use spin::SpinMode;

#[test]
#[allow(clippy::assertions_on_constants)]
fn speed_constants_form_a_sensible_band() {
    assert!(CRUISE_SPEED_MIN > 0.0);
    assert!(CRUISE_SPEED_MIN < CRUISE_SPEED_MAX);
    assert!(CRUISE_SPEED_MAX < THROW_SPEED_MAX);

    // damping shrinks, boost grows, both gently
    assert!(OVERSPEED_DAMPING > 0.9 && OVERSPEED_DAMPING < 1.0);
    assert!(UNDERSPEED_BOOST > 1.0 && UNDERSPEED_BOOST < 1.1);

    // the drift floor can never be mistaken for a resting sprite forever
    assert!(RESTING_SPEED_EPSILON < DRIFT_SPEED_SPAN);
    assert!(MAX_TICKS_PER_STEP >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn spin_cadence_constants() {
    assert!(PENDULUM_FRAME_MS < LOOP_FRAME_MS);
    assert!(PENDULUM_DWELL_MS > PENDULUM_FRAME_MS);
    assert!(MAX_SPIN_FRAMES > 0);
    assert!(MAX_CHECK >= 1);
}

#[test]
fn page_contract_selectors_match_attributes() {
    assert_eq!(page::OVERLAY_OPEN_SELECTOR, format!("[{}]", page::OVERLAY_OPEN_ATTR));
    assert_eq!(page::OVERLAY_CLOSE_SELECTOR, format!("[{}]", page::OVERLAY_CLOSE_ATTR));
    assert!(page::NAV_FOLDER_ATTR.starts_with("data-"));
    assert!(page::SPIN_MODE_ATTR.starts_with("data-"));
    assert!(page::COLLECTION_ATTR.starts_with("data-"));
}

#[test]
fn image_urls_follow_naming_convention() {
    assert_eq!(base_image_url("ceramics/fantasy/", 12, ".png"), "ceramics/fantasy/12.png");
    assert_eq!(spin_frame_url("ceramics/fantasy/", 3, 2, ".png"), "ceramics/fantasy/3_2.png");
    assert_eq!(
        catalogue_detail_urls("sell/available/", 8, FILE_EXTENSION),
        vec![
            "sell/available/8_1.png",
            "sell/available/8_2.png",
            "sell/available/8_3.png",
            "sell/available/8_4.png",
        ]
    );
    assert!(CATALOGUE_PATHS.iter().all(|p| p.ends_with('/')));
}

#[test]
fn display_width_depends_on_viewport_and_collection() {
    let policy = DisplayPolicy::default();
    let natural = Vec2::new(600.0, 900.0);
    let roomy = Vec2::new(4000.0, 4000.0);

    let wide = policy.display_size(natural, "ceramics/fantasy/", 1280.0, roomy);
    assert_eq!(wide, Vec2::new(BASE_DISPLAY_WIDTH_PX, BASE_DISPLAY_WIDTH_PX * 1.5));

    let compact = policy.display_size(natural, "ceramics/fantasy/", 400.0, roomy);
    assert_eq!(compact.x, COMPACT_DISPLAY_WIDTH_PX);

    let glazed = policy.display_size(natural, "ceramics/glazed/", 1280.0, roomy);
    assert!((glazed.x - BASE_DISPLAY_WIDTH_PX * GLAZED_SCALE).abs() < 1e-3);
    assert!((glazed.y / glazed.x - 1.5).abs() < 1e-4);
}

#[test]
fn display_size_never_exceeds_playable_area() {
    let policy = DisplayPolicy::default();
    let tall = Vec2::new(100.0, 1000.0);
    let max = Vec2::new(800.0, 500.0);
    let size = policy.display_size(tall, "ceramics/glazed/", 1024.0, max);
    assert!(size.x <= max.x + 1e-3 && size.y <= max.y + 1e-3);
    assert!((size.y / size.x - 10.0).abs() < 1e-3);

    assert_eq!(policy.display_size(Vec2::ZERO, "x/", 1024.0, max), Vec2::ZERO);
}

#[test]
fn scale_overrides_are_configurable() {
    let policy = DisplayPolicy {
        scale_overrides: vec![("big".to_string(), 2.0), ("b".to_string(), 0.5)],
        ..DisplayPolicy::default()
    };
    assert_eq!(policy.scale_for("ceramics/big/"), 2.0);
    assert_eq!(policy.scale_for("ceramics/blue/"), 0.5);
    assert_eq!(policy.scale_for("ceramics/glazed/"), 1.0);
}

#[test]
fn default_config_matches_constants() {
    let cfg = EngineConfig::default();
    assert_eq!(cfg.spin_mode, SpinMode::Pendulum);
    assert_eq!(cfg.initial_collection, DEFAULT_COLLECTION);
    assert_eq!(cfg.max_check, MAX_CHECK);
    assert_eq!(cfg.extension, FILE_EXTENSION);
}

#[test]
fn page_overrides_apply_and_bad_values_are_ignored() {
    let cfg = EngineConfig::default().with_overrides(Some("looping"), Some("ceramics/glazed"));
    assert_eq!(cfg.spin_mode, SpinMode::Looping);
    assert_eq!(cfg.initial_collection, "ceramics/glazed/");

    let cfg = EngineConfig::default().with_overrides(Some("wobble"), Some("  "));
    assert_eq!(cfg, EngineConfig::default());

    let cfg = EngineConfig::default().with_overrides(None, None);
    assert_eq!(cfg, EngineConfig::default());
}

#[test]
fn collection_paths_gain_a_trailing_slash() {
    assert_eq!(normalize_collection_path("ceramics/fantasy"), "ceramics/fantasy/");
    assert_eq!(normalize_collection_path(" ceramics/fantasy/ "), "ceramics/fantasy/");
}
