/// Sprite physics and spin playback tuning constants.
///
/// Velocities are expressed in CSS pixels per 60 Hz tick so the numbers read
/// the same as the per-frame motion they describe.

// Speed governor
pub const CRUISE_SPEED_MAX: f32 = 2.0; // above this the sprite is damped
pub const CRUISE_SPEED_MIN: f32 = 0.5; // below this the sprite is nudged
pub const OVERSPEED_DAMPING: f32 = 0.96;
pub const UNDERSPEED_BOOST: f32 = 1.01;

// Tick normalization
pub const TICK_HZ: f32 = 60.0;
pub const MAX_TICKS_PER_STEP: f32 = 3.0; // caps catch-up after a stalled tab

// Throw/release
pub const THROW_SPEED_MAX: f32 = 20.0;
pub const RESTING_SPEED_EPSILON: f32 = 0.1; // per-axis "not moving" threshold
pub const DRIFT_SPEED_SPAN: f32 = 1.0; // random drift components in [-span, span)

// Spawn
pub const SPAWN_MARGIN_PX: f32 = 200.0;
pub const FADE_IN_DELAY_MAX_MS: f64 = 500.0;
pub const DRAG_Z_INDEX: &str = "1000";

// Spin playback cadence
pub const LOOP_FRAME_MS: u64 = 250;
pub const PENDULUM_FRAME_MS: u64 = 180;
pub const PENDULUM_DWELL_MS: u64 = 1000;
pub const MAX_SPIN_FRAMES: u32 = 30; // highest `{id}_{k}` suffix probed

// Collections and assets
pub const MAX_CHECK: u32 = 100; // highest base image index probed per collection
pub const FILE_EXTENSION: &str = ".png";
pub const DEFAULT_COLLECTION: &str = "ceramics/fantasy/";
// Catalogue URL plan, consumed by the host page's catalogue script
pub const CATALOGUE_DETAIL_IMAGES: u32 = 4;
pub const CATALOGUE_PATHS: [&str; 2] = ["sell/available/", "sell/unavailable/"];

// Display sizing
pub const BASE_DISPLAY_WIDTH_PX: f32 = 180.0;
pub const COMPACT_DISPLAY_WIDTH_PX: f32 = 120.0;
pub const COMPACT_VIEWPORT_BREAKPOINT_PX: f32 = 768.0;
pub const GLAZED_SCALE: f32 = 1.8;
