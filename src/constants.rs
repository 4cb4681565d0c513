// Page contract shared by the web front-end: element ids, selectors, classes
// and data attributes the host HTML is expected to provide.

// Sprites
pub const SPRITE_CLASS: &str = "ceramic";
pub const SPRITE_ID_ATTR: &str = "data-id";

// Navigation
pub const NAV_BAR_ID: &str = "main-nav"; // its height is the top exclusion zone
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAV_FOLDER_ATTR: &str = "data-folder";
pub const MOBILE_TOGGLE_ID: &str = "mobile-toggle";
pub const MOBILE_OVERLAY_ID: &str = "mobile-overlay";

// Overlays (catalogue, about)
pub const OVERLAY_OPEN_SELECTOR: &str = "[data-overlay-open]";
pub const OVERLAY_OPEN_ATTR: &str = "data-overlay-open";
pub const OVERLAY_CLOSE_SELECTOR: &str = "[data-overlay-close]";
pub const OVERLAY_CLOSE_ATTR: &str = "data-overlay-close";

// Shared state classes
pub const ACTIVE_CLASS: &str = "active";
pub const OPEN_CLASS: &str = "open";

// Page-level configuration on <body>
pub const SPIN_MODE_ATTR: &str = "data-spin-mode";
pub const COLLECTION_ATTR: &str = "data-collection";
