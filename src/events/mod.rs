pub mod nav;
pub mod pointer;

pub use nav::{mark_active, wire_nav_links};
pub use pointer::wire_sprite_pointer;
