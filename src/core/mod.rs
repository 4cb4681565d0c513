pub mod assets;
pub mod collection;
pub mod config;
pub mod constants;
pub mod pause;
pub mod physics;
pub mod spin;
pub mod sprite;

pub use assets::*;
pub use collection::*;
pub use config::*;
pub use pause::*;
pub use physics::{Body, Bounds};
pub use spin::*;
pub use sprite::*;
