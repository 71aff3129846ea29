pub mod components;
pub mod config;
pub mod easing;
pub mod field;
pub mod gate;
pub mod magnet;
pub mod menu;
pub mod reveal;
pub mod tilt;

pub use components::*;
pub use config::*;
pub use easing::*;
pub use field::*;
pub use gate::*;
pub use menu::*;
