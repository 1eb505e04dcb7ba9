pub mod constants;
pub mod controls;
pub mod error;
pub mod geometry;
pub mod instance;
pub mod layers;
pub mod mesh;
pub mod mode;
pub mod morph;
pub mod photo;
pub mod picking;
#[cfg(feature = "gpu")]
pub mod render;
pub mod scene;
pub mod seed;
pub mod snapshot;
pub mod state;
pub mod theme;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use constants::*;
pub use controls::*;
pub use error::*;
pub use instance::*;
pub use mode::*;
pub use morph::*;
pub use photo::{Photo, PhotoSummary};
pub use scene::*;
pub use snapshot::*;
pub use state::*;
pub use theme::*;
