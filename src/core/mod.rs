pub mod capability;
pub mod character;
pub mod clock;
pub mod constants;
pub mod error;
pub mod mesh;
pub mod mount;
pub mod pointer;
pub mod rig;
pub mod scene;
pub mod spring;
pub mod surface;

pub use capability::*;
pub use character::*;
pub use clock::*;
pub use constants::*;
pub use error::*;
pub use mesh::*;
pub use mount::*;
pub use pointer::*;
pub use rig::*;
pub use scene::*;
pub use spring::*;
pub use surface::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
