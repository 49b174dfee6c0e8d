//! WebGPU rendering module
//!
//! The scene is rebuilt from the session every frame as a flat triangle list.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
