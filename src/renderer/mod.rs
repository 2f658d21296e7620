//! WebGPU rendering module
//!
//! The scene and HUD are built from the round state by pure functions; the
//! pipeline only uploads and draws the resulting triangles.

pub mod hud;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;
pub mod viewport;

pub use hud::HudText;
pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
pub use viewport::Viewport;
