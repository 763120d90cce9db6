pub mod api;
pub mod core;
pub mod input;
pub mod render;
pub mod roster;

// Re-export key types at crate root for convenience
pub use api::sim::{Orrery, ViewConfig};
pub use api::types::{BodyId, Rgba};
pub use core::body::{Body, Satellite};
pub use core::camera::CameraState;
pub use core::scene::Scene;
pub use core::time::FpsMeter;
pub use input::controls::{Control, ControlSet};
pub use render::buffer::{CircleInstance, LineVertex, VertexSurface};
pub use render::frame::render_frame;
pub use render::projector::{depth_factor, project, rendered_radius, OrbitPath};
pub use render::surface::{CommandList, DrawCommand, Surface};
pub use roster::{BodyDef, RosterError, SatelliteDef, SystemDef};
