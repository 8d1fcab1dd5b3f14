//! WebGPU rendering module
//!
//! A single position+color pipeline; all shapes are tessellated on the CPU
//! each frame from the simulation's `Frame` snapshot.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::frame_vertices;
pub use vertex::Vertex;
