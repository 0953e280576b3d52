//! WebGPU rendering module
//!
//! Flat-colored triangles: shapes are built on the CPU each frame from a
//! `Snapshot` and uploaded as one vertex buffer.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
