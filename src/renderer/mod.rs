//! Vertex generation for 2D shapes
//!
//! Everything here emits CPU-side vertex lists; uploading and drawing them
//! is the consuming pipeline's job.

pub mod frame;
pub mod shapes;
pub mod vertex;

pub use frame::Frame;
pub use vertex::{Vertex, colors};
