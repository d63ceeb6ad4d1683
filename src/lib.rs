//! Polyarena - 2D sandbox core: polygon triangulation, shape rendering,
//! and contact-driven obstacle coloring
//!
//! Core modules:
//! - `geom`: Ear-clipping triangulation and 2D predicates
//! - `renderer`: Vertex generation for filled shapes and outlines
//! - `physics`: Boundary types for the external physics engine (handles,
//!   contact event batches, typed body tags)
//! - `world`: Obstacle arenas, scene building, contact coloring
//!
//! The crate is pure in-memory computation: the physics engine that steps
//! bodies and the GPU pipeline that consumes vertex buffers live in the
//! enclosing application.

pub mod geom;
pub mod physics;
pub mod renderer;
pub mod world;

pub use geom::{Triangle, triangulate};
pub use renderer::Frame;
pub use world::World;

/// Capacity and buffer-sizing constants
pub mod consts {
    /// Maximum number of box obstacles per world
    pub const MAX_OBSTACLES: usize = 100;
    /// Maximum number of chain obstacles per world
    pub const MAX_CHAIN_OBSTACLES: usize = 100;
    /// Maximum logical boundary points per chain obstacle
    pub const MAX_CHAIN_POINTS: usize = 50;
    /// Extra point slots reserved per chain for loop closing.
    /// The physics chain gets the first point appended twice so the chain
    /// algorithm does not misread the final segment as touching the first.
    pub const LOOP_CLOSE_EXTRA: usize = 2;
    /// Triangle budget for a single concave fill
    pub const MAX_FILL_TRIANGLES: usize = 128;
}
