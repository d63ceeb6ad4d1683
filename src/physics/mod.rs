//! Boundary types for the external physics engine
//!
//! The engine itself (body stepping, collision resolution) is out of scope;
//! this module owns the handle vocabulary the core exchanges with it and the
//! typed lookup tables that replace opaque user-data pointers: every body
//! carries a [`BodyTag`] discriminant and every chain shape maps back to its
//! owning obstacle slot.

use std::collections::HashMap;

/// Opaque handle to an engine body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u64);

/// Opaque handle to an engine collision shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u64);

/// Index of a chain obstacle in the world arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainHandle(pub usize);

/// Discriminant attached to every static body the core creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyTag {
    /// Primitive box obstacle
    Block,
    /// Chain-shaped obstacle (contact coloring applies)
    Chain,
}

/// Two shapes that began or ceased touching during a step
#[derive(Debug, Clone, Copy)]
pub struct ContactPair {
    pub shape_a: ShapeId,
    pub shape_b: ShapeId,
}

/// Per-step contact event batch reported by the engine
#[derive(Debug, Clone, Default)]
pub struct ContactEvents {
    pub begin: Vec<ContactPair>,
    pub end: Vec<ContactPair>,
}

/// Creation and event surface the core drives on the engine.
///
/// `create_chain_shape` receives the loop-closed point list (logical
/// boundary plus two trailing copies of the first point).
pub trait PhysicsBackend {
    fn create_static_body(&mut self) -> BodyId;
    fn create_box_shape(&mut self, body: BodyId, half_w: f32, half_h: f32) -> ShapeId;
    fn create_chain_shape(&mut self, body: BodyId, loop_points: &[glam::Vec2]) -> ShapeId;
    /// Drain the contact events accumulated since the last call
    fn contact_events(&mut self) -> ContactEvents;
}

/// Typed handle registry populated at obstacle creation time
#[derive(Debug, Default)]
pub struct BodyRegistry {
    shape_bodies: HashMap<ShapeId, BodyId>,
    body_tags: HashMap<BodyId, BodyTag>,
    chain_shapes: HashMap<ShapeId, ChainHandle>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_block(&mut self, body: BodyId, shape: ShapeId) {
        self.body_tags.insert(body, BodyTag::Block);
        self.shape_bodies.insert(shape, body);
    }

    pub fn register_chain(&mut self, body: BodyId, shape: ShapeId, chain: ChainHandle) {
        self.body_tags.insert(body, BodyTag::Chain);
        self.shape_bodies.insert(shape, body);
        self.chain_shapes.insert(shape, chain);
    }

    /// Resolve a shape to its owning body
    pub fn body_of(&self, shape: ShapeId) -> Option<BodyId> {
        self.shape_bodies.get(&shape).copied()
    }

    pub fn tag_of(&self, body: BodyId) -> Option<BodyTag> {
        self.body_tags.get(&body).copied()
    }

    /// Chain obstacle owning the given shape, if its body is tagged as a
    /// chain. Shapes from bodies the core never registered (the player, for
    /// instance) resolve to None.
    pub fn chain_of(&self, shape: ShapeId) -> Option<ChainHandle> {
        let body = self.body_of(shape)?;
        if self.tag_of(body) != Some(BodyTag::Chain) {
            return None;
        }
        self.chain_shapes.get(&shape).copied()
    }
}
