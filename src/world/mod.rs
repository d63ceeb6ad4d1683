//! Obstacle world
//!
//! Owns the fixed-capacity obstacle arenas and the handle registry, drives
//! the physics backend at creation time, and drains its contact events once
//! per step. Bodies are only ever freed when the world drops.

pub mod arena;
pub mod authoring;
pub mod contact;
pub mod obstacle;
pub mod scene;

pub use arena::Arena;
pub use authoring::AuthoringSession;
pub use obstacle::{BoxObstacle, ChainObstacle, close_loop};
pub use scene::{BoxDef, ChainDef, SceneDef, demo_scene};

use glam::Vec2;

use crate::consts::{MAX_CHAIN_OBSTACLES, MAX_OBSTACLES};
use crate::physics::{BodyRegistry, ChainHandle, PhysicsBackend};

pub struct World {
    boxes: Arena<BoxObstacle>,
    chains: Arena<ChainObstacle>,
    registry: BodyRegistry,
}

impl World {
    pub fn new() -> Self {
        Self {
            boxes: Arena::with_capacity(MAX_OBSTACLES),
            chains: Arena::with_capacity(MAX_CHAIN_OBSTACLES),
            registry: BodyRegistry::new(),
        }
    }

    /// Create a static box obstacle. Panics when the box arena is full.
    pub fn add_box(
        &mut self,
        backend: &mut impl PhysicsBackend,
        pos: Vec2,
        dim: Vec2,
        color: [f32; 4],
    ) -> usize {
        let body = backend.create_static_body();
        let shape = backend.create_box_shape(body, dim.x / 2.0, dim.y / 2.0);

        let slot = self.boxes.push(BoxObstacle {
            body,
            shape,
            pos,
            dim,
            color,
        });
        self.registry.register_block(body, shape);
        slot
    }

    /// Create a chain obstacle from a closed boundary. The physics engine
    /// receives the loop-closed point list; the obstacle keeps only the
    /// logical boundary. Panics when the chain arena is full or the
    /// boundary exceeds the point cap.
    pub fn add_chain(
        &mut self,
        backend: &mut impl PhysicsBackend,
        points: &[Vec2],
        color: [f32; 4],
        clockwise: bool,
        concave: bool,
    ) -> ChainHandle {
        let body = backend.create_static_body();
        let shape = backend.create_chain_shape(body, &close_loop(points));

        let chain = ChainObstacle::new(body, shape, points, color, clockwise, concave);
        let slot = self.chains.push(chain);
        let handle = ChainHandle(slot);
        self.registry.register_chain(body, shape, handle);

        log::info!("chain obstacle {} created with {} points", slot, points.len());
        handle
    }

    /// Commit an authoring session as a new chain obstacle. Returns None
    /// (leaving the session intact) below the minimum point count.
    pub fn commit_session(
        &mut self,
        session: &mut AuthoringSession,
        backend: &mut impl PhysicsBackend,
        color: [f32; 4],
        clockwise: bool,
        concave: bool,
    ) -> Option<ChainHandle> {
        let boundary = session.take_boundary()?;
        for p in &boundary {
            log::info!("{:.2}, {:.2}", p.x, p.y);
        }
        Some(self.add_chain(backend, &boundary, color, clockwise, concave))
    }

    /// Instantiate every obstacle in a scene definition
    pub fn load_scene(&mut self, backend: &mut impl PhysicsBackend, scene: &SceneDef) {
        for def in &scene.boxes {
            self.add_box(backend, def.pos, def.dim, def.color);
        }
        for def in &scene.chains {
            self.add_chain(backend, &def.points, def.color, def.clockwise, def.concave);
        }
    }

    /// Pull the step's contact event batch and apply chain recoloring.
    /// Call once per simulation step, after the engine has stepped.
    pub fn drain_contacts(&mut self, backend: &mut impl PhysicsBackend) {
        let events = backend.contact_events();
        contact::apply_contact_events(&mut self.chains, &self.registry, &events);
    }

    pub fn boxes(&self) -> &Arena<BoxObstacle> {
        &self.boxes
    }

    pub fn chains(&self) -> &Arena<ChainObstacle> {
        &self.chains
    }

    pub fn chain(&self, handle: ChainHandle) -> Option<&ChainObstacle> {
        self.chains.get(handle.0)
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
