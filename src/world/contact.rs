//! Contact-driven chain recoloring
//!
//! Each simulation step the engine reports which shape pairs began and
//! ceased touching. Any pair involving a chain obstacle flips that chain's
//! display color: contact color on begin, its base color back on end.
//! Everything else is ignored. Applying the same event twice is a no-op.

use crate::physics::{BodyRegistry, ContactEvents, ShapeId};
use crate::renderer::colors;
use crate::world::arena::Arena;
use crate::world::obstacle::ChainObstacle;

/// Apply one step's contact event batch to the chain arena.
pub fn apply_contact_events(
    chains: &mut Arena<ChainObstacle>,
    registry: &BodyRegistry,
    events: &ContactEvents,
) {
    for pair in &events.begin {
        if let Some(chain) = resolve_chain(chains, registry, pair.shape_a, pair.shape_b) {
            chain.color = colors::CHAIN_CONTACT;
        }
    }

    for pair in &events.end {
        if let Some(chain) = resolve_chain(chains, registry, pair.shape_a, pair.shape_b) {
            chain.color = chain.base_color;
        }
    }
}

/// The chain obstacle owning either shape of a contact pair, if any.
/// Checks shape A first, matching the engine's reporting order.
fn resolve_chain<'a>(
    chains: &'a mut Arena<ChainObstacle>,
    registry: &BodyRegistry,
    shape_a: ShapeId,
    shape_b: ShapeId,
) -> Option<&'a mut ChainObstacle> {
    let handle = registry
        .chain_of(shape_a)
        .or_else(|| registry.chain_of(shape_b))?;
    chains.get_mut(handle.0)
}
