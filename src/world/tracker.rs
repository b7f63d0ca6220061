//! Turns world block updates into door animations
//!
//! The host hands over every decoded door block update. The tracker remembers
//! the last open flag it saw per position and only starts an animation when
//! that flag flips. Updates for the upper half animate the base position, so
//! both halves of one toggle collapse into a single (deduplicated) entry.

use std::collections::HashMap;

use parking_lot::Mutex;

use super::{BlockPos, DoorHalf, DoorState};
use crate::animation::AnimationRegistry;

/// Last open flag seen per door block.
///
/// Positions are only dropped by [`forget`](Self::forget) or
/// [`clear`](Self::clear). The host must call `forget` when a door block is
/// removed or replaced, otherwise the map keeps growing for the whole session.
#[derive(Debug, Default)]
pub struct DoorStateTracker {
    /// Open flag per position, lower and upper halves keyed separately
    known_open: Mutex<HashMap<BlockPos, bool>>,
}

impl DoorStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the door state now at `pos`. Returns the base position when an
    /// open/close transition started an animation.
    ///
    /// A position seen for the first time counts as previously closed.
    pub fn observe(&self, registry: &AnimationRegistry, pos: BlockPos, state: DoorState) -> Option<BlockPos> {
        let was_open = self
            .known_open
            .lock()
            .insert(pos, state.open)
            .unwrap_or(false);

        log::debug!("door at {} was_open={} is_open={}", pos, was_open, state.open);
        if was_open == state.open {
            return None;
        }

        let base = match state.half {
            DoorHalf::Upper => pos.down(),
            DoorHalf::Lower => pos,
        };
        registry.begin(base, state.open, state.hinge, DoorHalf::Lower, state.facing);
        Some(base)
    }

    /// Last open flag seen at `pos`
    pub fn known_open(&self, pos: BlockPos) -> Option<bool> {
        self.known_open.lock().get(&pos).copied()
    }

    /// Forget a position, e.g. when its block stopped being a door
    pub fn forget(&self, pos: BlockPos) {
        self.known_open.lock().remove(&pos);
    }

    pub fn clear(&self) {
        self.known_open.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.known_open.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.known_open.lock().is_empty()
    }
}
