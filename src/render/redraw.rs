use parking_lot::Mutex;

use crate::world::{BlockPos, SectionPos};

/// Why the host must rebuild a door's static mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedrawReason {
    /// The hide window ended; show the static mesh in its new state
    Reveal,
    /// The animation finished and its entry is gone
    Expired,
}

/// Request to rebuild the static mesh of both halves of a door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RedrawRequest {
    pub base: BlockPos,
    pub reason: RedrawReason,
}

impl RedrawReason {
    pub fn code(&self) -> i32 {
        match self {
            RedrawReason::Reveal => 0,
            RedrawReason::Expired => 1,
        }
    }
}

impl RedrawRequest {
    pub fn new(base: BlockPos, reason: RedrawReason) -> Self {
        Self { base, reason }
    }

    /// Lower and upper door blocks
    pub fn positions(&self) -> [BlockPos; 2] {
        [self.base, self.base.up()]
    }

    /// Chunk sections holding the door, without duplicates
    pub fn sections(&self) -> Vec<SectionPos> {
        let lower = self.base.section();
        let upper = self.base.up().section();
        if lower == upper {
            vec![lower]
        } else {
            vec![lower, upper]
        }
    }
}

/// Receives redraw requests from the animation registry.
///
/// Called synchronously from the query path with no registry lock held, so
/// implementations may call back into the registry.
pub trait RedrawSink: Send + Sync {
    fn request_redraw(&self, request: RedrawRequest);
}

/// Discards every request
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRedraw;

impl RedrawSink for NoRedraw {
    fn request_redraw(&self, _request: RedrawRequest) {}
}

/// Buffers requests until the host drains them on its render thread
#[derive(Debug, Default)]
pub struct RedrawQueue {
    pending: Mutex<Vec<RedrawRequest>>,
}

impl RedrawQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drain(&self) -> Vec<RedrawRequest> {
        std::mem::take(&mut *self.pending.lock())
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

impl RedrawSink for RedrawQueue {
    fn request_redraw(&self, request: RedrawRequest) {
        self.pending.lock().push(request);
    }
}
