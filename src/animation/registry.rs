//! In-flight door animations keyed by base block position
//!
//! The registry is the single owner of animation state. Producers (world
//! updates) call [`AnimationRegistry::begin`], the renderer polls
//! [`AnimationRegistry::compute_angle`] and the visibility predicates, and a
//! periodic tick calls [`AnimationRegistry::prune`].
//!
//! An entry is live while `now < start + duration`. Every query recomputes
//! that predicate; presence in the map alone means nothing. Dead entries are
//! removed either by [`AnimationRegistry::compute_angle`] (which also emits
//! the outstanding redraws) or silently by the sweep.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::angle::eased_angle_deg;
use super::clock::{Clock, Timestamp};
use crate::config::AnimationConfig;
use crate::render::{RedrawReason, RedrawRequest, RedrawSink};
use crate::world::{BlockPos, DoorHalf, Facing, Hinge};

/// State of one animated door, stored under its lower-half position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationEntry {
    /// Swinging from closed to open
    pub opening: bool,
    pub start: Timestamp,
    pub hinge: Hinge,
    pub facing: Facing,
    /// Always `Lower`
    pub half: DoorHalf,
    /// Static mesh stays suppressed until this point
    pub hide_until: Timestamp,
    /// Nominal end of the swing
    pub end: Timestamp,
    reveal_scheduled: bool,
}

impl AnimationEntry {
    pub fn new(opening: bool, start: Timestamp, hinge: Hinge, facing: Facing, config: &AnimationConfig) -> Self {
        let end = start + config.duration();
        let hide_until = end.saturating_sub(config.effective_hide_lead()).max(start);
        Self {
            opening,
            start,
            hinge,
            facing,
            half: DoorHalf::Lower,
            hide_until,
            end,
            reveal_scheduled: false,
        }
    }

    pub fn is_live(&self, now: Timestamp) -> bool {
        now < self.end
    }

    pub fn is_hidden(&self, now: Timestamp) -> bool {
        now < self.hide_until
    }

    pub fn elapsed(&self, now: Timestamp) -> Duration {
        now.saturating_sub(self.start)
    }

    /// Whether the reveal redraw has already been emitted
    pub fn reveal_scheduled(&self) -> bool {
        self.reveal_scheduled
    }

    fn same_trigger(&self, opening: bool, hinge: Hinge, facing: Facing) -> bool {
        self.opening == opening && self.hinge == hinge && self.facing == facing
    }
}

/// Owner of every in-flight door animation for one world session
pub struct AnimationRegistry {
    config: AnimationConfig,
    clock: Arc<dyn Clock>,
    redraw: Arc<dyn RedrawSink>,
    entries: Mutex<HashMap<BlockPos, AnimationEntry>>,
}

impl AnimationRegistry {
    pub fn new(config: AnimationConfig, clock: Arc<dyn Clock>, redraw: Arc<dyn RedrawSink>) -> Self {
        Self {
            config,
            clock,
            redraw,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Current reading of the registry's clock
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Start animating the door whose lower half sits at `pos`.
    ///
    /// Returns `false` when the trigger repeats the live entry's parameters
    /// within the dedupe window, in which case nothing changes.
    pub fn begin(&self, pos: BlockPos, opening: bool, hinge: Hinge, half: DoorHalf, facing: Facing) -> bool {
        let now = self.clock.now();
        let mut entries = self.entries.lock();

        if let Some(existing) = entries.get(&pos) {
            if existing.is_live(now)
                && existing.same_trigger(opening, hinge, facing)
                && existing.elapsed(now) < self.config.dedupe_window()
            {
                log::debug!(
                    "dedupe {} at {} (duplicate trigger suppressed)",
                    if opening { "OPEN" } else { "CLOSE" },
                    pos
                );
                return false;
            }
        }

        entries.insert(pos, AnimationEntry::new(opening, now, hinge, facing, &self.config));
        log::debug!(
            "begin {} at {} hinge={} half={} facing={} size={}",
            if opening { "OPEN" } else { "CLOSE" },
            pos,
            hinge,
            half,
            facing,
            entries.len()
        );
        true
    }

    /// Current swing angle in degrees, or `None` when `pos` is not animating.
    ///
    /// The first call at or past the hide threshold emits a `Reveal` redraw.
    /// A call at or past the end removes the entry and emits `Expired`.
    pub fn compute_angle(&self, pos: BlockPos) -> Option<f32> {
        self.compute_swing(pos).map(|(_, angle)| angle)
    }

    /// [`compute_angle`](Self::compute_angle) together with the entry it was
    /// computed from, read under the same lock.
    pub fn compute_swing(&self, pos: BlockPos) -> Option<(AnimationEntry, f32)> {
        let now = self.clock.now();
        let mut pending = Vec::new();

        let swing = {
            let mut entries = self.entries.lock();
            let entry = entries.get_mut(&pos)?;

            if !entry.reveal_scheduled && now >= entry.hide_until {
                entry.reveal_scheduled = true;
                pending.push(RedrawRequest::new(pos, RedrawReason::Reveal));
            }

            if entry.is_live(now) {
                let angle = eased_angle_deg(
                    entry.hinge,
                    entry.opening,
                    entry.start,
                    now,
                    self.config.duration(),
                    self.config.easing,
                );
                Some((*entry, angle))
            } else {
                entries.remove(&pos);
                pending.push(RedrawRequest::new(pos, RedrawReason::Expired));
                None
            }
        };

        self.dispatch(pending);
        swing
    }

    /// Drop every entry that outlived its duration at `now`. No redraws are
    /// emitted. Returns the number of entries removed.
    pub fn prune(&self, now: Timestamp) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, entry| now <= entry.end);
        before - entries.len()
    }

    /// [`prune`](Self::prune) at the clock's current time
    pub fn prune_expired(&self) -> usize {
        self.prune(self.clock.now())
    }

    /// Forget every animation, e.g. when joining or leaving a world
    pub fn clear_all(&self) {
        self.entries.lock().clear();
        log::debug!("clear_all");
    }

    /// Whether the static mesh at `pos` must be suppressed. `pos` may be
    /// either half of the door.
    pub fn is_hidden(&self, pos: BlockPos, now: Timestamp) -> bool {
        let entries = self.entries.lock();
        [pos, pos.down()]
            .iter()
            .any(|p| entries.get(p).is_some_and(|e| e.is_hidden(now)))
    }

    /// Whether a live animation covers `pos`, from either half
    pub fn is_animating(&self, pos: BlockPos, now: Timestamp) -> bool {
        let entries = self.entries.lock();
        [pos, pos.down()]
            .iter()
            .any(|p| entries.get(p).is_some_and(|e| e.is_live(now)))
    }

    /// Copy of the live entry at `pos`
    pub fn entry(&self, pos: BlockPos) -> Option<AnimationEntry> {
        let now = self.clock.now();
        self.entries.lock().get(&pos).filter(|e| e.is_live(now)).copied()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        let now = self.clock.now();
        self.entries.lock().values().filter(|e| e.is_live(now)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every position holding an entry, including dead ones that no
    /// [`compute_angle`](Self::compute_angle) call has reaped yet.
    ///
    /// Renderers walk this and query each angle so that doors first seen at or
    /// past their end still emit both of their redraws.
    pub fn positions(&self) -> Vec<BlockPos> {
        self.entries.lock().keys().copied().collect()
    }

    /// Visit a snapshot of the live entries.
    ///
    /// Dead entries are skipped but left in place for `compute_angle` or the
    /// sweep to remove. The lock is released before `visit` runs, so the
    /// visitor may call back into the registry.
    pub fn for_each_active<F>(&self, mut visit: F)
    where
        F: FnMut(BlockPos, &AnimationEntry),
    {
        let now = self.clock.now();
        let snapshot: Vec<(BlockPos, AnimationEntry)> = self
            .entries
            .lock()
            .iter()
            .filter(|(_, entry)| entry.is_live(now))
            .map(|(pos, entry)| (*pos, *entry))
            .collect();

        for (pos, entry) in &snapshot {
            visit(*pos, entry);
        }
    }

    fn dispatch(&self, requests: Vec<RedrawRequest>) {
        for request in requests {
            log::trace!("redraw {:?} at {}", request.reason, request.base);
            self.redraw.request_redraw(request);
        }
    }
}
