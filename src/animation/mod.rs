//! Door swing animation core
//!
//! Pure swing geometry (easing, hinge pivots, lateral inset) plus the
//! registry that tracks, deduplicates and retires in-flight animations.

mod angle;
mod clock;
mod easing;
mod registry;

pub use angle::{
    angle_sign, current_angle_deg, eased_angle_deg, hinge_pivot, lateral_inset_toward_hinge,
    target_angle_deg, Inset, Pivot, SWING_DEG,
};
#[cfg(not(target_arch = "wasm32"))]
pub use clock::MonotonicClock;
#[cfg(target_arch = "wasm32")]
pub use clock::PerformanceClock;
pub use clock::{system_clock, Clock, ManualClock, Timestamp};
pub use easing::{ease, ease01, Easing};
pub use registry::{AnimationEntry, AnimationRegistry};
