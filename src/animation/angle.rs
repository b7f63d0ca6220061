//! Door swing geometry
//!
//! Converts discrete door properties (facing, hinge side, open flag) plus
//! elapsed time into a rotation angle, and locates the block corner the door
//! rotates about. Everything here is a pure function of its inputs.

use std::time::Duration;

use super::easing::{ease, Easing};
use crate::world::{Facing, Hinge};

/// Angle of a fully open door, before the hinge sign is applied
pub const SWING_DEG: f32 = 90.0;

/// Block-local corner a door rotates about, each coordinate 0 or 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub x: f32,
    pub z: f32,
}

/// Horizontal offset that keeps a swinging door flush with its frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Inset {
    pub dx: f32,
    pub dz: f32,
}

impl Pivot {
    const fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }
}

/// Rotation handedness: +1 for left hinges, -1 for right hinges
pub fn angle_sign(hinge: Hinge) -> f32 {
    match hinge {
        Hinge::Left => 1.0,
        Hinge::Right => -1.0,
    }
}

/// Resting angle once the animation finishes
pub fn target_angle_deg(hinge: Hinge, opening: bool) -> f32 {
    if opening {
        SWING_DEG * angle_sign(hinge)
    } else {
        0.0
    }
}

/// Angle at `now` for an animation that started at `start`, using the
/// cubic ease-out curve. `duration` must be non-zero.
pub fn current_angle_deg(
    hinge: Hinge,
    opening: bool,
    start: Duration,
    now: Duration,
    duration: Duration,
) -> f32 {
    eased_angle_deg(hinge, opening, start, now, duration, Easing::CubicOut)
}

/// Same as [`current_angle_deg`] with a selectable curve
pub fn eased_angle_deg(
    hinge: Hinge,
    opening: bool,
    start: Duration,
    now: Duration,
    duration: Duration,
    easing: Easing,
) -> f32 {
    let elapsed = now.saturating_sub(start);
    let t = elapsed.as_secs_f32() / duration.as_secs_f32();
    let k = ease(t, easing);
    let target = SWING_DEG * angle_sign(hinge);
    if opening {
        k * target
    } else {
        (1.0 - k) * target
    }
}

/// Corner of the block that acts as the physical hinge
pub fn hinge_pivot(facing: Facing, hinge: Hinge) -> Pivot {
    match (facing, hinge) {
        (Facing::North, Hinge::Left) => Pivot::new(0.0, 1.0),
        (Facing::North, Hinge::Right) => Pivot::new(1.0, 1.0),
        (Facing::East, Hinge::Left) => Pivot::new(0.0, 0.0),
        (Facing::East, Hinge::Right) => Pivot::new(0.0, 1.0),
        (Facing::South, Hinge::Left) => Pivot::new(1.0, 0.0),
        (Facing::South, Hinge::Right) => Pivot::new(0.0, 0.0),
        (Facing::West, Hinge::Left) => Pivot::new(1.0, 1.0),
        (Facing::West, Hinge::Right) => Pivot::new(1.0, 0.0),
    }
}

/// Cosmetic sideways shift toward the hinge as the door swings.
///
/// The magnitude is `thickness * sin(|angle|)`. Doors facing north or south
/// shift along X, doors facing east or west along Z, in the direction of the
/// block side holding the pivot.
pub fn lateral_inset_toward_hinge(facing: Facing, hinge: Hinge, angle_deg: f32, thickness: f32) -> Inset {
    let inset = thickness * angle_deg.abs().to_radians().sin();
    let pivot = hinge_pivot(facing, hinge);
    if facing.is_north_south() {
        Inset {
            dx: if pivot.x < 0.5 { inset } else { -inset },
            dz: 0.0,
        }
    } else {
        Inset {
            dx: 0.0,
            dz: if pivot.z < 0.5 { inset } else { -inset },
        }
    }
}
