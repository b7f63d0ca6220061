//! Model transforms for the rotating door overlay
//!
//! While a door animates, the host draws the closed-door model of both halves
//! with the transform produced here instead of the static mesh. Transforms
//! are camera-relative so block coordinates far from the origin keep their
//! precision.

use crate::animation::{hinge_pivot, lateral_inset_toward_hinge, AnimationRegistry};
use crate::math::{DVec3, Mat4};
use crate::world::{BlockPos, DoorHalf, Facing, Hinge};

/// Horizontal nudge toward the camera so the overlay never z-fights the frame
pub const Z_FIGHT_OFFSET: f64 = 0.0005;

/// One door block to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayHalf {
    pub pos: BlockPos,
    pub half: DoorHalf,
    pub transform: Mat4,
}

/// Everything needed to draw one animated door this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorOverlay {
    pub base: BlockPos,
    pub angle_deg: f32,
    pub hinge: Hinge,
    pub facing: Facing,
    pub lower: OverlayHalf,
    pub upper: OverlayHalf,
}

/// Transform for the closed-door model of the block at `pos`, swung to
/// `angle_deg` about its hinge.
pub fn half_transform(
    pos: BlockPos,
    camera: DVec3,
    facing: Facing,
    hinge: Hinge,
    angle_deg: f32,
    thickness: f32,
) -> Mat4 {
    let origin = DVec3::new(pos.x as f64, pos.y as f64, pos.z as f64);

    let to_camera_x = camera.x - (origin.x + 0.5);
    let to_camera_z = camera.z - (origin.z + 0.5);
    let len = to_camera_x.hypot(to_camera_z);
    let (ex, ez) = if len > 1.0e-6 {
        (to_camera_x / len * Z_FIGHT_OFFSET, to_camera_z / len * Z_FIGHT_OFFSET)
    } else {
        (0.0, 0.0)
    };

    let rel = origin - camera;
    let rel = DVec3::new(rel.x + ex, rel.y, rel.z + ez).as_vec3();

    let inset = lateral_inset_toward_hinge(facing, hinge, angle_deg, thickness);
    let pivot = hinge_pivot(facing, hinge);

    Mat4::translation(rel.x, rel.y, rel.z)
        .translate(inset.dx, 0.0, inset.dz)
        .translate(pivot.x, 0.0, pivot.z)
        .rotate_y_deg(angle_deg)
        .translate(-pivot.x, 0.0, -pivot.z)
}

/// Overlays for every door animating right now.
///
/// Queries the angle of every keyed position, so this call also drives the
/// registry's reveal and expiry redraws.
pub fn collect_overlays(registry: &AnimationRegistry, camera: DVec3) -> Vec<DoorOverlay> {
    let thickness = registry.config().door_thickness;
    let mut overlays = Vec::new();

    for base in registry.positions() {
        let Some((entry, angle_deg)) = registry.compute_swing(base) else {
            continue;
        };
        let make_half = |pos: BlockPos, half: DoorHalf| OverlayHalf {
            pos,
            half,
            transform: half_transform(pos, camera, entry.facing, entry.hinge, angle_deg, thickness),
        };
        overlays.push(DoorOverlay {
            base,
            angle_deg,
            hinge: entry.hinge,
            facing: entry.facing,
            lower: make_half(base, DoorHalf::Lower),
            upper: make_half(base.up(), DoorHalf::Upper),
        });
    }

    overlays
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::animation::ManualClock;
    use crate::config::{AnimationConfig, DOOR_THICKNESS};
    use crate::math::Vec3;
    use crate::render::{RedrawQueue, RedrawReason, RedrawRequest};

    fn close(a: Vec3, b: Vec3) -> bool {
        a.distance(&b) < 1e-4
    }

    #[test]
    fn test_closed_door_is_plain_translation() {
        // Camera straight above the block centre: no z-fight nudge
        let camera = DVec3::new(10.5, 80.0, 20.5);
        let pos = BlockPos::new(10, 64, 20);
        let m = half_transform(pos, camera, Facing::North, Hinge::Left, 0.0, DOOR_THICKNESS);

        assert!(close(m.translation_part(), Vec3::new(-0.5, -16.0, -0.5)));
        let corner = Vec3::new(1.0, 1.0, 1.0);
        assert!(close(m.transform_point(corner), Vec3::new(0.5, -15.0, 0.5)));
    }

    #[test]
    fn test_z_fight_nudge_points_at_camera() {
        let camera = DVec3::new(100.5, 64.0, 0.5);
        let pos = BlockPos::new(0, 64, 0);
        let m = half_transform(pos, camera, Facing::South, Hinge::Right, 0.0, DOOR_THICKNESS);
        let t = m.translation_part();
        assert!((t.x - (-100.5 + 0.0005)).abs() < 1e-4);
        assert!((t.z - (-0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_open_door_turns_about_hinge() {
        let camera = DVec3::new(0.5, 70.0, 0.5);
        let pos = BlockPos::new(0, 64, 0);
        let m = half_transform(pos, camera, Facing::North, Hinge::Left, 90.0, DOOR_THICKNESS);

        // Pivot (0, 1) stays put apart from the +X inset
        let pivot = m.transform_point(Vec3::new(0.0, 0.0, 1.0));
        assert!(close(pivot, Vec3::new(-0.5 + DOOR_THICKNESS, -6.0, 0.5)));

        // The far edge of the door swings from (1, 1) around to (0, 0)
        let far = m.transform_point(Vec3::new(1.0, 0.0, 1.0));
        assert!(close(far, Vec3::new(-0.5 + DOOR_THICKNESS, -6.0, -0.5)));
    }

    #[test]
    fn test_collect_overlays_covers_both_halves() {
        let clock = Arc::new(ManualClock::new(Duration::from_secs(1)));
        let queue = Arc::new(RedrawQueue::new());
        let registry = AnimationRegistry::new(AnimationConfig::default(), clock.clone(), queue.clone());
        let base = BlockPos::new(3, 64, 3);
        registry.begin(base, true, Hinge::Right, DoorHalf::Lower, Facing::East);

        clock.advance(Duration::from_millis(120));
        let overlays = collect_overlays(&registry, DVec3::new(3.5, 64.0, 3.5));
        assert_eq!(overlays.len(), 1);

        let overlay = overlays[0];
        assert_eq!(overlay.base, base);
        assert!(overlay.angle_deg < -45.0 && overlay.angle_deg > -90.0);
        assert_eq!(overlay.lower.pos, base);
        assert_eq!(overlay.upper.pos, base.up());
        assert_eq!(overlay.upper.half, DoorHalf::Upper);
        let dy = overlay.upper.transform.translation_part().y - overlay.lower.transform.translation_part().y;
        assert!((dy - 1.0).abs() < 1e-5);

        clock.advance(Duration::from_millis(120));
        assert!(collect_overlays(&registry, DVec3::default()).is_empty());
        let reasons: Vec<_> = queue.drain().into_iter().map(|r| r.reason).collect();
        assert_eq!(reasons, vec![RedrawReason::Reveal, RedrawReason::Expired]);
    }

    #[test]
    fn test_collect_overlays_after_end_emits_both_redraws() {
        let clock = Arc::new(ManualClock::new(Duration::from_secs(1)));
        let queue = Arc::new(RedrawQueue::new());
        let registry = AnimationRegistry::new(AnimationConfig::default(), clock.clone(), queue.clone());
        let base = BlockPos::new(-7, 70, 12);
        registry.begin(base, true, Hinge::Right, DoorHalf::Lower, Facing::East);

        // First render pass only happens once the swing is over
        clock.advance(Duration::from_millis(240));
        assert!(collect_overlays(&registry, DVec3::default()).is_empty());
        assert_eq!(
            queue.drain(),
            vec![
                RedrawRequest::new(base, RedrawReason::Reveal),
                RedrawRequest::new(base, RedrawReason::Expired),
            ]
        );
        assert!(registry.positions().is_empty());
    }
}
