use std::sync::Arc;

use wasm_bindgen::prelude::*;

pub mod animation;
pub mod config;
pub mod error;
pub mod math;
pub mod render;
pub mod world;

pub use animation::{AnimationEntry, AnimationRegistry, Clock, ManualClock, Timestamp};
pub use config::AnimationConfig;
pub use error::Error;
pub use render::{collect_overlays, DoorOverlay, RedrawQueue, RedrawReason, RedrawRequest, RedrawSink};
pub use world::{BlockPos, DoorHalf, DoorState, DoorStateTracker, Facing, Hinge};

use animation::system_clock;
use math::DVec3;

/// Floats per half in [`DoorSwing::overlay_transforms`]: x, y, z, half, then the matrix
pub const OVERLAY_STRIDE: usize = 20;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Door animation state for one world session, exposed to JavaScript
#[wasm_bindgen]
pub struct DoorSwing {
    registry: AnimationRegistry,
    tracker: DoorStateTracker,
    redraws: Arc<RedrawQueue>,
}

#[wasm_bindgen]
impl DoorSwing {
    /// Create a session with the stock door timings
    #[wasm_bindgen(constructor)]
    pub fn new() -> DoorSwing {
        Self::from_parts(AnimationConfig::default(), Arc::new(system_clock()))
    }

    /// Create a session from a YAML configuration document
    #[wasm_bindgen]
    pub fn with_config(yaml: &str) -> std::result::Result<DoorSwing, JsValue> {
        let config = AnimationConfig::from_yaml(yaml).map_err(to_js)?;
        Ok(Self::from_parts(config, Arc::new(system_clock())))
    }

    /// Start an animation at a base position. Returns false when deduplicated.
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn begin(
        &self,
        x: i32,
        y: i32,
        z: i32,
        opening: bool,
        hinge: &str,
        half: &str,
        facing: &str,
    ) -> std::result::Result<bool, JsValue> {
        let hinge: Hinge = hinge.parse().map_err(to_js)?;
        let half: DoorHalf = half.parse().map_err(to_js)?;
        let facing: Facing = facing.parse().map_err(to_js)?;
        Ok(self.registry.begin(BlockPos::new(x, y, z), opening, hinge, half, facing))
    }

    /// Feed a decoded door block update. Returns true when it started an animation.
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn observe(
        &self,
        x: i32,
        y: i32,
        z: i32,
        open: bool,
        half: &str,
        hinge: &str,
        facing: &str,
    ) -> std::result::Result<bool, JsValue> {
        let state = DoorState::new(
            open,
            half.parse().map_err(to_js)?,
            hinge.parse().map_err(to_js)?,
            facing.parse().map_err(to_js)?,
        );
        Ok(self
            .tracker
            .observe(&self.registry, BlockPos::new(x, y, z), state)
            .is_some())
    }

    /// Current swing angle in degrees
    #[wasm_bindgen]
    pub fn compute_angle(&self, x: i32, y: i32, z: i32) -> Option<f32> {
        self.registry.compute_angle(BlockPos::new(x, y, z))
    }

    #[wasm_bindgen]
    pub fn is_hidden(&self, x: i32, y: i32, z: i32) -> bool {
        self.registry.is_hidden(BlockPos::new(x, y, z), self.registry.now())
    }

    #[wasm_bindgen]
    pub fn is_animating(&self, x: i32, y: i32, z: i32) -> bool {
        self.registry.is_animating(BlockPos::new(x, y, z), self.registry.now())
    }

    /// Periodic sweep; returns the number of entries dropped
    #[wasm_bindgen]
    pub fn prune(&self) -> usize {
        self.registry.prune_expired()
    }

    /// Session boundary: forget animations and known door states
    #[wasm_bindgen]
    pub fn clear_all(&self) {
        self.registry.clear_all();
        self.tracker.clear();
    }

    #[wasm_bindgen]
    pub fn active_count(&self) -> usize {
        self.registry.len()
    }

    /// Call `visit(x, y, z, opening, hinge, facing)` for every live animation
    #[wasm_bindgen]
    pub fn for_each_active(&self, visit: &js_sys::Function) -> std::result::Result<(), JsValue> {
        let mut failure = None;
        self.registry.for_each_active(|pos, entry| {
            if failure.is_some() {
                return;
            }
            let args = js_sys::Array::new();
            args.push(&JsValue::from(pos.x));
            args.push(&JsValue::from(pos.y));
            args.push(&JsValue::from(pos.z));
            args.push(&JsValue::from(entry.opening));
            args.push(&JsValue::from_str(entry.hinge.as_str()));
            args.push(&JsValue::from_str(entry.facing.as_str()));
            if let Err(e) = visit.apply(&JsValue::NULL, &args) {
                failure = Some(e);
            }
        });
        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Drain pending redraw requests as flattened `x, y, z, reason` quads
    #[wasm_bindgen]
    pub fn take_redraws(&self) -> Vec<i32> {
        self.redraws
            .drain()
            .iter()
            .flat_map(|r| [r.base.x, r.base.y, r.base.z, r.reason.code()])
            .collect()
    }

    /// Overlay transforms relative to the camera, [`OVERLAY_STRIDE`] floats per door half
    #[wasm_bindgen]
    pub fn overlay_transforms(&self, camera_x: f64, camera_y: f64, camera_z: f64) -> Vec<f32> {
        let camera = DVec3::new(camera_x, camera_y, camera_z);
        let overlays = collect_overlays(&self.registry, camera);
        let mut out = Vec::with_capacity(overlays.len() * 2 * OVERLAY_STRIDE);
        for overlay in &overlays {
            for half in [&overlay.lower, &overlay.upper] {
                out.extend_from_slice(&[
                    half.pos.x as f32,
                    half.pos.y as f32,
                    half.pos.z as f32,
                    match half.half {
                        DoorHalf::Lower => 0.0,
                        DoorHalf::Upper => 1.0,
                    },
                ]);
                out.extend_from_slice(half.transform.as_slice());
            }
        }
        out
    }
}

impl DoorSwing {
    /// Build a session around an explicit clock
    pub fn from_parts(config: AnimationConfig, clock: Arc<dyn Clock>) -> Self {
        let redraws = Arc::new(RedrawQueue::new());
        Self {
            registry: AnimationRegistry::new(config, clock, redraws.clone()),
            tracker: DoorStateTracker::new(),
            redraws,
        }
    }

    pub fn registry(&self) -> &AnimationRegistry {
        &self.registry
    }

    pub fn tracker(&self) -> &DoorStateTracker {
        &self.tracker
    }
}

impl Default for DoorSwing {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
