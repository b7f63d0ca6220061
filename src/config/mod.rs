//! Animation timing and geometry settings
//!
//! Loaded from YAML so hosts can tune the swing without rebuilding. Every
//! field is optional; missing fields keep the stock door values.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Easing;
use crate::error::{Error, Result};

/// Swing length of a door animation
pub const ANIM_DURATION: Duration = Duration::from_millis(240);
/// How long before the end the static door mesh comes back
pub const HIDE_LEAD: Duration = Duration::from_millis(50);
/// Identical triggers closer than this are treated as one
pub const DEDUPE_WINDOW: Duration = Duration::from_millis(150);
/// Door slab thickness in block units (3/16)
pub const DOOR_THICKNESS: f32 = 0.1875;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub duration_ms: u64,
    pub hide_lead_ms: u64,
    pub dedupe_window_ms: u64,
    pub door_thickness: f32,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: ANIM_DURATION.as_millis() as u64,
            hide_lead_ms: HIDE_LEAD.as_millis() as u64,
            dedupe_window_ms: DEDUPE_WINDOW.as_millis() as u64,
            door_thickness: DOOR_THICKNESS,
            easing: Easing::CubicOut,
        }
    }
}

impl AnimationConfig {
    /// Parse and validate from a YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: AnimationConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.duration_ms == 0 {
            return Err(Error::InvalidConfig("duration_ms must be greater than zero".to_string()));
        }
        if !(self.door_thickness.is_finite() && self.door_thickness > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "door_thickness must be a positive number, got {}",
                self.door_thickness
            )));
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn hide_lead(&self) -> Duration {
        Duration::from_millis(self.hide_lead_ms)
    }

    pub fn dedupe_window(&self) -> Duration {
        Duration::from_millis(self.dedupe_window_ms)
    }

    /// Lead time actually applied: never more than `duration - 1ms`
    pub fn effective_hide_lead(&self) -> Duration {
        let cap = self.duration().saturating_sub(Duration::from_millis(1));
        self.hide_lead().min(cap)
    }
}
