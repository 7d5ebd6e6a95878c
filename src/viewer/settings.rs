//! Viewer Configuration
//!
//! All fields have defaults, so a settings document only needs the keys it
//! overrides:
//!
//! | key                           | default       |
//! |-------------------------------|---------------|
//! | `camera.fov`                  | 50 (degrees)  |
//! | `camera.near` / `camera.far`  | 0.1 / 1000    |
//! | `camera.position`             | [5, 4, 8]     |
//! | `camera.target`               | [0, 0, 0]     |
//! | `controls.enableDamping`      | true          |
//! | `controls.dampingFactor`      | 0.05          |
//! | `controls.minDistance`        | 3             |
//! | `controls.maxDistance`        | 20            |
//! | `controls.autoRotate`         | true          |
//! | `controls.autoRotateSpeed`    | 2             |
//! | `initialModel`                | `"robot"`     |
//! | `wireframe`                   | false         |
//! | `viewport.width` / `.height`  | 1280 / 720    |

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{KitbashError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Home position, restored by a view reset.
    pub position: Vec3,
    pub target: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov: 50.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(5.0, 4.0, 8.0),
            target: Vec3::ZERO,
        }
    }
}

impl CameraSettings {
    pub fn validate(&self) -> Result<()> {
        // Written as positive checks so NaN fails them too.
        let fov_ok = self.fov > 0.0 && self.fov < 180.0;
        if !fov_ok {
            return Err(invalid("camera.fov", "must be in (0, 180) degrees"));
        }
        let near_ok = self.near > 0.0 && self.near.is_finite();
        if !near_ok {
            return Err(invalid("camera.near", "must be positive and finite"));
        }
        let far_ok = self.far > self.near && self.far.is_finite();
        if !far_ok {
            return Err(invalid("camera.far", "must be finite and greater than camera.near"));
        }
        if !(self.position.is_finite() && self.target.is_finite()) {
            return Err(invalid("camera.position", "position and target must be finite"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControlSettings {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            min_distance: 3.0,
            max_distance: 20.0,
            auto_rotate: true,
            auto_rotate_speed: 2.0,
        }
    }
}

impl ControlSettings {
    pub fn validate(&self) -> Result<()> {
        let positive = |v: f32| v > 0.0 && v.is_finite();
        if !positive(self.min_distance) {
            return Err(invalid("controls.minDistance", "must be positive and finite"));
        }
        if !positive(self.max_distance) {
            return Err(invalid("controls.maxDistance", "must be positive and finite"));
        }
        if self.min_distance > self.max_distance {
            return Err(invalid("controls.minDistance", "must not exceed controls.maxDistance"));
        }
        let damping_ok = self.damping_factor > 0.0 && self.damping_factor <= 1.0;
        if !damping_ok {
            return Err(invalid("controls.dampingFactor", "must be in (0, 1]"));
        }
        if !self.auto_rotate_speed.is_finite() {
            return Err(invalid("controls.autoRotateSpeed", "must be finite"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str) -> KitbashError {
    KitbashError::InvalidSettingsValue { field, reason }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(KitbashError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerSettings {
    pub camera: CameraSettings,
    pub controls: ControlSettings,
    /// Model shown on startup.
    pub initial_model: String,
    pub wireframe: bool,
    pub viewport: Viewport,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            camera: CameraSettings::default(),
            controls: ControlSettings::default(),
            initial_model: "robot".to_owned(),
            wireframe: false,
            viewport: Viewport::default(),
        }
    }
}

impl ViewerSettings {
    /// Parses a JSON settings document; missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects values that would make the camera math panic or go NaN.
    pub fn validate(&self) -> Result<()> {
        self.camera.validate()?;
        self.controls.validate()?;
        self.viewport.validate()
    }
}
