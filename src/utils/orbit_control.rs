use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

/// Orbit camera around a target point in spherical coordinates.
///
/// The host feeds it abstract input (`rotate`, `zoom`) instead of window
/// events, then calls [`update`](Self::update) once per frame to get the new
/// camera position. `theta` is the azimuth around +Y measured from +Z, `phi`
/// the polar angle from +Y.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,

    pub auto_rotate: bool,
    /// 1.0 is one orbit per 60 seconds.
    pub auto_rotate_speed: f32,

    pub center: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,

    rotate_delta: Vec2,
}

const EPS: f32 = 0.0001;

impl OrbitControls {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            damping_factor: 0.05,
            enable_damping: true,
            min_distance: 1.0,
            max_distance: 1000.0,

            auto_rotate: false,
            auto_rotate_speed: 2.0,

            center,
            radius,
            theta: 0.0,
            phi: std::f32::consts::FRAC_PI_2,

            rotate_delta: Vec2::ZERO,
        }
    }

    /// Controls whose camera sits at `position`, looking at `target`.
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let mut controls = Self::new(target, 1.0);
        controls.reset(position, target);
        controls
    }

    /// Queues a rotation in radians. With damping on it is applied gradually.
    pub fn rotate(&mut self, d_theta: f32, d_phi: f32) {
        self.rotate_delta.x += d_theta * self.rotate_speed;
        self.rotate_delta.y += d_phi * self.rotate_speed;
    }

    /// Queues a rotation from a pointer drag; a drag across the full viewport
    /// height turns the camera once around.
    pub fn rotate_pixels(&mut self, cursor_delta: Vec2, screen_height: f32) {
        let rotate_per_pixel = TAU / screen_height.max(1.0);
        self.rotate(-cursor_delta.x * rotate_per_pixel, -cursor_delta.y * rotate_per_pixel);
    }

    /// Dollies the camera. Positive `steps` move it closer.
    pub fn zoom(&mut self, steps: f32) {
        if steps == 0.0 {
            return;
        }
        let scale = (1.0 - self.zoom_speed).powf(steps.abs());
        if steps > 0.0 {
            self.radius *= scale;
        } else {
            self.radius /= scale;
        }
        self.radius = self.clamp_distance(self.radius);
    }

    /// Places the camera at `position` looking at `target` and drops pending motion.
    pub fn reset(&mut self, position: Vec3, target: Vec3) {
        let offset = position - target;
        self.center = target;
        self.radius = self.clamp_distance(offset.length());
        self.theta = offset.x.atan2(offset.z);
        self.phi = if offset.length_squared() > 0.0 {
            (offset.y / offset.length()).clamp(-1.0, 1.0).acos()
        } else {
            std::f32::consts::FRAC_PI_2
        };
        self.phi = self.phi.clamp(EPS, PI - EPS);
        self.rotate_delta = Vec2::ZERO;
    }

    /// Advances by `dt` seconds and returns the camera position.
    pub fn update(&mut self, dt: f32) -> Vec3 {
        if self.auto_rotate {
            // 60 fps reference: speed 1.0 completes an orbit in 60 s.
            self.theta -= TAU / 60.0 * self.auto_rotate_speed * dt;
        }

        // Frame-rate independent: `damping_factor` is the share released per 60 Hz frame.
        let kept = if self.enable_damping {
            (1.0 - self.damping_factor.clamp(0.0, 1.0)).powf(dt * 60.0)
        } else {
            0.0
        };
        let step = self.rotate_delta * (1.0 - kept);
        self.theta += step.x;
        self.phi += step.y;
        self.rotate_delta *= kept;

        self.phi = self.phi.clamp(EPS, PI - EPS);
        self.radius = self.clamp_distance(self.radius);

        self.position()
    }

    /// Camera position for the current spherical state.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        let cos_phi = self.phi.cos();
        let sin_theta = self.theta.sin();
        let cos_theta = self.theta.cos();

        let offset = Vec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        );

        self.center + offset
    }

    /// `min_distance` wins if the limits are crossed.
    fn clamp_distance(&self, radius: f32) -> f32 {
        radius.min(self.max_distance).max(self.min_distance)
    }

    /// Rotation still queued by damping.
    #[must_use]
    pub fn pending_rotation(&self) -> Vec2 {
        self.rotate_delta
    }
}
