//! Headless viewer session
//!
//! Holds what an interactive model viewer tracks between frames: the model on
//! display, render toggles, the orbit camera and the viewport. A windowing or
//! web host forwards user actions here and draws
//! [`Viewer::current`] with the camera from [`Viewer::view_projection`].

pub mod settings;

pub use settings::{CameraSettings, ControlSettings, ViewerSettings, Viewport};

use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::errors::Result;
use crate::models::{BuiltModel, Category};
use crate::registry::ModelRegistry;
use crate::utils::orbit_control::OrbitControls;

/// Summary of the model on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    /// Surfaces actually built, not the declared count.
    pub parts: usize,
    pub category: Category,
}

#[derive(Debug)]
struct Displayed {
    id: &'static str,
    model: BuiltModel,
}

#[derive(Debug)]
pub struct Viewer {
    registry: &'static ModelRegistry,
    settings: ViewerSettings,
    controls: OrbitControls,
    camera_position: Vec3,
    displayed: Option<Displayed>,
    wireframe: bool,
    fullscreen: bool,
    viewport: Viewport,
}

impl Viewer {
    /// Creates a session over the global catalog and loads `settings.initial_model`.
    pub fn new(settings: ViewerSettings) -> Result<Self> {
        Self::with_registry(settings, ModelRegistry::global())
    }

    pub fn with_registry(settings: ViewerSettings, registry: &'static ModelRegistry) -> Result<Self> {
        settings.validate()?;

        let mut controls = OrbitControls::new(settings.camera.target, 1.0);
        controls.enable_damping = settings.controls.enable_damping;
        controls.damping_factor = settings.controls.damping_factor;
        controls.min_distance = settings.controls.min_distance;
        controls.max_distance = settings.controls.max_distance;
        controls.auto_rotate = settings.controls.auto_rotate;
        controls.auto_rotate_speed = settings.controls.auto_rotate_speed;
        controls.reset(settings.camera.position, settings.camera.target);

        let mut viewer = Self {
            registry,
            camera_position: controls.position(),
            controls,
            displayed: None,
            wireframe: settings.wireframe,
            fullscreen: false,
            viewport: settings.viewport,
            settings,
        };

        let initial = viewer.settings.initial_model.clone();
        if !viewer.select(&initial) {
            log::warn!("Initial model '{initial}' is not in the catalog, starting empty");
        }

        Ok(viewer)
    }

    // ========================================================================
    // Model selection
    // ========================================================================

    /// Replaces the displayed model with a fresh build of `id`.
    ///
    /// Unknown ids leave the current model in place and return `false`.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(definition) = self.registry.find_by_id(id) else {
            log::warn!("Ignoring selection of unknown model '{id}'");
            return false;
        };

        let mut model = definition.build();
        model.set_wireframe(self.wireframe);
        model.update_world_matrices();

        log::info!("Showing '{}' ({} parts)", definition.name(), model.part_count());

        self.displayed = Some(Displayed {
            id: definition.id(),
            model,
        });
        self.controls.center = self.settings.camera.target;
        true
    }

    #[must_use]
    pub fn current(&self) -> Option<&BuiltModel> {
        self.displayed.as_ref().map(|d| &d.model)
    }

    pub fn current_mut(&mut self) -> Option<&mut BuiltModel> {
        self.displayed.as_mut().map(|d| &mut d.model)
    }

    #[must_use]
    pub fn current_id(&self) -> Option<&'static str> {
        self.displayed.as_ref().map(|d| d.id)
    }

    #[must_use]
    pub fn info(&self) -> Option<ModelInfo> {
        let displayed = self.displayed.as_ref()?;
        let definition = self.registry.find_by_id(displayed.id)?;
        Some(ModelInfo {
            id: displayed.id,
            name: definition.name(),
            parts: displayed.model.part_count(),
            category: definition.category(),
        })
    }

    // ========================================================================
    // Toggles
    // ========================================================================

    /// Flips wireframe rendering on every surface of the current model.
    /// The flag carries over to models selected later.
    pub fn toggle_wireframe(&mut self) -> bool {
        let wireframe = !self.wireframe;
        self.wireframe = wireframe;
        if let Some(model) = self.current_mut() {
            model.set_wireframe(wireframe);
        }
        wireframe
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.controls.auto_rotate = !self.controls.auto_rotate;
        self.controls.auto_rotate
    }

    /// Fullscreen is owned by the host; this only tracks the requested state.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// Returns the camera to its configured home position and target.
    pub fn reset_view(&mut self) {
        self.controls.reset(self.settings.camera.position, self.settings.camera.target);
        self.camera_position = self.controls.position();
    }

    #[inline]
    #[must_use]
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    #[inline]
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.controls.auto_rotate
    }

    #[inline]
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    // ========================================================================
    // Camera & viewport
    // ========================================================================

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let viewport = Viewport { width, height };
        viewport.validate()?;
        self.viewport = viewport;
        log::debug!("Viewport resized to {width}x{height}");
        Ok(())
    }

    /// Advances camera motion by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Vec3 {
        self.camera_position = self.controls.update(dt);
        self.camera_position
    }

    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.viewport.aspect()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.camera_position, self.controls.center, Vec3::Y)
    }

    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        let camera = &self.settings.camera;
        Mat4::perspective_rh(camera.fov.to_radians(), self.aspect(), camera.near, camera.far)
    }

    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    #[must_use]
    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    #[must_use]
    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }
}
