//! Viewer Session Tests
//!
//! Tests for:
//! - Settings defaults and JSON loading
//! - Model selection, unknown ids and the initial model
//! - Wireframe / auto-rotate / fullscreen toggles
//! - Orbit camera: auto-rotation, zoom limits, reset
//! - Viewport resizing and projection

use glam::{Vec2, Vec3};

use kitbash::errors::KitbashError;
use kitbash::models::Category;
use kitbash::viewer::{Viewer, ViewerSettings};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Settings with auto-rotation off so the camera only moves when told to.
fn still_settings() -> ViewerSettings {
    let mut settings = ViewerSettings::default();
    settings.controls.auto_rotate = false;
    settings
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn default_settings() {
    let settings = ViewerSettings::default();
    assert!(approx_eq(settings.camera.fov, 50.0));
    assert!(approx_eq(settings.camera.near, 0.1));
    assert!(approx_eq(settings.camera.far, 1000.0));
    assert_eq!(settings.camera.position, Vec3::new(5.0, 4.0, 8.0));
    assert_eq!(settings.camera.target, Vec3::ZERO);

    assert!(settings.controls.enable_damping);
    assert!(approx_eq(settings.controls.damping_factor, 0.05));
    assert!(approx_eq(settings.controls.min_distance, 3.0));
    assert!(approx_eq(settings.controls.max_distance, 20.0));
    assert!(settings.controls.auto_rotate);
    assert!(approx_eq(settings.controls.auto_rotate_speed, 2.0));

    assert_eq!(settings.initial_model, "robot");
    assert!(!settings.wireframe);
    assert_eq!((settings.viewport.width, settings.viewport.height), (1280, 720));
}

#[test]
fn settings_json_round_trip() -> anyhow::Result<()> {
    let mut settings = ViewerSettings::default();
    settings.initial_model = "tank".to_owned();
    settings.wireframe = true;

    let json = settings.to_json_string()?;
    assert!(json.contains("initialModel"));
    assert_eq!(ViewerSettings::from_json_str(&json)?, settings);
    Ok(())
}

#[test]
fn malformed_settings_are_rejected() {
    let err = ViewerSettings::from_json_str("{ \"wireframe\": ").unwrap_err();
    assert!(matches!(err, KitbashError::InvalidSettings(_)));

    let err = ViewerSettings::from_json_str(r#"{ "viewport": { "width": 0, "height": 600 } }"#).unwrap_err();
    assert!(matches!(err, KitbashError::InvalidViewport { width: 0, height: 600 }));
}

fn rejected_field(json: &str) -> &'static str {
    match ViewerSettings::from_json_str(json) {
        Err(KitbashError::InvalidSettingsValue { field, .. }) => field,
        other => panic!("expected InvalidSettingsValue for {json}, got {other:?}"),
    }
}

#[test]
fn out_of_range_controls_are_rejected() {
    assert_eq!(
        rejected_field(r#"{ "controls": { "minDistance": 30, "maxDistance": 20 } }"#),
        "controls.minDistance"
    );
    assert_eq!(rejected_field(r#"{ "controls": { "minDistance": 0 } }"#), "controls.minDistance");
    assert_eq!(rejected_field(r#"{ "controls": { "minDistance": -1 } }"#), "controls.minDistance");
    assert_eq!(rejected_field(r#"{ "controls": { "maxDistance": -5 } }"#), "controls.maxDistance");
    assert_eq!(rejected_field(r#"{ "controls": { "dampingFactor": 0 } }"#), "controls.dampingFactor");
    assert_eq!(rejected_field(r#"{ "controls": { "dampingFactor": 1.5 } }"#), "controls.dampingFactor");
}

#[test]
fn out_of_range_camera_is_rejected() {
    assert_eq!(rejected_field(r#"{ "camera": { "near": 0 } }"#), "camera.near");
    assert_eq!(rejected_field(r#"{ "camera": { "near": -0.1 } }"#), "camera.near");
    assert_eq!(rejected_field(r#"{ "camera": { "near": 5, "far": 5 } }"#), "camera.far");
    assert_eq!(rejected_field(r#"{ "camera": { "far": 0.05 } }"#), "camera.far");
    assert_eq!(rejected_field(r#"{ "camera": { "fov": 0 } }"#), "camera.fov");
    assert_eq!(rejected_field(r#"{ "camera": { "fov": 180 } }"#), "camera.fov");
}

#[test]
fn boundary_values_are_accepted() {
    let settings = ViewerSettings::from_json_str(
        r#"{ "controls": { "minDistance": 10, "maxDistance": 10, "dampingFactor": 1 }, "camera": { "fov": 179 } }"#,
    )
    .unwrap();
    let mut viewer = Viewer::new(settings).unwrap();
    assert!((viewer.tick(1.0 / 60.0).length() - 10.0).abs() < 1e-3);
}

#[test]
fn viewer_rejects_invalid_settings_instead_of_panicking() {
    let mut settings = ViewerSettings::default();
    settings.controls.min_distance = 30.0;
    settings.controls.max_distance = 20.0;
    assert!(matches!(
        Viewer::new(settings),
        Err(KitbashError::InvalidSettingsValue { field: "controls.minDistance", .. })
    ));

    let mut settings = ViewerSettings::default();
    settings.controls.damping_factor = 2.0;
    assert!(Viewer::new(settings).is_err());

    let mut settings = ViewerSettings::default();
    settings.camera.far = f32::INFINITY;
    assert!(matches!(
        Viewer::new(settings),
        Err(KitbashError::InvalidSettingsValue { field: "camera.far", .. })
    ));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn new_shows_initial_model() {
    let viewer = Viewer::new(ViewerSettings::default()).unwrap();
    assert_eq!(viewer.current_id(), Some("robot"));
    assert_eq!(viewer.current().unwrap().part_count(), 10);

    let info = viewer.info().unwrap();
    assert_eq!(info.name, "Robot");
    assert_eq!(info.parts, 10);
    assert_eq!(info.category, Category::Character);
}

#[test]
fn unknown_initial_model_starts_empty() {
    init_logger();
    let mut settings = ViewerSettings::default();
    settings.initial_model = "spaceship".to_owned();

    let mut viewer = Viewer::new(settings).unwrap();
    assert!(viewer.current().is_none());
    assert!(viewer.info().is_none());

    assert!(viewer.select("cube"));
    assert_eq!(viewer.current_id(), Some("cube"));
}

#[test]
fn select_switches_model() {
    let mut viewer = Viewer::new(still_settings()).unwrap();
    for (id, parts) in [("dog", 22), ("tank", 11), ("gun", 12), ("torus", 1)] {
        assert!(viewer.select(id));
        assert_eq!(viewer.current_id(), Some(id));
        assert_eq!(viewer.info().unwrap().parts, parts);
    }
}

#[test]
fn unknown_selection_keeps_current_model() {
    let mut viewer = Viewer::new(still_settings()).unwrap();
    viewer.select("tank");
    let before = viewer.current().unwrap().surface(0).unwrap().material.uuid;

    assert!(!viewer.select("helicopter"));
    assert!(!viewer.select(""));

    assert_eq!(viewer.current_id(), Some("tank"));
    assert_eq!(viewer.current().unwrap().surface(0).unwrap().material.uuid, before);
}

#[test]
fn reselecting_builds_a_fresh_model() {
    let mut viewer = Viewer::new(still_settings()).unwrap();
    let first = viewer.current().unwrap().surface(0).unwrap().material.uuid;
    viewer.select("robot");
    assert_ne!(viewer.current().unwrap().surface(0).unwrap().material.uuid, first);
}

#[test]
fn selected_model_has_world_matrices() {
    let viewer = Viewer::new(still_settings()).unwrap();
    let robot = viewer.current().unwrap();
    let root_y = robot.root_node().unwrap().world_matrix().translation.y;
    assert!(approx_eq(root_y, 0.5));
}

// ============================================================================
// Toggles
// ============================================================================

#[test]
fn wireframe_toggle_applies_to_all_surfaces() {
    let mut viewer = Viewer::new(still_settings()).unwrap();
    assert!(viewer.current().unwrap().meshes().all(|m| !m.material.wireframe()));

    assert!(viewer.toggle_wireframe());
    assert!(viewer.wireframe());
    assert!(viewer.current().unwrap().meshes().all(|m| m.material.wireframe()));

    assert!(!viewer.toggle_wireframe());
    assert!(viewer.current().unwrap().meshes().all(|m| !m.material.wireframe()));
}

#[test]
fn wireframe_persists_across_selection() {
    let mut viewer = Viewer::new(still_settings()).unwrap();
    viewer.toggle_wireframe();
    viewer.select("dog");
    assert!(viewer.current().unwrap().meshes().all(|m| m.material.wireframe()));
}

#[test]
fn wireframe_from_settings() {
    let mut settings = still_settings();
    settings.wireframe = true;
    let viewer = Viewer::new(settings).unwrap();
    assert!(viewer.wireframe());
    assert!(viewer.current().unwrap().meshes().all(|m| m.material.wireframe()));
}

#[test]
fn auto_rotate_toggle() {
    let mut viewer = Viewer::new(ViewerSettings::default()).unwrap();
    assert!(viewer.auto_rotate());
    assert!(!viewer.toggle_auto_rotate());
    assert!(!viewer.auto_rotate());
    assert!(viewer.toggle_auto_rotate());
}

#[test]
fn fullscreen_toggle() {
    let mut viewer = Viewer::new(still_settings()).unwrap();
    assert!(!viewer.is_fullscreen());
    assert!(viewer.toggle_fullscreen());
    assert!(!viewer.toggle_fullscreen());
}

// ============================================================================
// Camera
// ============================================================================

#[test]
fn camera_starts_at_home() {
    let viewer = Viewer::new(ViewerSettings::default()).unwrap();
    assert!(vec3_approx(viewer.camera_position(), Vec3::new(5.0, 4.0, 8.0), EPSILON));
}

#[test]
fn still_camera_does_not_drift() {
    let mut viewer = Viewer::new(still_settings()).unwrap();
    for _ in 0..120 {
        viewer.tick(1.0 / 60.0);
    }
    assert!(vec3_approx(viewer.camera_position(), Vec3::new(5.0, 4.0, 8.0), EPSILON));
}

#[test]
fn auto_rotate_completes_orbit() {
    let mut viewer = Viewer::new(ViewerSettings::default()).unwrap();
    let home = viewer.camera_position();

    // Speed 2.0 is one orbit every 30 seconds.
    for _ in 0..900 {
        viewer.tick(1.0 / 60.0);
    }
    let half_way = viewer.camera_position();
    assert!(vec3_approx(half_way, Vec3::new(-home.x, home.y, -home.z), 1e-2));

    for _ in 0..900 {
        viewer.tick(1.0 / 60.0);
    }
    assert!(vec3_approx(viewer.camera_position(), home, 1e-2));
}

#[test]
fn auto_rotate_keeps_height_and_distance() {
    let mut viewer = Viewer::new(ViewerSettings::default()).unwrap();
    let home = viewer.camera_position();
    for _ in 0..137 {
        let p = viewer.tick(1.0 / 60.0);
        assert!(approx_eq(p.y, home.y));
        assert!((p.length() - home.length()).abs() < 1e-3);
    }
}

#[test]
fn zoom_is_clamped() {
    let mut viewer = Viewer::new(still_settings()).unwrap();

    viewer.controls_mut().zoom(500.0);
    assert!((viewer.tick(1.0 / 60.0).length() - 3.0).abs() < 1e-3);

    viewer.controls_mut().zoom(-500.0);
    assert!((viewer.tick(1.0 / 60.0).length() - 20.0).abs() < 1e-3);
}

#[test]
fn damped_rotation_settles() {
    let mut viewer = Viewer::new(still_settings()).unwrap();
    let start_theta = viewer.controls().theta;

    viewer.controls_mut().rotate_pixels(Vec2::new(-72.0, 0.0), 720.0);
    viewer.tick(1.0 / 60.0);
    assert!(viewer.controls().pending_rotation().x > 0.0);

    for _ in 0..600 {
        viewer.tick(1.0 / 60.0);
    }
    assert!(viewer.controls().pending_rotation().length() < 1e-4);
    // A tenth of the viewport height is a tenth of a turn.
    let turned = viewer.controls().theta - start_theta;
    assert!((turned - std::f32::consts::TAU / 10.0).abs() < 1e-3);
}

#[test]
fn reset_view_returns_home() {
    let mut viewer = Viewer::new(ViewerSettings::default()).unwrap();
    viewer.controls_mut().zoom(10.0);
    for _ in 0..300 {
        viewer.tick(1.0 / 60.0);
    }
    assert!(!vec3_approx(viewer.camera_position(), Vec3::new(5.0, 4.0, 8.0), 1e-2));

    viewer.reset_view();

    assert!(vec3_approx(viewer.camera_position(), Vec3::new(5.0, 4.0, 8.0), EPSILON));
    assert!(viewer.controls().pending_rotation().abs_diff_eq(Vec2::ZERO, f32::EPSILON));
}

#[test]
fn selection_recenters_on_target() {
    let mut viewer = Viewer::new(still_settings()).unwrap();
    viewer.controls_mut().center = Vec3::new(1.0, 1.0, 1.0);
    viewer.select("sphere");
    assert_eq!(viewer.controls().center, Vec3::ZERO);
}

// ============================================================================
// Viewport & projection
// ============================================================================

#[test]
fn resize_updates_aspect() {
    let mut viewer = Viewer::new(still_settings()).unwrap();
    assert!(approx_eq(viewer.aspect(), 1280.0 / 720.0));

    viewer.resize(800, 800).unwrap();
    assert!(approx_eq(viewer.aspect(), 1.0));
    assert_eq!(viewer.viewport().width, 800);
}

#[test]
fn zero_sized_resize_is_rejected() {
    let mut viewer = Viewer::new(still_settings()).unwrap();
    assert!(matches!(viewer.resize(0, 600), Err(KitbashError::InvalidViewport { .. })));
    assert!(matches!(viewer.resize(600, 0), Err(KitbashError::InvalidViewport { .. })));
    assert_eq!(viewer.viewport().width, 1280);
}

#[test]
fn target_projects_to_screen_center() {
    let viewer = Viewer::new(still_settings()).unwrap();
    let view_proj = viewer.view_projection();
    assert!(view_proj.is_finite());

    let clip = view_proj.project_point3(Vec3::ZERO);
    assert!(approx_eq(clip.x, 0.0));
    assert!(approx_eq(clip.y, 0.0));
    assert!(clip.z > 0.0 && clip.z < 1.0);
}
