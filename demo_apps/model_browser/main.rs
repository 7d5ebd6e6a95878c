//! Walks every catalog entry through a headless viewer session.
//!
//! ```text
//! model_browser [--list] [settings.json]
//! ```
//!
//! `--list` prints the catalog as JSON and exits. Otherwise each model is
//! selected in turn, rendered as wireframe for a second of simulated frames,
//! and summarized on the log.

use anyhow::Context;
use kitbash::{ModelRegistry, Viewer, ViewerSettings};

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut list_only = false;
    let mut settings_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--list" => list_only = true,
            path => settings_path = Some(path.to_owned()),
        }
    }

    let registry = ModelRegistry::global();

    if list_only {
        println!("{}", serde_json::to_string_pretty(&registry.descriptors())?);
        return Ok(());
    }

    registry.validate().context("catalog failed validation")?;

    let settings = match settings_path {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            ViewerSettings::from_json_str(&text).with_context(|| format!("parsing {path}"))?
        }
        None => ViewerSettings::default(),
    };

    let mut viewer = Viewer::new(settings)?;

    for id in registry.ids() {
        viewer.select(id);
        viewer.toggle_wireframe();

        let mut camera = viewer.camera_position();
        for _ in 0..60 {
            camera = viewer.tick(FRAME_DT);
        }

        let Some(model) = viewer.current() else {
            continue;
        };
        let bounds = model.world_bounding_box();
        let wireframe = model.meshes().filter(|m| m.material.wireframe()).count();

        if let Some(info) = viewer.info() {
            log::info!(
                "{:<10} {:<9} parts={:>2} wireframe={:>2} size={:.2?} camera={:.2?}",
                info.name,
                info.category.as_str(),
                info.parts,
                wireframe,
                bounds.size(),
                camera,
            );
        }

        viewer.toggle_wireframe();
    }

    viewer.reset_view();
    log::info!("View reset, camera back at {:.2?}", viewer.camera_position());

    Ok(())
}
