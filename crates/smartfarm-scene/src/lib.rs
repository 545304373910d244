//! SmartFarm Scene - 3D rendering and UI components
//!
//! This crate wires the renderer-independent view model from
//! `smartfarm-core` into Bevy: camera and lights, the glTF model and its
//! per-frame rotation, the curtain overlay, and egui widgets for the
//! control panel and sensor readout.

pub mod camera;
pub mod controls;
pub mod models;
pub mod overlay;
pub mod scene;
pub mod types;
pub mod ui;

use bevy::prelude::*;

/// Plugin that sets up the 3D scene and the view model
pub struct SmartFarmScenePlugin;

impl Plugin for SmartFarmScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(controls::ControlsPlugin)
            .add_plugins(camera::CameraPlugin)
            .add_plugins(scene::SceneSetupPlugin)
            .add_plugins(models::ModelsPlugin)
            .add_plugins(overlay::OverlayPlugin);
    }
}

// Re-export commonly used types
pub use types::*;
pub use camera::CameraSettings;
pub use models::ModelAsset;
