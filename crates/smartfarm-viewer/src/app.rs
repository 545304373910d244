//! Bevy application setup

use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_picking::DefaultPickingPlugins;
use smartfarm_core::labels::title;
use smartfarm_core::ViewerConfig;
use smartfarm_scene::{SceneSettings, SmartFarmScenePlugin, UiLayout, ViewModel};

use crate::ui::UiPlugin;

/// Run the Bevy application
pub fn run(config: ViewerConfig) {
    tracing::info!(
        variant = %config.variant,
        locale = %config.locale,
        asset = %config.scene.asset,
        "Starting SmartFarm viewer"
    );

    App::new()
        .add_plugins(DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: title(config.locale).to_string(),
                    canvas: Some("#smartfarm-canvas".to_string()),
                    fit_canvas_to_parent: true,
                    prevent_default_event_handling: false,
                    ..default()
                }),
                ..default()
            })
            .set(AssetPlugin {
                // Static hosting has no .meta files
                meta_check: bevy::asset::AssetMetaCheck::Never,
                ..default()
            })
        )
        // Must come before EguiPlugin so it can detect PickingPlugin
        .add_plugins(DefaultPickingPlugins)
        .add_plugins(EguiPlugin::default())
        .insert_resource(ViewModel::from_config(&config))
        .insert_resource(SceneSettings(config))
        .init_resource::<UiLayout>()
        .add_plugins(SmartFarmScenePlugin)
        .add_plugins(UiPlugin)
        .run();
}
