//! Model loading and the per-frame rotation driver

use bevy::asset::LoadState;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use smartfarm_core::config::SceneConfig;
use smartfarm_core::{advance, AssetLoadError, AssetState, ModelOrientation};

use crate::controls::apply_toggle_requests;
use crate::types::{ModelYaw, SceneSettings, ViewModel};

/// Marker component for the root of the loaded model
#[derive(Component)]
pub struct PotModel;

/// The bundled model and how far its loading has got
#[derive(Resource, Default)]
pub struct ModelAsset {
    pub path: String,
    pub handle: Option<Handle<Gltf>>,
    pub state: AssetState,
}

/// Plugin for model loading
pub struct ModelsPlugin;

impl Plugin for ModelsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ModelAsset>()
            .init_resource::<ModelYaw>()
            .add_systems(Startup, start_model_load)
            .add_systems(Update, track_model_load)
            .add_systems(Update, rotate_model.after(apply_toggle_requests));
    }
}

/// Placement of the model root for a given yaw
pub fn model_transform(scene: &SceneConfig, orientation: ModelOrientation) -> Transform {
    Transform::from_translation(Vec3::from_array(scene.model_position))
        .with_scale(Vec3::splat(scene.model_scale))
        .with_rotation(Quat::from_rotation_y(orientation.radians()))
}

fn start_model_load(
    mut model: ResMut<ModelAsset>,
    asset_server: Res<AssetServer>,
    settings: Res<SceneSettings>,
) {
    let path = settings.0.scene.asset.clone();
    tracing::info!("Loading model: {}", path);
    model.handle = Some(asset_server.load::<Gltf>(path.clone()));
    model.path = path;
    model.state = AssetState::Loading;
}

/// Check loading state and spawn the default scene once the glTF is ready
fn track_model_load(
    mut commands: Commands,
    mut model: ResMut<ModelAsset>,
    asset_server: Res<AssetServer>,
    gltf_assets: Res<Assets<Gltf>>,
    settings: Res<SceneSettings>,
    yaw: Res<ModelYaw>,
) {
    if !model.state.is_loading() {
        return;
    }
    let Some(handle) = model.handle.clone() else {
        return;
    };

    match asset_server.get_load_state(handle.id()) {
        Some(LoadState::Loaded) => {
            let Some(gltf) = gltf_assets.get(&handle) else {
                return;
            };
            // Use first scene if no default
            let scene = gltf
                .default_scene
                .clone()
                .or_else(|| gltf.scenes.first().cloned());

            match scene {
                Some(scene_handle) => {
                    commands.spawn((
                        SceneRoot(scene_handle),
                        model_transform(&settings.0.scene, yaw.0),
                        PotModel,
                    ));
                    tracing::info!("Model loaded: {}", model.path);
                    model.state.mark_ready();
                }
                None => {
                    let err = AssetLoadError::new(model.path.clone(), "glTF contains no scenes");
                    tracing::error!("{}", err);
                    model.state.mark_failed(err);
                }
            }
        }
        Some(LoadState::Failed(reason)) => {
            let err = AssetLoadError::new(model.path.clone(), reason.to_string());
            tracing::error!("{}", err);
            model.state.mark_failed(err);
        }
        _ => {
            // Still loading
        }
    }
}

/// Advance the yaw by one tick and apply it to the model
pub fn rotate_model(
    view: Res<ViewModel>,
    mut yaw: ResMut<ModelYaw>,
    mut models: Query<&mut Transform, With<PotModel>>,
) {
    let rotating = view.state().rotating;
    if !rotating {
        return;
    }
    yaw.0 = advance(yaw.0, rotating);
    for mut transform in &mut models {
        transform.rotation = Quat::from_rotation_y(yaw.0.radians());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::ControlsPlugin;
    use crate::types::ToggleRequested;
    use bevy::ecs::message::Messages;
    use smartfarm_core::{Toggle, Variant, ViewerConfig};
    use std::time::Duration;

    const EPS: f32 = 1e-4;

    fn rotation_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(ControlsPlugin)
            .init_resource::<ModelYaw>()
            .add_systems(Update, rotate_model.after(apply_toggle_requests));
        let scene = Variant::Lab.preset().scene;
        let model = app
            .world_mut()
            .spawn((model_transform(&scene, ModelOrientation::default()), PotModel))
            .id();
        (app, model)
    }

    fn yaw(app: &App) -> f32 {
        app.world().resource::<ModelYaw>().0.radians()
    }

    #[test]
    fn test_ten_frames_idle_then_spinning() {
        let (mut app, model) = rotation_app();

        for _ in 0..10 {
            app.update();
        }
        assert_eq!(yaw(&app), 0.0);

        app.world_mut()
            .resource_mut::<Messages<ToggleRequested>>()
            .write(ToggleRequested(Toggle::Rotating));
        for _ in 0..10 {
            app.update();
        }
        assert!((yaw(&app) - 0.1).abs() < EPS, "yaw = {}", yaw(&app));

        let transform = app.world().get::<Transform>(model).unwrap();
        let (axis, angle) = transform.rotation.to_axis_angle();
        assert!((angle - 0.1).abs() < EPS);
        assert!(axis.y > 0.99);
    }

    #[test]
    fn test_stopping_freezes_yaw() {
        let (mut app, _) = rotation_app();
        let request = |app: &mut App| {
            app.world_mut()
                .resource_mut::<Messages<ToggleRequested>>()
                .write(ToggleRequested(Toggle::Rotating));
        };

        request(&mut app);
        for _ in 0..5 {
            app.update();
        }
        let spun = yaw(&app);
        assert!((spun - 0.05).abs() < EPS);

        request(&mut app);
        for _ in 0..20 {
            app.update();
        }
        assert_eq!(yaw(&app), spun);
    }

    #[test]
    fn test_missing_asset_fails_with_its_path() {
        let mut config = ViewerConfig::default();
        config.scene.asset = "does-not-exist.gltf".to_owned();

        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Gltf>()
            .insert_resource(ViewModel::from_config(&config))
            .insert_resource(SceneSettings(config))
            .add_plugins((ControlsPlugin, ModelsPlugin));

        for _ in 0..200 {
            app.update();
            if !app.world().resource::<ModelAsset>().state.is_loading() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }

        let model = app.world().resource::<ModelAsset>();
        let err = model.state.error().expect("load should have failed");
        assert_eq!(err.path, "does-not-exist.gltf");
        assert!(err.to_string().contains("does-not-exist.gltf"));

        let mut roots = app.world_mut().query::<&PotModel>();
        assert!(roots.iter(app.world()).next().is_none());
    }

    #[test]
    fn test_model_transform_placement() {
        let scene = Variant::Lab.preset().scene;
        let transform = model_transform(&scene, ModelOrientation::default());
        assert_eq!(transform.translation, Vec3::new(0.0, -3.0, 0.0));
        assert_eq!(transform.scale, Vec3::splat(0.1));
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }
}
