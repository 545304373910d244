//! Scene setup - camera, lights, and background

use bevy::prelude::*;
use smartfarm_core::config::{LightingConfig, Variant};

use crate::camera::{CameraSettings, MainCamera};
use crate::types::SceneSettings;

/// Ambient brightness per unit of configured ambient intensity
const AMBIENT_BRIGHTNESS_SCALE: f32 = 500.0;
/// Point light lumens per unit of configured point light intensity
const POINT_LIGHT_LUMENS: f32 = 4_000_000.0;
const POINT_LIGHT_RANGE: f32 = 100.0;

/// Marker component for the fill point light
#[derive(Component)]
pub struct MainPointLight;

/// Plugin for scene setup
pub struct SceneSetupPlugin;

impl Plugin for SceneSetupPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneSettings>()
            .add_systems(Startup, setup_scene);
    }
}

/// Page background behind the viewport
pub fn clear_color(variant: Variant) -> Color {
    match variant {
        Variant::Lab | Variant::LabSensors => Color::srgb(0.96, 0.96, 0.96),
        // Pale sky in place of the outdoor backdrop
        Variant::Capstone => Color::srgb(0.62, 0.78, 0.92),
    }
}

pub fn ambient_light(lighting: &LightingConfig) -> AmbientLight {
    AmbientLight {
        color: Color::WHITE,
        brightness: lighting.ambient_intensity * AMBIENT_BRIGHTNESS_SCALE,
        ..default()
    }
}

pub fn point_light(lighting: &LightingConfig) -> PointLight {
    PointLight {
        intensity: lighting.point_light_intensity * POINT_LIGHT_LUMENS,
        range: POINT_LIGHT_RANGE,
        shadows_enabled: false,
        ..default()
    }
}

fn setup_scene(mut commands: Commands, settings: Res<SceneSettings>) {
    let config = &settings.0;
    let camera_position = Vec3::from_array(config.camera.position);
    let far = (camera_position.length() * 10.0).max(1000.0);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera.fov_degrees.to_radians(),
            near: 0.1,
            far,
            ..default()
        }),
        Transform::from_translation(camera_position).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
    commands.insert_resource(CameraSettings::from_config(&config.camera));

    commands.insert_resource(ClearColor(clear_color(config.variant)));
    commands.insert_resource(ambient_light(&config.lighting));

    if config.lighting.point_light_intensity > 0.0 {
        commands.spawn((
            point_light(&config.lighting),
            Transform::from_translation(Vec3::from_array(config.lighting.point_light_position)),
            MainPointLight,
        ));
    }

    tracing::info!(
        variant = %config.variant,
        fov = config.camera.fov_degrees,
        "Scene ready"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_intensities_scale_linearly() {
        let lab = Variant::Lab.preset().lighting;
        let doubled = LightingConfig {
            ambient_intensity: lab.ambient_intensity * 2.0,
            point_light_intensity: lab.point_light_intensity * 2.0,
            ..lab.clone()
        };
        assert_eq!(
            ambient_light(&doubled).brightness,
            ambient_light(&lab).brightness * 2.0
        );
        assert_eq!(point_light(&doubled).intensity, point_light(&lab).intensity * 2.0);
    }

    #[test]
    fn test_setup_spawns_camera_at_configured_position() {
        let mut app = App::new();
        app.insert_resource(SceneSettings(Variant::Capstone.preset()))
            .add_systems(Startup, setup_scene);
        app.update();

        let world = app.world_mut();
        let mut cameras = world.query_filtered::<&Transform, With<MainCamera>>();
        let translation = cameras.single(world).unwrap().translation;
        assert_eq!(translation, Vec3::new(200.0, 200.0, 300.0));

        let settings = world.resource::<CameraSettings>();
        assert!(settings.eye().distance(translation) < 0.5);

        let mut lights = world.query_filtered::<&PointLight, With<MainPointLight>>();
        assert_eq!(lights.iter(world).count(), 1);
    }
}
