//! Camera controls and orbit navigation

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use smartfarm_core::config::CameraConfig;

/// Camera controller settings
#[derive(Debug, Clone, Resource)]
pub struct CameraSettings {
    pub distance: f32,
    pub target_distance: f32,
    pub azimuth: f32,
    pub elevation: f32,
    pub target: Vec3,
    pub target_focus: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pub smooth_factor: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self::from_position(Vec3::new(5.0, 5.0, 5.0), Vec3::ZERO)
    }
}

impl CameraSettings {
    /// Orbit around `target` starting exactly at `position`
    pub fn from_position(position: Vec3, target: Vec3) -> Self {
        let (distance, azimuth, elevation) = orbit_from_offset(position - target);
        Self {
            distance,
            target_distance: distance,
            azimuth,
            elevation,
            target,
            target_focus: target,
            min_distance: distance * 0.1,
            max_distance: distance * 10.0,
            sensitivity: 0.005,
            zoom_speed: 0.1,
            smooth_factor: 0.15,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::from_position(Vec3::from_array(config.position), Vec3::ZERO)
    }

    /// Camera position for the current orbit (Y up)
    pub fn eye(&self) -> Vec3 {
        let x = self.distance * self.azimuth.cos() * self.elevation.cos();
        let y = self.distance * self.elevation.sin();
        let z = self.distance * self.azimuth.sin() * self.elevation.cos();
        self.target + Vec3::new(x, y, z)
    }
}

/// Spherical coordinates (distance, azimuth, elevation) of an offset, Y up
pub fn orbit_from_offset(offset: Vec3) -> (f32, f32, f32) {
    let distance = offset.length();
    if distance <= f32::EPSILON {
        return (0.0, 0.0, 0.0);
    }
    let elevation = (offset.y / distance).clamp(-1.0, 1.0).asin();
    let azimuth = offset.z.atan2(offset.x);
    (distance, azimuth, elevation)
}

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Plugin for camera controls
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .add_systems(Update, update_camera);
    }
}

fn update_camera(
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
    mut settings: ResMut<CameraSettings>,
    mut mouse_motion: MessageReader<MouseMotion>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    time: Res<Time>,
    mut contexts: bevy_egui::EguiContexts,
) {
    // Panels and buttons keep the pointer
    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);

    let mut total_motion = Vec2::ZERO;
    for motion in mouse_motion.read() {
        total_motion += motion.delta;
    }

    // Orbit with left mouse drag
    if mouse_button.pressed(MouseButton::Left) && !egui_wants_pointer {
        settings.azimuth += total_motion.x * settings.sensitivity;
        settings.elevation = (settings.elevation + total_motion.y * settings.sensitivity)
            .clamp(-1.5, 1.5);
    }

    // Pan with right mouse drag in the camera's view plane
    if mouse_button.pressed(MouseButton::Right) && !egui_wants_pointer {
        if let Ok(transform) = camera_query.single() {
            let pan_speed = settings.distance * 0.002;
            let right = transform.right().as_vec3();
            let up = transform.up().as_vec3();
            settings.target_focus -= right * total_motion.x * pan_speed;
            settings.target_focus += up * total_motion.y * pan_speed;
        }
    }

    if !egui_wants_pointer {
        for scroll in mouse_wheel.read() {
            let zoom_factor = 1.0 - scroll.y * settings.zoom_speed * 0.3;
            settings.target_distance = (settings.target_distance * zoom_factor)
                .clamp(settings.min_distance, settings.max_distance);
        }
    } else {
        // Drain the scroll events even if we're not using them
        for _ in mouse_wheel.read() {}
    }

    // Touch support for mobile
    if touch_input.iter().count() == 1 && !egui_wants_pointer {
        for touch in touch_input.iter() {
            let delta = touch.delta();
            if delta != Vec2::ZERO {
                settings.azimuth += delta.x * settings.sensitivity;
                settings.elevation = (settings.elevation + delta.y * settings.sensitivity)
                    .clamp(-1.5, 1.5);
            }
        }
    }

    // Pinch to zoom
    if touch_input.iter().count() == 2 {
        let touches: Vec<_> = touch_input.iter().collect();
        if let (Some(t1), Some(t2)) = (touches.first(), touches.get(1)) {
            let curr_dist = t1.position().distance(t2.position());
            let prev_dist = (t1.position() - t1.delta()).distance(t2.position() - t2.delta());
            let zoom_factor = prev_dist / curr_dist.max(1.0);
            settings.target_distance = (settings.target_distance * zoom_factor)
                .clamp(settings.min_distance, settings.max_distance);
        }
    }

    // Smooth interpolation for zoom and target
    let dt = time.delta_secs();
    let lerp_factor = 1.0 - (-settings.smooth_factor * 60.0 * dt).exp();
    settings.distance += (settings.target_distance - settings.distance) * lerp_factor;
    settings.target = settings.target + (settings.target_focus - settings.target) * lerp_factor;

    if let Ok(mut transform) = camera_query.single_mut() {
        transform.translation = settings.eye();
        transform.look_at(settings.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_starts_at_configured_position() {
        for position in [
            Vec3::new(5.0, 5.0, 5.0),
            Vec3::new(200.0, 200.0, 300.0),
            Vec3::new(-3.0, 1.0, 0.5),
        ] {
            let settings = CameraSettings::from_position(position, Vec3::ZERO);
            assert!(
                settings.eye().distance(position) < 1e-3 * position.length(),
                "eye {:?} != {:?}",
                settings.eye(),
                position
            );
        }
    }

    #[test]
    fn test_zoom_bounds_scale_with_distance() {
        let settings = CameraSettings::from_config(&CameraConfig {
            position: [200.0, 200.0, 300.0],
            fov_degrees: 120.0,
        });
        assert!(settings.min_distance < settings.distance);
        assert!(settings.max_distance > settings.distance);
        assert!(settings.max_distance > 1000.0);
    }

    #[test]
    fn test_orbit_from_zero_offset() {
        assert_eq!(orbit_from_offset(Vec3::ZERO), (0.0, 0.0, 0.0));
    }
}
