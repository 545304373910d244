//! Curtain overlay drawn over the viewport while the curtain is closed

use bevy::prelude::*;
use bevy::ui::FocusPolicy;
use bevy_picking::Pickable;
use smartfarm_core::{Toggle, ViewState};

use crate::controls::apply_toggle_requests;
use crate::types::{SceneSettings, ToggleChanged, ViewModel};

const CURTAIN_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.5);

/// Marker component for the curtain overlay node
#[derive(Component)]
pub struct CurtainOverlay;

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_curtain_overlay)
            .add_systems(Update, sync_curtain_overlay.after(apply_toggle_requests));
    }
}

/// Visibility of the overlay for a given state
pub fn curtain_visibility(state: &ViewState) -> Visibility {
    if state.overlay_visible() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

fn spawn_curtain_overlay(
    mut commands: Commands,
    settings: Res<SceneSettings>,
    view: Res<ViewModel>,
) {
    if !settings.0.variant.shows_curtain() {
        return;
    }

    // Dims the view without taking pointer input from the camera controls
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            top: Val::Px(0.0),
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(CURTAIN_COLOR),
        FocusPolicy::Pass,
        Pickable::IGNORE,
        curtain_visibility(view.state()),
        CurtainOverlay,
    ));
}

/// Re-sync the overlay after the curtain was flipped this frame
pub fn sync_curtain_overlay(
    mut changes: MessageReader<ToggleChanged>,
    view: Res<ViewModel>,
    mut overlays: Query<&mut Visibility, With<CurtainOverlay>>,
) {
    let curtain_flips = changes
        .read()
        .filter(|ToggleChanged(event)| event.toggle == Toggle::Curtain)
        .count();
    if curtain_flips == 0 {
        return;
    }

    let target = curtain_visibility(view.state());
    for mut visibility in &mut overlays {
        if *visibility != target {
            *visibility = target;
        }
    }
}
