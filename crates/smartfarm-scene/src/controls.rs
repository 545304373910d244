//! Applies toggle requests from the UI to the view model

use bevy::prelude::*;

use crate::types::{ToggleChanged, ToggleRequested, ViewModel};

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewModel>()
            .add_message::<ToggleRequested>()
            .add_message::<ToggleChanged>()
            .add_systems(Update, apply_toggle_requests);
    }
}

/// Flip each requested toggle in arrival order
pub fn apply_toggle_requests(
    mut requests: MessageReader<ToggleRequested>,
    mut view: ResMut<ViewModel>,
    mut changed: MessageWriter<ToggleChanged>,
) {
    for ToggleRequested(toggle) in requests.read() {
        let event = view.toggle(*toggle);
        changed.write(ToggleChanged(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;
    use smartfarm_core::Toggle;

    fn request(app: &mut App, toggle: Toggle) {
        app.world_mut()
            .resource_mut::<Messages<ToggleRequested>>()
            .write(ToggleRequested(toggle));
    }

    #[test]
    fn test_requests_flip_state() {
        let mut app = App::new();
        app.add_plugins(ControlsPlugin);

        request(&mut app, Toggle::Connected);
        request(&mut app, Toggle::Rotating);
        app.update();

        let state = *app.world().resource::<ViewModel>().state();
        assert!(state.connected);
        assert!(state.rotating);
        assert!(state.curtain_open);
    }

    #[test]
    fn test_double_request_in_one_frame_cancels_out() {
        let mut app = App::new();
        app.add_plugins(ControlsPlugin);

        request(&mut app, Toggle::Curtain);
        request(&mut app, Toggle::Curtain);
        app.update();

        assert!(app.world().resource::<ViewModel>().state().curtain_open);
    }

    #[test]
    fn test_each_flip_announces_new_value() {
        let mut app = App::new();
        app.add_plugins(ControlsPlugin);

        request(&mut app, Toggle::Curtain);
        request(&mut app, Toggle::Connected);
        app.update();

        let changed = app.world().resource::<Messages<ToggleChanged>>();
        let events: Vec<_> = changed
            .iter_current_update_messages()
            .map(|ToggleChanged(event)| (event.toggle, event.enabled))
            .collect();
        assert_eq!(
            events,
            vec![(Toggle::Curtain, false), (Toggle::Connected, true)]
        );
    }

    #[test]
    fn test_no_requests_no_change() {
        let mut app = App::new();
        app.add_plugins(ControlsPlugin);
        for _ in 0..5 {
            app.update();
        }
        assert_eq!(
            *app.world().resource::<ViewModel>().state(),
            smartfarm_core::ViewState::default()
        );
    }
}
