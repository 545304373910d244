//! Shared resources and messages for the view model, scene settings, and UI layout

use bevy::prelude::*;
use smartfarm_core::{
    Locale, ModelOrientation, Toggle, ToggleController, ToggleEvent, TracingSink, ViewState,
    ViewerConfig,
};

/// Resolved viewer configuration
#[derive(Debug, Clone, Resource, Default)]
pub struct SceneSettings(pub ViewerConfig);

/// Control panel state, owned by the app for its whole lifetime
#[derive(Debug, Resource)]
pub struct ViewModel {
    controller: ToggleController<TracingSink>,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new(ViewState::default(), Locale::default())
    }
}

impl ViewModel {
    pub fn new(state: ViewState, locale: Locale) -> Self {
        Self {
            controller: ToggleController::new(state, TracingSink::new(locale)),
        }
    }

    /// Initial view model for a resolved configuration
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(ViewState::with_sensor_reading(config.sensors), config.locale)
    }

    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    pub fn locale(&self) -> Locale {
        self.controller.sink().locale
    }

    pub fn toggle(&mut self, toggle: Toggle) -> ToggleEvent {
        self.controller.toggle(toggle)
    }
}

/// Current yaw of the model, advanced once per frame
#[derive(Debug, Clone, Copy, Resource, Default)]
pub struct ModelYaw(pub ModelOrientation);

/// A button asked for `Toggle` to be flipped
#[derive(Message, Debug, Clone, Copy)]
pub struct ToggleRequested(pub Toggle);

/// A toggle was flipped
#[derive(Message, Debug, Clone, Copy)]
pub struct ToggleChanged(pub ToggleEvent);

/// UI layout settings for responsive design
#[derive(Debug, Clone, Resource)]
pub struct UiLayout {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Whether we're on a small screen (mobile/tablet)
    pub is_mobile: bool,
    pub ui_scale: f32,
}

impl Default for UiLayout {
    fn default() -> Self {
        Self {
            screen_width: 1280.0,
            screen_height: 720.0,
            is_mobile: false,
            ui_scale: 1.0,
        }
    }
}

impl UiLayout {
    /// Update layout based on screen dimensions
    pub fn update_for_screen(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
        self.is_mobile = width < 800.0 || (width < height && width < 600.0);
        // Larger touch targets on phones
        self.ui_scale = if self.is_mobile { 1.15 } else { 1.0 };
    }

    /// Width of the sensor side panel
    pub fn sensor_panel_width(&self) -> f32 {
        if self.is_mobile {
            (self.screen_width * 0.4).min(160.0)
        } else {
            220.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_model_from_config() {
        let mut config = ViewerConfig::default();
        config.locale = Locale::Ko;
        config.sensors.temperature = 19.0;

        let view = ViewModel::from_config(&config);
        assert_eq!(view.locale(), Locale::Ko);
        assert_eq!(view.state().sensor_reading.temperature, 19.0);
        assert!(view.state().curtain_open);
    }

    #[test]
    fn test_layout_breakpoints() {
        let mut layout = UiLayout::default();
        layout.update_for_screen(390.0, 844.0);
        assert!(layout.is_mobile);
        assert!(layout.sensor_panel_width() <= 160.0);

        layout.update_for_screen(1920.0, 1080.0);
        assert!(!layout.is_mobile);
        assert_eq!(layout.sensor_panel_width(), 220.0);
    }
}
