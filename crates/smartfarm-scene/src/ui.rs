//! Shared UI components for the control panel, sensor readout, and model status

use bevy_egui::egui;
use smartfarm_core::labels::{button_label, loading_message, sensor_captions};
use smartfarm_core::{AssetState, Locale, SensorReading, Toggle, ViewState};

use crate::types::UiLayout;

const BUTTON_FILL: egui::Color32 = egui::Color32::from_rgb(76, 175, 80);

/// Formatted sensor values with units: temperature, humidity, light
pub fn format_sensor_values(reading: &SensorReading) -> [String; 3] {
    [
        format!("{:.1} °C", reading.temperature),
        format!("{:.0} %", reading.humidity),
        format!("{:.0} lux", reading.light_level),
    ]
}

/// Render the three toggle buttons. Returns the toggle that was clicked, if any.
pub fn render_control_panel(
    ui: &mut egui::Ui,
    state: &ViewState,
    locale: Locale,
    ui_layout: &UiLayout,
) -> Option<Toggle> {
    let ui_scale = ui_layout.ui_scale;
    let mut clicked = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 20.0 * ui_scale;

        // Link status indicator
        let status_color = if state.connected {
            egui::Color32::GREEN
        } else {
            egui::Color32::RED
        };
        ui.colored_label(status_color, "●");

        for toggle in Toggle::ALL {
            let label = button_label(toggle, state.get(toggle), locale);
            let button = egui::Button::new(
                egui::RichText::new(label)
                    .size(14.0 * ui_scale)
                    .color(egui::Color32::WHITE),
            )
            .fill(BUTTON_FILL)
            .min_size(egui::vec2(0.0, 32.0 * ui_scale));

            if ui.add(button).clicked() {
                clicked = Some(toggle);
            }
        }
    });

    clicked
}

/// Render the static sensor readout
pub fn render_sensor_panel(
    ui: &mut egui::Ui,
    reading: &SensorReading,
    locale: Locale,
    ui_layout: &UiLayout,
) {
    let ui_scale = ui_layout.ui_scale;
    let captions = sensor_captions(locale);
    let values = format_sensor_values(reading);

    for (caption, value) in captions.iter().zip(values.iter()) {
        ui.label(
            egui::RichText::new(*caption)
                .small()
                .color(egui::Color32::GRAY),
        );
        ui.label(egui::RichText::new(value).size(18.0 * ui_scale).strong());
        ui.add_space(6.0 * ui_scale);
    }
}

/// Centered banner while the model loads or after it failed
pub fn render_asset_status(ctx: &egui::Context, state: &AssetState, locale: Locale) {
    if state.is_ready() {
        return;
    }

    egui::Area::new(egui::Id::new("asset_status"))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::window(ui.style()).show(ui, |ui| match state {
                AssetState::Loading => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(loading_message(locale));
                    });
                }
                AssetState::Failed(err) => {
                    ui.colored_label(egui::Color32::from_rgb(220, 60, 60), err.to_string());
                }
                AssetState::Ready => {}
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_readings_format() {
        let values = format_sensor_values(&SensorReading::PLACEHOLDER);
        assert_eq!(values, ["25.5 °C".to_string(), "65 %".to_string(), "850 lux".to_string()]);
    }
}
