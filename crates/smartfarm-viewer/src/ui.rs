//! UI overlays using bevy_egui

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use smartfarm_core::labels::title;
use smartfarm_scene::ui::{render_asset_status, render_control_panel, render_sensor_panel};
use smartfarm_scene::{ModelAsset, SceneSettings, ToggleRequested, UiLayout, ViewModel};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update_ui_layout)
            // egui input is only valid inside EguiPrimaryContextPass
            .add_systems(EguiPrimaryContextPass, (install_fonts, ui_system).chain());
    }
}

/// Update UI layout based on window size
fn update_ui_layout(windows: Query<&Window>, mut ui_layout: ResMut<UiLayout>) {
    if let Ok(window) = windows.single() {
        let width = window.width();
        let height = window.height();

        // Only update if dimensions changed significantly
        if (ui_layout.screen_width - width).abs() > 1.0
            || (ui_layout.screen_height - height).abs() > 1.0
        {
            ui_layout.update_for_screen(width, height);
        }
    }
}

/// Register the configured font once so Hangul labels render
fn install_fonts(
    mut contexts: EguiContexts,
    settings: Res<SceneSettings>,
    mut installed: Local<bool>,
) {
    if *installed {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else { return };
    *installed = true;

    let Some(path) = settings.0.ui.font.as_ref() else {
        return;
    };

    #[cfg(not(target_arch = "wasm32"))]
    match std::fs::read(path) {
        Ok(bytes) => {
            let mut fonts = egui::FontDefinitions::default();
            fonts.font_data.insert(
                "custom".to_owned(),
                std::sync::Arc::new(egui::FontData::from_owned(bytes)),
            );
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts
                    .families
                    .entry(family)
                    .or_default()
                    .insert(0, "custom".to_owned());
            }
            ctx.set_fonts(fonts);
            tracing::info!(path = %path.display(), "Installed UI font");
        }
        Err(e) => tracing::warn!(path = %path.display(), "Failed to read UI font: {}", e),
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = ctx;
        tracing::warn!(path = %path.display(), "Custom fonts are not loaded in the browser");
    }
}

fn ui_system(
    mut contexts: EguiContexts,
    view: Res<ViewModel>,
    settings: Res<SceneSettings>,
    model: Res<ModelAsset>,
    ui_layout: Res<UiLayout>,
    mut requests: MessageWriter<ToggleRequested>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    let variant = settings.0.variant;
    let locale = view.locale();
    let ui_scale = ui_layout.ui_scale;

    egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new(title(locale)).size(22.0 * ui_scale));
        });
    });

    if variant.shows_controls() {
        egui::TopBottomPanel::bottom("control_panel").show(ctx, |ui| {
            ui.add_space(8.0 * ui_scale);
            if let Some(toggle) = render_control_panel(ui, view.state(), locale, &ui_layout) {
                requests.write(ToggleRequested(toggle));
            }
            ui.add_space(8.0 * ui_scale);
        });
    }

    if variant.shows_sensors() {
        egui::SidePanel::right("sensor_panel")
            .resizable(false)
            .exact_width(ui_layout.sensor_panel_width())
            .show(ctx, |ui| {
                render_sensor_panel(ui, &view.state().sensor_reading, locale, &ui_layout);
            });
    }

    render_asset_status(ctx, &model.state, locale);
}
