//! SmartFarm Viewer - Smart farm bench visualization
//!
//! Renders the bench model with mock bluetooth, rotation, and curtain
//! controls. Runs natively through the `smartfarm` binary or in the
//! browser as a WASM module.

pub mod app;
mod ui;

pub use app::run;

#[cfg(target_arch = "wasm32")]
mod web {
    use smartfarm_core::{ConfigFile, Variant, ViewerConfig};
    use wasm_bindgen::prelude::*;

    /// Read `?variant=` and `?locale=` from the page URL
    fn config_from_url() -> ViewerConfig {
        let mut file = ConfigFile::default();

        let params = web_sys::window()
            .and_then(|w| w.location().href().ok())
            .and_then(|href| web_sys::Url::new(&href).ok())
            .map(|url| url.search_params());

        if let Some(params) = params {
            if let Some(variant) = params.get("variant") {
                match variant.parse::<Variant>() {
                    Ok(v) => file.variant = v,
                    Err(e) => tracing::warn!("{}", e),
                }
            }
            if let Some(locale) = params.get("locale") {
                match locale.parse() {
                    Ok(l) => file.locale = l,
                    Err(e) => tracing::warn!("{}", e),
                }
            }
        }

        file.resolve().unwrap_or_else(|e| {
            tracing::error!("Invalid configuration, using lab preset: {}", e);
            ViewerConfig::default()
        })
    }

    /// WASM entry point
    #[wasm_bindgen(start)]
    pub fn main() {
        // Set up panic hook for better error messages
        console_error_panic_hook::set_once();

        tracing_wasm::set_as_global_default_with_config(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(tracing::Level::INFO)
                .build(),
        );

        crate::app::run(config_from_url());
    }
}
