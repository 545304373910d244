//! SmartFarm Core - View model, configuration, and asset state
//!
//! This crate holds everything about the viewer that does not need a
//! renderer:
//! - The control panel state and the reducers that flip its toggles
//! - The per-frame model rotation step
//! - Toggle events and the sink they are reported to
//! - Variant presets and TOML configuration
//! - The model asset load state

pub mod asset;
pub mod config;
pub mod events;
pub mod labels;
pub mod orientation;
pub mod state;

pub use asset::{AssetLoadError, AssetState};
pub use config::{ConfigError, ConfigFile, Variant, ViewerConfig};
pub use events::{
    EventSink, RecordingSink, ToggleAction, ToggleController, ToggleEvent, TracingSink,
};
pub use labels::Locale;
pub use orientation::{advance, ModelOrientation, ROTATION_STEP};
pub use state::{
    reduce_toggle, reduce_toggle_connected, reduce_toggle_curtain, reduce_toggle_rotating,
    SensorReading, Toggle, ViewState,
};
