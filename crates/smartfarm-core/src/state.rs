//! View state for the control panel and the pure reducers that flip it
//!
//! The state is a plain `Copy` record. Every user action is a function from
//! one state to the next, so the UI layer only has to pick which reducer to
//! apply and render the result.

use std::fmt;

/// Static sensor snapshot shown next to the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Temperature in Celsius
    pub temperature: f32,
    /// Relative humidity percentage
    pub humidity: f32,
    /// Light intensity in lux
    pub light_level: f32,
}

impl SensorReading {
    /// Placeholder values displayed by the lab bench front-end
    pub const PLACEHOLDER: SensorReading = SensorReading {
        temperature: 25.5,
        humidity: 65.0,
        light_level: 850.0,
    };
}

impl Default for SensorReading {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

/// One of the three independent boolean controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    /// Mock bluetooth link
    Connected,
    /// Model spin
    Rotating,
    /// Curtain overlay (true = open, overlay hidden)
    Curtain,
}

impl Toggle {
    /// All toggles in control panel order
    pub const ALL: [Toggle; 3] = [Toggle::Connected, Toggle::Rotating, Toggle::Curtain];
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toggle::Connected => write!(f, "connected"),
            Toggle::Rotating => write!(f, "rotating"),
            Toggle::Curtain => write!(f, "curtain"),
        }
    }
}

/// Complete state of the interactive view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub connected: bool,
    pub rotating: bool,
    /// `true` hides the overlay, `false` shows it
    pub curtain_open: bool,
    pub sensor_reading: SensorReading,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            connected: false,
            rotating: false,
            curtain_open: true,
            sensor_reading: SensorReading::PLACEHOLDER,
        }
    }
}

impl ViewState {
    /// Initial state with a specific sensor snapshot
    pub fn with_sensor_reading(sensor_reading: SensorReading) -> Self {
        Self {
            sensor_reading,
            ..Self::default()
        }
    }

    /// Current value of a toggle
    pub fn get(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Connected => self.connected,
            Toggle::Rotating => self.rotating,
            Toggle::Curtain => self.curtain_open,
        }
    }

    /// Whether the translucent curtain overlay is drawn
    pub fn overlay_visible(&self) -> bool {
        !self.curtain_open
    }
}

pub fn reduce_toggle_connected(state: ViewState) -> ViewState {
    ViewState {
        connected: !state.connected,
        ..state
    }
}

pub fn reduce_toggle_rotating(state: ViewState) -> ViewState {
    ViewState {
        rotating: !state.rotating,
        ..state
    }
}

pub fn reduce_toggle_curtain(state: ViewState) -> ViewState {
    ViewState {
        curtain_open: !state.curtain_open,
        ..state
    }
}

/// Dispatch to the reducer for `toggle`
pub fn reduce_toggle(state: ViewState, toggle: Toggle) -> ViewState {
    match toggle {
        Toggle::Connected => reduce_toggle_connected(state),
        Toggle::Rotating => reduce_toggle_rotating(state),
        Toggle::Curtain => reduce_toggle_curtain(state),
    }
}
