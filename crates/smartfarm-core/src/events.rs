//! Toggle transition events and the sink they are emitted to
//!
//! `ToggleController` is the only place that mutates a [`ViewState`]. Every
//! transition produces exactly one [`ToggleEvent`] which is handed to the
//! injected [`EventSink`]. The application logs through [`TracingSink`];
//! tests collect events with [`RecordingSink`].

use std::fmt;

use crate::labels::Locale;
use crate::state::{reduce_toggle, Toggle, ViewState};

/// Word describing the state a toggle has just entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Connect,
    Disconnect,
    Start,
    Stop,
    Open,
    Close,
}

impl ToggleAction {
    pub fn for_transition(toggle: Toggle, now_enabled: bool) -> Self {
        match (toggle, now_enabled) {
            (Toggle::Connected, true) => ToggleAction::Connect,
            (Toggle::Connected, false) => ToggleAction::Disconnect,
            (Toggle::Rotating, true) => ToggleAction::Start,
            (Toggle::Rotating, false) => ToggleAction::Stop,
            (Toggle::Curtain, true) => ToggleAction::Open,
            (Toggle::Curtain, false) => ToggleAction::Close,
        }
    }
}

impl fmt::Display for ToggleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            ToggleAction::Connect => "connect",
            ToggleAction::Disconnect => "disconnect",
            ToggleAction::Start => "start",
            ToggleAction::Stop => "stop",
            ToggleAction::Open => "open",
            ToggleAction::Close => "close",
        };
        f.write_str(word)
    }
}

/// A single toggle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleEvent {
    pub toggle: Toggle,
    /// Value of the toggle after the transition
    pub enabled: bool,
}

impl ToggleEvent {
    pub fn action(&self) -> ToggleAction {
        ToggleAction::for_transition(self.toggle, self.enabled)
    }

    /// Human-readable console line for this transition
    pub fn describe(&self, locale: Locale) -> String {
        match locale {
            Locale::En => match self.toggle {
                Toggle::Connected => format!("Bluetooth {}", self.action()),
                Toggle::Rotating => format!("Bluetooth signal: rotation {}", self.action()),
                Toggle::Curtain => format!("Bluetooth signal: curtain {}", self.action()),
            },
            Locale::Ko => {
                let text = match self.action() {
                    ToggleAction::Connect => "블루투스 연결",
                    ToggleAction::Disconnect => "블루투스 연결 해제",
                    ToggleAction::Start => "블루투스 신호: 회전 시작",
                    ToggleAction::Stop => "블루투스 신호: 회전 정지",
                    ToggleAction::Open => "블루투스 신호: 가림막 열기",
                    ToggleAction::Close => "블루투스 신호: 가림막 닫기",
                };
                text.to_string()
            }
        }
    }
}

/// Port receiving toggle transitions
pub trait EventSink {
    fn emit(&mut self, event: &ToggleEvent);
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn emit(&mut self, event: &ToggleEvent) {
        (**self).emit(event)
    }
}

/// Writes each transition to the `tracing` console channel
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    pub locale: Locale,
}

impl TracingSink {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

impl EventSink for TracingSink {
    fn emit(&mut self, event: &ToggleEvent) {
        tracing::info!(
            toggle = %event.toggle,
            action = %event.action(),
            "{}",
            event.describe(self.locale)
        );
    }
}

/// Keeps every emitted event in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<ToggleEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &ToggleEvent) {
        self.events.push(*event);
    }
}

/// Owns the view state and reports every change to its sink
#[derive(Debug, Clone)]
pub struct ToggleController<S> {
    state: ViewState,
    sink: S,
}

impl<S: EventSink> ToggleController<S> {
    pub fn new(state: ViewState, sink: S) -> Self {
        Self { state, sink }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Apply the reducer for `toggle` and emit the resulting event
    pub fn toggle(&mut self, toggle: Toggle) -> ToggleEvent {
        self.state = reduce_toggle(self.state, toggle);
        let event = ToggleEvent {
            toggle,
            enabled: self.state.get(toggle),
        };
        self.sink.emit(&event);
        event
    }

    pub fn toggle_connected(&mut self) -> ToggleEvent {
        self.toggle(Toggle::Connected)
    }

    pub fn toggle_rotating(&mut self) -> ToggleEvent {
        self.toggle(Toggle::Rotating)
    }

    pub fn toggle_curtain(&mut self) -> ToggleEvent {
        self.toggle(Toggle::Curtain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> ToggleController<RecordingSink> {
        ToggleController::new(ViewState::default(), RecordingSink::default())
    }

    #[test]
    fn test_each_toggle_emits_one_event() {
        let mut c = controller();
        c.toggle_connected();
        c.toggle_rotating();
        c.toggle_curtain();

        let events = &c.sink().events;
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].action(), ToggleAction::Connect);
        assert_eq!(events[1].action(), ToggleAction::Start);
        assert_eq!(events[2].action(), ToggleAction::Close);
    }

    #[test]
    fn test_event_names_new_state() {
        let mut c = controller();
        let on = c.toggle_rotating();
        let off = c.toggle_rotating();
        assert!(on.enabled);
        assert!(!off.enabled);
        assert_eq!(on.action().to_string(), "start");
        assert_eq!(off.action().to_string(), "stop");
        assert!(!c.state().rotating);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut c = controller();
        let initial = *c.state();
        for toggle in Toggle::ALL {
            c.toggle(toggle);
            c.toggle(toggle);
        }
        assert_eq!(*c.state(), initial);
        assert_eq!(c.sink().events.len(), 6);
    }

    #[test]
    fn test_describe() {
        let connect = ToggleEvent {
            toggle: Toggle::Connected,
            enabled: true,
        };
        assert_eq!(connect.describe(Locale::En), "Bluetooth connect");
        assert_eq!(connect.describe(Locale::Ko), "블루투스 연결");

        let close = ToggleEvent {
            toggle: Toggle::Curtain,
            enabled: false,
        };
        assert_eq!(close.describe(Locale::En), "Bluetooth signal: curtain close");
        assert_eq!(close.describe(Locale::Ko), "블루투스 신호: 가림막 닫기");
    }

    #[test]
    fn test_boxed_sink() {
        let mut c: ToggleController<Box<dyn EventSink>> =
            ToggleController::new(ViewState::default(), Box::new(TracingSink::default()));
        let event = c.toggle_connected();
        assert!(event.enabled);
        assert!(c.state().connected);
    }
}
