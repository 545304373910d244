//! Button labels and diagnostic wording
//!
//! Label text is a pure function of the toggle, its current value, and the
//! display locale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::state::Toggle;

/// Display language for labels and log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    /// Korean, as used on the original bench front-end
    Ko,
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ko" | "korean" => Ok(Locale::Ko),
            _ => Err(ConfigError::UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Ko => write!(f, "ko"),
        }
    }
}

/// Text of the button that flips `toggle`, given its current value
pub fn button_label(toggle: Toggle, value: bool, locale: Locale) -> &'static str {
    match (locale, toggle, value) {
        (Locale::En, Toggle::Connected, false) => "Connect Bluetooth",
        (Locale::En, Toggle::Connected, true) => "Disconnect Bluetooth",
        (Locale::En, Toggle::Rotating, false) => "Start Rotation",
        (Locale::En, Toggle::Rotating, true) => "Stop Rotation",
        // Open curtain offers to lower it, closed curtain offers to raise it
        (Locale::En, Toggle::Curtain, true) => "Lower Curtain",
        (Locale::En, Toggle::Curtain, false) => "Raise Curtain",
        (Locale::Ko, Toggle::Connected, false) => "블루투스 연결",
        (Locale::Ko, Toggle::Connected, true) => "블루투스 연결 해제",
        (Locale::Ko, Toggle::Rotating, false) => "회전 시작",
        (Locale::Ko, Toggle::Rotating, true) => "회전 정지",
        (Locale::Ko, Toggle::Curtain, true) => "가림막 내리기",
        (Locale::Ko, Toggle::Curtain, false) => "가림막 올리기",
    }
}

/// Window and page title
pub fn title(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Smart Farm Control System",
        Locale::Ko => "스마트팜 제어 시스템",
    }
}

/// Sensor panel captions, in display order: temperature, humidity, light
pub fn sensor_captions(locale: Locale) -> [&'static str; 3] {
    match locale {
        Locale::En => ["Temperature", "Humidity", "Light Level"],
        Locale::Ko => ["온도", "습도", "조도"],
    }
}

pub fn loading_message(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Loading model...",
        Locale::Ko => "모델 불러오는 중...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_distinct_labels_per_toggle() {
        for locale in [Locale::En, Locale::Ko] {
            for toggle in Toggle::ALL {
                let off = button_label(toggle, false, locale);
                let on = button_label(toggle, true, locale);
                assert_ne!(off, on, "{} labels collide in {}", toggle, locale);
                assert!(!off.is_empty() && !on.is_empty());
            }
        }
    }

    #[test]
    fn test_curtain_labels_describe_next_action() {
        assert_eq!(button_label(Toggle::Curtain, true, Locale::En), "Lower Curtain");
        assert_eq!(button_label(Toggle::Curtain, false, Locale::En), "Raise Curtain");
        assert_eq!(button_label(Toggle::Curtain, true, Locale::Ko), "가림막 내리기");
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("korean".parse::<Locale>().unwrap(), Locale::Ko);
        assert!("fr".parse::<Locale>().is_err());
    }
}
