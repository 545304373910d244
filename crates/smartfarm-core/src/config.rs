//! Viewer configuration loading and validation
//!
//! A configuration file selects a [`Variant`] preset and may override any of
//! its scene, camera, lighting, sensor, or UI values. Omitted values keep the
//! preset. [`ConfigFile::resolve`] merges the two and validates the result.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

use crate::labels::Locale;
use crate::state::SensorReading;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Unknown variant: {0} (expected lab, lab-sensors, or capstone)")]
    UnknownVariant(String),
    #[error("Unknown locale: {0} (expected en or ko)")]
    UnknownLocale(String),
    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Front-end layout preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Control panel and curtain overlay
    #[default]
    Lab,
    /// Lab layout plus the sensor readout
    LabSensors,
    /// Model viewer only, wide-angle camera
    Capstone,
}

impl Variant {
    pub fn shows_controls(&self) -> bool {
        matches!(self, Variant::Lab | Variant::LabSensors)
    }

    pub fn shows_sensors(&self) -> bool {
        matches!(self, Variant::LabSensors)
    }

    /// The curtain is only reachable through the control panel
    pub fn shows_curtain(&self) -> bool {
        self.shows_controls()
    }

    /// Fully resolved configuration for this preset
    pub fn preset(&self) -> ViewerConfig {
        let lab_scene = SceneConfig {
            asset: default_asset(),
            model_scale: 0.1,
            model_position: [0.0, -3.0, 0.0],
        };
        let lab_camera = CameraConfig {
            position: [5.0, 5.0, 5.0],
            fov_degrees: 75.0,
        };
        let lab_lighting = LightingConfig {
            ambient_intensity: 0.5,
            point_light_position: [10.0, 10.0, 10.0],
            point_light_intensity: 1.0,
        };

        match self {
            Variant::Lab | Variant::LabSensors => ViewerConfig {
                variant: *self,
                locale: Locale::default(),
                scene: lab_scene,
                camera: lab_camera,
                lighting: lab_lighting,
                sensors: SensorReading::PLACEHOLDER,
                ui: UiConfig::default(),
            },
            Variant::Capstone => {
                // Zoomed out to fit the full-size model
                let zoom = 100.0;
                ViewerConfig {
                    variant: *self,
                    locale: Locale::default(),
                    scene: SceneConfig {
                        model_position: [0.0, 0.0, 0.0],
                        ..lab_scene
                    },
                    camera: CameraConfig {
                        position: [2.0 * zoom, 2.0 * zoom, 3.0 * zoom],
                        fov_degrees: 120.0,
                    },
                    // Brighter ambient stands in for an outdoor environment map
                    lighting: LightingConfig {
                        ambient_intensity: 1.5,
                        ..lab_lighting
                    },
                    sensors: SensorReading::PLACEHOLDER,
                    ui: UiConfig::default(),
                }
            }
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "lab" => Ok(Variant::Lab),
            "lab-sensors" => Ok(Variant::LabSensors),
            "capstone" => Ok(Variant::Capstone),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Lab => write!(f, "lab"),
            Variant::LabSensors => write!(f, "lab-sensors"),
            Variant::Capstone => write!(f, "capstone"),
        }
    }
}

fn default_asset() -> String {
    "scene.gltf".to_string()
}

/// Model asset and placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Asset path relative to the asset root
    pub asset: String,
    /// Uniform scale applied to the model root
    pub model_scale: f32,
    pub model_position: [f32; 3],
}

/// Initial camera placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingConfig {
    pub ambient_intensity: f32,
    pub point_light_position: [f32; 3],
    pub point_light_intensity: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Font file registered with the UI (needed for Hangul glyphs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<PathBuf>,
}

/// Validated configuration used by the viewer
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub variant: Variant,
    pub locale: Locale,
    pub scene: SceneConfig,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub sensors: SensorReading,
    pub ui: UiConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Variant::default().preset()
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scene.asset.trim().is_empty() {
            return Err(invalid("scene.asset", "asset path must not be empty"));
        }
        if !(self.scene.model_scale.is_finite() && self.scene.model_scale > 0.0) {
            return Err(invalid(
                "scene.model_scale",
                format!("{} is not a positive number", self.scene.model_scale),
            ));
        }
        check_finite("scene.model_position", &self.scene.model_position)?;
        check_finite("camera.position", &self.camera.position)?;
        if self.camera.position == [0.0, 0.0, 0.0] {
            return Err(invalid("camera.position", "camera cannot sit at the origin"));
        }
        let fov = self.camera.fov_degrees;
        if !(fov > 0.0 && fov < 180.0) {
            return Err(invalid(
                "camera.fov_degrees",
                format!("{} is outside (0, 180)", fov),
            ));
        }
        check_finite("lighting.point_light_position", &self.lighting.point_light_position)?;
        for (field, value) in [
            ("lighting.ambient_intensity", self.lighting.ambient_intensity),
            ("lighting.point_light_intensity", self.lighting.point_light_intensity),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, format!("{} must be zero or positive", value)));
            }
        }
        for (field, value) in [
            ("sensors.temperature", self.sensors.temperature),
            ("sensors.humidity", self.sensors.humidity),
            ("sensors.light_level", self.sensors.light_level),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, format!("{} is not a finite number", value)));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_finite(field: &'static str, v: &[f32; 3]) -> Result<(), ConfigError> {
    if v.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(invalid(field, format!("{:?} has non-finite components", v)))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_scale: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_position: Option<[f32; 3]>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fov_degrees: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LightingOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_intensity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_light_position: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_light_intensity: Option<f32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light_level: Option<f32>,
}

/// On-disk configuration: a variant plus optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub scene: SceneOverrides,
    #[serde(default)]
    pub camera: CameraOverrides,
    #[serde(default)]
    pub lighting: LightingOverrides,
    #[serde(default)]
    pub sensors: SensorOverrides,
    #[serde(default)]
    pub ui: UiConfig,
}

impl ConfigFile {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Every value spelled out, taken from a resolved configuration
    pub fn from_resolved(config: &ViewerConfig) -> Self {
        Self {
            variant: config.variant,
            locale: config.locale,
            scene: SceneOverrides {
                asset: Some(config.scene.asset.clone()),
                model_scale: Some(config.scene.model_scale),
                model_position: Some(config.scene.model_position),
            },
            camera: CameraOverrides {
                position: Some(config.camera.position),
                fov_degrees: Some(config.camera.fov_degrees),
            },
            lighting: LightingOverrides {
                ambient_intensity: Some(config.lighting.ambient_intensity),
                point_light_position: Some(config.lighting.point_light_position),
                point_light_intensity: Some(config.lighting.point_light_intensity),
            },
            sensors: SensorOverrides {
                temperature: Some(config.sensors.temperature),
                humidity: Some(config.sensors.humidity),
                light_level: Some(config.sensors.light_level),
            },
            ui: config.ui.clone(),
        }
    }

    /// Apply the overrides on top of the variant preset and validate
    pub fn resolve(&self) -> Result<ViewerConfig, ConfigError> {
        let mut config = self.variant.preset();
        config.locale = self.locale;

        if let Some(asset) = &self.scene.asset {
            config.scene.asset = asset.clone();
        }
        if let Some(scale) = self.scene.model_scale {
            config.scene.model_scale = scale;
        }
        if let Some(position) = self.scene.model_position {
            config.scene.model_position = position;
        }

        if let Some(position) = self.camera.position {
            config.camera.position = position;
        }
        if let Some(fov) = self.camera.fov_degrees {
            config.camera.fov_degrees = fov;
        }

        if let Some(ambient) = self.lighting.ambient_intensity {
            config.lighting.ambient_intensity = ambient;
        }
        if let Some(position) = self.lighting.point_light_position {
            config.lighting.point_light_position = position;
        }
        if let Some(intensity) = self.lighting.point_light_intensity {
            config.lighting.point_light_intensity = intensity;
        }

        if let Some(temperature) = self.sensors.temperature {
            config.sensors.temperature = temperature;
        }
        if let Some(humidity) = self.sensors.humidity {
            config.sensors.humidity = humidity;
        }
        if let Some(light_level) = self.sensors.light_level {
            config.sensors.light_level = light_level;
        }

        config.ui = self.ui.clone();

        config.validate()?;
        debug!(variant = %config.variant, asset = %config.scene.asset, "Resolved configuration");
        Ok(config)
    }
}

/// Load configuration from file, falling back to the default preset
pub fn load_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config = ConfigFile::from_toml(&content)?;
        info!(path = %path.display(), variant = %config.variant, "Loaded configuration");
        Ok(config)
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Ok(ConfigFile::default())
    }
}

/// Save the fully spelled-out configuration of `variant` to file
pub fn save_default_config(path: &Path, variant: Variant) -> Result<(), ConfigError> {
    let config = ConfigFile::from_resolved(&variant.preset());
    let content = toml::to_string_pretty(&config)?;
    std::fs::write(path, content)?;
    Ok(())
}
