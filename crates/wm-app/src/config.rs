//! Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use wm_core::LatLng;
use wm_storage::{DEFAULT_KEY, validate_key};

use crate::error::{AppError, AppResult};

/// Popup behaviour attached to every marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_escape_key: bool,
    pub close_on_click: bool,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_escape_key: false,
            close_on_click: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Storage slot holding the workout array.
    pub storage_key: String,
    /// Zoom used when centering on the user and when jumping to a marker.
    pub map_zoom: u8,
    pub popup: PopupOptions,
    /// Fixed position for hosts without a location service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<LatLng>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_KEY.to_string(),
            map_zoom: 13,
            popup: PopupOptions::default(),
            home: None,
        }
    }
}

impl AppConfig {
    /// Load config from a YAML file. Missing fields take their defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let config: AppConfig = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_key(&self.storage_key).map_err(|_| {
            AppError::Config(format!(
                "storage_key {:?} must be non-empty, use only letters, digits, '.', '_' or '-', and not start with '.'",
                self.storage_key
            ))
        })?;
        if let Some(home) = self.home {
            LatLng::new(home.lat, home.lng)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage_key, "workouts");
        assert_eq!(config.map_zoom, 13);
        assert_eq!(config.popup.max_width, 250);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = AppConfig::from_yaml_str(
            "storage_key: my-runs\nmap_zoom: 15\nhome: [40.7, -74.0]\npopup:\n  auto_close: true\n",
        )
        .unwrap();
        assert_eq!(config.storage_key, "my-runs");
        assert_eq!(config.map_zoom, 15);
        assert_eq!(config.home, Some(LatLng { lat: 40.7, lng: -74.0 }));
        assert!(config.popup.auto_close);
        assert_eq!(config.popup.min_width, 100);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_yaml_str("storage_key: ''"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_yaml_str("home: [123.0, 0.0]"),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            AppConfig::from_yaml_str("map_zoom: lots"),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn storage_key_must_name_a_file_slot() {
        for key in ["my runs", ".hidden", "a/b"] {
            let yaml = format!("storage_key: '{key}'");
            assert!(
                matches!(AppConfig::from_yaml_str(&yaml), Err(AppError::Config(_))),
                "{key}"
            );
        }

        let config = AppConfig {
            storage_key: "runs 2024".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn validate_checks_home_built_in_code() {
        let config = AppConfig {
            home: Some(LatLng { lat: 0.0, lng: 200.0 }),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AppError::InvalidCoordinate(_))
        ));
    }
}
