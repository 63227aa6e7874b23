//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Header shown above the inputs when no title is configured
pub const DEFAULT_TITLE: &str = "Contact Form";

/// Format used when copying the submitted summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CopyFormat {
    #[default]
    Text,
    Json,
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Form header text
    pub title: Option<String>,
    /// Show key hints in the status bar
    pub show_help: Option<bool>,
    /// Capture mouse clicks for focusing inputs and submitting
    pub mouse_capture: Option<bool>,
    /// Clipboard format for the submitted summary
    pub copy_format: Option<CopyFormat>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contactform", "contact-form-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn show_help(&self) -> bool {
        self.show_help.unwrap_or(true)
    }

    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture.unwrap_or(true)
    }

    pub fn copy_format(&self) -> CopyFormat {
        self.copy_format.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.title.is_none());
        assert!(config.show_help.is_none());
        assert!(config.mouse_capture.is_none());
        assert!(config.copy_format.is_none());
    }

    #[test]
    fn test_default_accessors() {
        let config = TuiConfig::default();
        assert_eq!(config.title(), "Contact Form");
        assert!(config.show_help());
        assert!(config.mouse_capture());
        assert_eq!(config.copy_format(), CopyFormat::Text);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            title: Some("Reach Us".to_string()),
            show_help: Some(false),
            mouse_capture: Some(false),
            copy_format: Some(CopyFormat::Json),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.title(), "Reach Us");
        assert!(!parsed.show_help());
        assert!(!parsed.mouse_capture());
        assert_eq!(parsed.copy_format(), CopyFormat::Json);
    }

    #[test]
    fn test_copy_format_is_lowercase() {
        let json = r#"{"copy_format": "json"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.copy_format, Some(CopyFormat::Json));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.title.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"show_help": false, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.show_help, Some(false));
    }

    #[test]
    fn test_invalid_copy_format_is_rejected() {
        let json = r#"{"copy_format": "yaml"}"#;
        assert!(serde_json::from_str::<TuiConfig>(json).is_err());
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = TuiConfig::config_path();
    }
}
