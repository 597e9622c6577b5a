//! Settings loading and the run-option form definition
//!
//! Settings live at `{config_dir}/zipline/config.toml`. A missing file
//! yields the defaults; a malformed file is a configuration error rather
//! than a silent fallback.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use zipline_core::prelude::*;

/// User-editable settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the processing service
    pub server_url: String,
    /// Show timestamps in the console view
    pub show_timestamps: bool,
    /// The run-option controls offered on the submission form
    pub options: Vec<OptionDef>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            show_timestamps: true,
            options: default_options(),
        }
    }
}

/// Definition of one named form control
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDef {
    /// Wire name, sent as the key in the kickoff options map
    pub name: String,
    /// Label shown on the form
    pub label: String,
    #[serde(flatten)]
    pub kind: OptionKind,
}

/// Control kind with its default value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OptionKind {
    /// Contributes a boolean
    Checkbox {
        #[serde(default)]
        default: bool,
    },
    /// Contributes the selected choice's value
    Radio {
        choices: Vec<String>,
        #[serde(default)]
        default: usize,
    },
    /// Contributes its string value
    Text {
        #[serde(default)]
        default: String,
    },
}

/// The stock frontend-optimizer option set
fn default_options() -> Vec<OptionDef> {
    vec![
        OptionDef {
            name: "obfuscate_js".to_string(),
            label: "JS obfuscation".to_string(),
            kind: OptionKind::Radio {
                choices: vec![
                    "none".to_string(),
                    "standard".to_string(),
                    "strong".to_string(),
                ],
                default: 0,
            },
        },
        OptionDef {
            name: "purge_css".to_string(),
            label: "Purge unused CSS".to_string(),
            kind: OptionKind::Checkbox { default: false },
        },
        OptionDef {
            name: "add_csp".to_string(),
            label: "Add CSP headers".to_string(),
            kind: OptionKind::Checkbox { default: false },
        },
        OptionDef {
            name: "generate_critical_css".to_string(),
            label: "Generate critical CSS".to_string(),
            kind: OptionKind::Checkbox { default: false },
        },
    ]
}

impl Settings {
    /// Resolve the config file path, honoring an explicit override
    pub fn config_path(override_path: Option<PathBuf>) -> PathBuf {
        override_path.unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("zipline")
                .join("config.toml")
        })
    }

    /// Load settings from `path`, defaulting when the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server_url, "http://127.0.0.1:5000");
        assert!(settings.show_timestamps);
        assert_eq!(settings.options.len(), 4);
        assert_eq!(settings.options[0].name, "obfuscate_js");
        assert!(matches!(
            settings.options[0].kind,
            OptionKind::Radio { .. }
        ));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(settings.server_url, Settings::default().server_url);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server_url = \"https://zip.example.com\"\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.server_url, "https://zip.example.com");
        // Unmentioned fields keep their defaults
        assert!(settings.show_timestamps);
        assert_eq!(settings.options.len(), 4);
    }

    #[test]
    fn test_load_custom_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[[options]]
name = "level"
label = "Scan level"
kind = "radio"
choices = ["quick", "deep"]
default = 1

[[options]]
name = "notes"
label = "Notes"
kind = "text"
"#,
        )
        .unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.options.len(), 2);
        match &settings.options[0].kind {
            OptionKind::Radio { choices, default } => {
                assert_eq!(choices.len(), 2);
                assert_eq!(*default, 1);
            }
            other => panic!("expected Radio, got {other:?}"),
        }
        assert!(matches!(settings.options[1].kind, OptionKind::Text { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server_url = [not toml").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_config_path_override() {
        let path = Settings::config_path(Some(PathBuf::from("/tmp/custom.toml")));
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }
}
