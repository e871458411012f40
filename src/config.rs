//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/magic-editor/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Model id sent with every completion request
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on generated tokens per reply
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Roles offered by the insert-role menu, in display order
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,

    /// Optional marker inserted before a streamed reply, e.g. `assistant`.
    /// Off by default: reply text follows the prompt directly.
    #[serde(default)]
    pub reply_role: Option<String>,

    /// Marker inserted after a completed reply to open the next turn
    #[serde(default = "default_next_turn_role")]
    pub next_turn_role: String,

    /// Plain text inserted before each automatically inserted marker
    #[serde(default)]
    pub turn_separator: String,

    /// Plain text inserted after each automatically inserted marker
    #[serde(default)]
    pub marker_suffix: String,
}

fn default_model() -> String {
    "llama-3.2-1b-4bit".to_string()
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_roles() -> Vec<String> {
    vec![
        "system".to_string(),
        "user".to_string(),
        "assistant".to_string(),
    ]
}

fn default_next_turn_role() -> String {
    "user".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            roles: default_roles(),
            reply_role: None,
            next_turn_role: default_next_turn_role(),
            turn_separator: String::new(),
            marker_suffix: String::new(),
        }
    }
}

impl EditorConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
