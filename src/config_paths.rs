//! Where magic-editor keeps its files on disk
//!
//! `config.yaml` holds the editor settings read by `EditorConfig::load`, and
//! `logs/` receives the daily `magic.log` written by `tracing::init`. Both sit
//! in one per-user directory; `magic --config` overrides the settings file only.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "magic-editor";

/// Per-user directory holding `config.yaml` and `logs/`
///
/// `$XDG_CONFIG_HOME/magic-editor` when that variable is set, otherwise
/// `.config/magic-editor` under the home directory. Windows uses
/// `%APPDATA%\magic-editor`. `None` when no base directory can be found.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// Default location of the editor settings file
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Directory for rolling log files
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the log directory, parents included, and return it
///
/// `tracing::init` calls this and logs to the console only when it fails.
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
