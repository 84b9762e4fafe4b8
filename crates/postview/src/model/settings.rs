//! Settings model.

use std::path::{Path, PathBuf};

use crate::style::widgets::palette::ThemeMode;

/// Server used when no settings file exists.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8065";

/// Application settings that persist across sessions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
    /// Show the thread in compact mode.
    pub compact_display: bool,
    /// Chat server base URL used to build file URLs.
    pub server_url: String,
    /// Thread JSON to open; the bundled demo thread when unset.
    pub thread_path: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Dark,
            compact_display: false,
            server_url: DEFAULT_SERVER_URL.to_string(),
            thread_path: None,
        }
    }
}

/// Location of the settings file.
#[must_use]
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("postview")
        .join("settings.json")
}

/// Reads settings from `path`, falling back to defaults if it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub async fn read_settings(path: &Path) -> anyhow::Result<AppSettings> {
    if !tokio::fs::try_exists(path).await? {
        return Ok(AppSettings::default());
    }
    let contents = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&contents)?)
}

/// Writes settings to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub async fn write_settings(path: &Path, settings: &AppSettings) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }
    let contents = serde_json::to_string_pretty(settings)?;
    tokio::fs::write(path, contents).await?;
    Ok(())
}

/// Serde helpers for `ThemeMode` (since it doesn't derive `Serialize`/`Deserialize`).
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(if s == "light" {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = read_settings(&dir.path().join("settings.json")).await.unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[tokio::test]
    async fn write_then_read_preserves_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            theme_mode: ThemeMode::Light,
            compact_display: true,
            server_url: "https://chat.example.com".to_string(),
            thread_path: Some(PathBuf::from("/tmp/thread.json")),
        };

        write_settings(&path, &settings).await.unwrap();
        assert_eq!(read_settings(&path).await.unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"compact_display": true}"#).unwrap();
        assert!(settings.compact_display);
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, "not json").await.unwrap();
        assert!(read_settings(&path).await.is_err());
    }
}
