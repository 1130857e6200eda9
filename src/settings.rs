use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use gtk4::glib;
use libadwaita as adw;
use serde::{Deserialize, Serialize};

use crate::LOG_DOMAIN;

const APP_SETTINGS_FILE: &str = "settings.json";
const APP_DIR_NAME: &str = "distrohub";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemePreference {
    pub fn key(self) -> &'static str {
        match self {
            ThemePreference::System => "system",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn from_key(value: &str) -> Self {
        match value {
            "light" => ThemePreference::Light,
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    pub fn apply(self, style_manager: &adw::StyleManager) {
        match self {
            ThemePreference::System => style_manager.set_color_scheme(adw::ColorScheme::Default),
            ThemePreference::Light => style_manager.set_color_scheme(adw::ColorScheme::ForceLight),
            ThemePreference::Dark => style_manager.set_color_scheme(adw::ColorScheme::ForceDark),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub window_width: Option<i32>,
    #[serde(default)]
    pub window_height: Option<i32>,
    #[serde(default)]
    pub window_maximized: bool,
    #[serde(default)]
    pub theme_preference: ThemePreference,
}

pub fn load_app_settings() -> AppSettings {
    let Some(path) = app_settings_path() else {
        return AppSettings::default();
    };

    let Ok(content) = fs::read_to_string(&path) else {
        return AppSettings::default();
    };

    match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(err) => {
            glib::g_warning!(
                LOG_DOMAIN,
                "Ignoring unreadable settings file {}: {}",
                path.display(),
                err
            );
            AppSettings::default()
        }
    }
}

pub fn save_app_settings(settings: &AppSettings) -> Result<()> {
    let path = app_settings_path().ok_or_else(|| anyhow!("Unable to determine settings directory"))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create settings directory {}", parent.display())
        })?;
    }

    let data = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

    fs::write(&path, data)
        .with_context(|| format!("Failed to write settings to {}", path.display()))
}

fn non_empty(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
        .map(PathBuf::from)
}

/// `DISTROHUB_CONFIG_DIR` wins, then `XDG_CONFIG_HOME`, then `~/.config`.
fn resolve_config_dir(
    custom: Option<String>,
    config_home: Option<String>,
    home: Option<String>,
) -> Option<PathBuf> {
    if let Some(custom) = non_empty(custom) {
        return Some(custom);
    }

    if let Some(config_home) = non_empty(config_home) {
        return Some(config_home.join(APP_DIR_NAME));
    }

    non_empty(home).map(|home| home.join(".config").join(APP_DIR_NAME))
}

fn app_config_dir() -> Option<PathBuf> {
    resolve_config_dir(
        env::var("DISTROHUB_CONFIG_DIR").ok(),
        env::var("XDG_CONFIG_HOME").ok(),
        env::var("HOME").ok(),
    )
}

fn app_settings_path() -> Option<PathBuf> {
    app_config_dir().map(|dir| dir.join(APP_SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn config_dir_precedence() {
        assert_eq!(
            resolve_config_dir(some("/tmp/hub"), some("/xdg"), some("/home/me")),
            Some(PathBuf::from("/tmp/hub"))
        );
        assert_eq!(
            resolve_config_dir(some("   "), some("/xdg"), some("/home/me")),
            Some(PathBuf::from("/xdg/distrohub"))
        );
        assert_eq!(
            resolve_config_dir(None, None, some("/home/me")),
            Some(PathBuf::from("/home/me/.config/distrohub"))
        );
        assert_eq!(resolve_config_dir(None, some(""), None), None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").expect("parse empty settings");
        assert_eq!(settings.window_width, None);
        assert!(!settings.window_maximized);
        assert_eq!(settings.theme_preference, ThemePreference::System);

        let settings: AppSettings =
            serde_json::from_str(r#"{"window_width": 900, "theme_preference": "dark"}"#)
                .expect("parse settings");
        assert_eq!(settings.window_width, Some(900));
        assert_eq!(settings.theme_preference, ThemePreference::Dark);
    }

    #[test]
    fn theme_keys() {
        for theme in [
            ThemePreference::System,
            ThemePreference::Light,
            ThemePreference::Dark,
        ] {
            assert_eq!(ThemePreference::from_key(theme.key()), theme);
        }
        assert_eq!(ThemePreference::from_key("sepia"), ThemePreference::System);
    }
}
