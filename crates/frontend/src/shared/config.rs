use leptos::prelude::*;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSection,
    pub toast: ToastConfig,
    pub sidebar: SidebarConfig,
    pub navigation: NavigationConfig,
    pub movements: MovementsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppSection {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ToastConfig {
    /// Time a toast stays fully visible.
    pub display_ms: u32,
    /// Fade-out before the toast is detached.
    pub fade_ms: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SidebarConfig {
    /// The collapsed state is only restored on viewports at least this wide.
    pub restore_min_width: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
    pub default_section: String,
    pub default_settings_panel: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct MovementsConfig {
    pub filter_debounce_ms: u32,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: "YPServicesERP".to_string(),
            version: "2.0.0".to_string(),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            display_ms: 4000,
            fade_ms: 300,
        }
    }
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            restore_min_width: 1200.0,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_section: "dashboard".to_string(),
            default_settings_panel: "general".to_string(),
        }
    }
}

impl Default for MovementsConfig {
    fn default() -> Self {
        Self {
            filter_debounce_ms: 300,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[app]
name = "YPServicesERP"
version = "2.0.0"

[toast]
display_ms = 4000
fade_ms = 300

[sidebar]
restore_min_width = 1200.0

[navigation]
default_section = "dashboard"
default_settings_panel = "general"

[movements]
filter_debounce_ms = 300
"#;

pub fn parse_config(source: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str(source)?)
}

/// Load the embedded configuration, falling back to built-in defaults.
pub fn load_config() -> AppConfig {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; using built-in defaults");
            AppConfig::default()
        }
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.toast.display_ms, 4000);
        assert_eq!(config.toast.fade_ms, 300);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("[toast]\ndisplay_ms = 1000\n").unwrap();
        assert_eq!(config.toast.display_ms, 1000);
        assert_eq!(config.toast.fade_ms, 300);
        assert_eq!(config.navigation.default_section, "dashboard");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = parse_config("[toast]\ndisplay_ms = \"soon\"\n").unwrap_err();
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
