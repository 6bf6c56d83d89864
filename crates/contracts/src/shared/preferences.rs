//! Persisted user preferences and their string encoding in local storage.

use serde::{Deserialize, Serialize};

pub const THEME_KEY: &str = "theme";
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

/// A value stored under a fixed key as a plain string.
pub trait Preference: Sized {
    const KEY: &'static str;

    fn encode(&self) -> String;

    /// Decode a stored value. `None` means the raw value is unusable and the
    /// default should be kept.
    fn decode(raw: &str) -> Option<Self>;
}

// ============================================================================
// Theme
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn from_is_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(&self) -> Self {
        Self::from_is_dark(!self.is_dark())
    }

    /// Icon of the header toggle: it shows the theme a click switches to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "sun-fill",
            Theme::Light => "moon-fill",
        }
    }
}

impl Preference for Theme {
    const KEY: &'static str = THEME_KEY;

    fn encode(&self) -> String {
        self.as_str().to_string()
    }

    /// Anything other than `"dark"` reads as light.
    fn decode(raw: &str) -> Option<Self> {
        Some(Self::from_is_dark(raw == "dark"))
    }
}

// ============================================================================
// Sidebar
// ============================================================================

/// Whether the desktop sidebar is collapsed to icons only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SidebarCollapsed(pub bool);

impl Preference for SidebarCollapsed {
    const KEY: &'static str = SIDEBAR_COLLAPSED_KEY;

    fn encode(&self) -> String {
        self.0.to_string()
    }

    fn decode(raw: &str) -> Option<Self> {
        Some(SidebarCollapsed(raw == "true"))
    }
}
