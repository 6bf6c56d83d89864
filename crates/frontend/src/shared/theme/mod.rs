//! Light/dark theme, persisted in local storage and applied as a
//! `data-theme` attribute on the document element.

use crate::shared::icons::bi;
use crate::shared::preferences::PreferenceStore;
use contracts::shared::preferences::Theme;
use leptos::prelude::*;
use thaw::*;
use web_sys::window;

/// Reflect the theme on `<html data-theme="...">`.
fn apply_theme_attribute(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if root.set_attribute("data-theme", theme.as_str()).is_err() {
        log::warn!("could not apply theme {}", theme.as_str());
    }
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Start from the default theme, then restore the persisted one if any.
    pub fn new() -> Self {
        let ctx = Self {
            theme: RwSignal::new(Theme::default()),
        };
        apply_theme_attribute(Theme::default());
        ctx.restore();
        ctx
    }

    /// Re-apply the persisted theme. An absent value keeps the current one.
    pub fn restore(&self) {
        if let Some(theme) = PreferenceStore::browser().load::<Theme>() {
            self.set_theme(theme);
        }
    }

    /// Apply and persist.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        apply_theme_attribute(theme);
        PreferenceStore::browser().save(&theme);
        log::debug!("theme: {}", theme.as_str());
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark()
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| {
        log::warn!("ThemeContext missing, creating a detached one");
        ThemeContext::new()
    })
}

/// Header button flipping between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header-icon-btn theme-toggle"
            title="Cambiar tema"
            on:click=move |_| ctx.toggle()
        >
            {move || bi(ctx.theme.get().toggle_icon())}
        </button>
    }
}

/// "Modo oscuro" switch of the settings panel, kept in sync with the
/// header toggle in both directions.
#[component]
pub fn DarkModeSwitch() -> impl IntoView {
    let ctx = use_theme();
    let checked = RwSignal::new(ctx.theme.get_untracked().is_dark());

    Effect::new(move |_| {
        let is_dark = ctx.theme.get().is_dark();
        if checked.get_untracked() != is_dark {
            checked.set(is_dark);
        }
    });

    Effect::new(move |_| {
        let wants_dark = checked.get();
        if ctx.theme.get_untracked().is_dark() != wants_dark {
            ctx.set_theme(Theme::from_is_dark(wants_dark));
        }
    });

    view! {
        <Switch checked=checked label="Modo oscuro" />
    }
}
