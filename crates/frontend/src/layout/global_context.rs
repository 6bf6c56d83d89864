use crate::layout::left::state::SidebarState;
use crate::shared::config::AppConfig;
use crate::shared::panel_switcher::PanelRegistry;
use crate::shared::preferences::{KeyValueStorage, PreferenceStore};
use contracts::shared::preferences::SidebarCollapsed;
use leptos::prelude::*;
use web_sys::window;

/// Top-level sections: (id, title, icon).
pub const SECTIONS: [(&str, &str, &str); 8] = [
    ("dashboard", "Dashboard", "grid-1x2"),
    ("clients", "Clientes", "people"),
    ("projects", "Proyectos", "kanban"),
    ("invoices", "Facturación", "receipt"),
    ("employees", "Empleados", "person-badge"),
    ("movements", "Movimientos", "arrow-left-right"),
    ("reports", "Reportes", "graph-up"),
    ("settings", "Configuración", "gear"),
];

pub fn section_registry(fallback: &str) -> PanelRegistry {
    let panels: Vec<(&str, &str)> = SECTIONS.iter().map(|(id, title, _)| (*id, *title)).collect();
    PanelRegistry::new(fallback, &panels)
}

/// Flip the collapsed flag and persist the new value.
pub fn toggle_collapse_persisted<S: KeyValueStorage>(
    state: &mut SidebarState,
    store: &PreferenceStore<S>,
) -> SidebarCollapsed {
    let value = state.toggle_collapse();
    store.save(&value);
    value
}

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub sections: RwSignal<PanelRegistry>,
    pub sidebar: RwSignal<SidebarState>,
}

impl AppGlobalContext {
    pub fn new(config: &AppConfig) -> Self {
        let ctx = Self {
            sections: RwSignal::new(section_registry(&config.navigation.default_section)),
            sidebar: RwSignal::new(SidebarState::default()),
        };
        ctx.navigate_to(&config.navigation.default_section);
        ctx.restore_sidebar(config.sidebar.restore_min_width);
        ctx
    }

    /// Show one section and mirror its title. Unknown ids keep the current
    /// section.
    pub fn navigate_to(&self, section: &str) {
        leptos::logging::log!("navigate_to: '{}'", section);
        let result = self.sections.try_update(|sections| sections.activate(section));
        if let Some(Err(e)) = result {
            log::warn!("navigate_to: {e}");
        }
    }

    /// Navigation from the sidebar also closes the mobile sidebar.
    pub fn navigate_from_sidebar(&self, section: &str) {
        self.navigate_to(section);
        self.close_mobile();
    }

    pub fn current_section(&self) -> String {
        self.sections.with(|s| s.current_panel().to_string())
    }

    pub fn current_title(&self) -> String {
        self.sections.with(|s| s.current_title())
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.sections.with(|s| s.is_active(section))
    }

    pub fn toggle_collapse(&self) {
        let store = PreferenceStore::browser();
        self.sidebar.update(|s| {
            toggle_collapse_persisted(s, &store);
        });
    }

    pub fn toggle_mobile(&self) {
        self.sidebar.update(|s| s.toggle_mobile());
    }

    pub fn close_mobile(&self) {
        self.sidebar.update(|s| s.close_mobile());
    }

    fn restore_sidebar(&self, min_width: f64) {
        let stored = PreferenceStore::browser().load::<SidebarCollapsed>();
        let width = viewport_width();
        self.sidebar.update(|s| s.restore(stored, width, min_width));
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::preferences::tests::MemoryStorage;

    #[test]
    fn test_section_titles() {
        let mut sections = section_registry("dashboard");
        assert_eq!(sections.current_panel(), "dashboard");
        sections.activate("movements").unwrap();
        assert_eq!(sections.current_title(), "Movimientos");
        assert_eq!(sections.title_of("employees"), "Empleados");
        assert_eq!(sections.title_of("settings"), "Configuración");
        assert!(sections.activate("payroll").is_err());
        assert_eq!(sections.current_panel(), "movements");
    }

    #[test]
    fn test_every_collapse_toggle_is_persisted() {
        let storage = MemoryStorage::default();
        let store = PreferenceStore::new(storage.clone());
        let mut state = SidebarState::default();

        assert_eq!(toggle_collapse_persisted(&mut state, &store), SidebarCollapsed(true));
        assert_eq!(storage.get_item("sidebarCollapsed").as_deref(), Some("true"));

        assert_eq!(toggle_collapse_persisted(&mut state, &store), SidebarCollapsed(false));
        assert!(!state.collapsed);
        assert_eq!(store.load::<SidebarCollapsed>(), Some(SidebarCollapsed(false)));
    }
}
