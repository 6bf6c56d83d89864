//! Mutually exclusive panels: dashboard sections and settings tabs.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("unknown panel: {0}")]
    UnknownPanel(String),
}

/// Registry of panels with at most one active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
    active: Option<usize>,
    fallback: String,
}

impl PanelRegistry {
    /// `fallback` is reported by [`current_panel`](Self::current_panel) while
    /// nothing is active.
    pub fn new(fallback: &str, panels: &[(&str, &str)]) -> Self {
        Self {
            panels: panels
                .iter()
                .map(|(id, title)| Panel {
                    id: id.to_string(),
                    title: title.to_string(),
                })
                .collect(),
            active: None,
            fallback: fallback.to_string(),
        }
    }

    /// Activate `id` and deactivate every other panel.
    ///
    /// An unknown id leaves the current state untouched.
    pub fn activate(&mut self, id: &str) -> Result<(), PanelError> {
        let index = self
            .panels
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PanelError::UnknownPanel(id.to_string()))?;
        self.active = Some(index);
        Ok(())
    }

    pub fn current_panel(&self) -> &str {
        self.active
            .map(|i| self.panels[i].id.as_str())
            .unwrap_or(self.fallback.as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.is_some_and(|i| self.panels[i].id == id)
    }

    /// Title of a panel, or the id itself when it is not registered.
    pub fn title_of(&self, id: &str) -> String {
        self.panels
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Title mirrored into the page heading and the breadcrumb.
    pub fn current_title(&self) -> String {
        self.title_of(self.current_panel())
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn active_count(&self) -> usize {
        usize::from(self.active.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> PanelRegistry {
        PanelRegistry::new(
            "dashboard",
            &[
                ("dashboard", "Dashboard"),
                ("clients", "Clientes"),
                ("projects", "Proyectos"),
                ("invoices", "Facturación"),
            ],
        )
    }

    #[test]
    fn test_fallback_when_nothing_active() {
        let registry = sections();
        assert_eq!(registry.current_panel(), "dashboard");
        assert_eq!(registry.active_count(), 0);
        assert!(!registry.is_active("dashboard"));
    }

    #[test]
    fn test_activate_each_known_panel() {
        let mut registry = sections();
        let ids: Vec<String> = registry.panels().iter().map(|p| p.id.clone()).collect();
        for id in &ids {
            registry.activate(id).unwrap();
            assert_eq!(registry.current_panel(), id.as_str());
            assert_eq!(registry.active_count(), 1);
            let active: Vec<&String> = ids.iter().filter(|p| registry.is_active(p)).collect();
            assert_eq!(active, vec![id]);
        }
    }

    #[test]
    fn test_unknown_panel_keeps_state() {
        let mut registry = sections();
        registry.activate("projects").unwrap();
        let before = registry.clone();

        let err = registry.activate("payroll").unwrap_err();
        assert_eq!(err, PanelError::UnknownPanel("payroll".into()));
        assert_eq!(registry, before);
        assert_eq!(registry.current_panel(), "projects");
    }

    #[test]
    fn test_titles() {
        let mut registry = sections();
        registry.activate("invoices").unwrap();
        assert_eq!(registry.current_title(), "Facturación");
        assert_eq!(registry.title_of("payroll"), "payroll");
    }
}
