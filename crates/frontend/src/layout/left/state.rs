use contracts::shared::preferences::SidebarCollapsed;

/// Desktop collapse and mobile slide-in state of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    pub collapsed: bool,
    pub mobile_open: bool,
}

impl SidebarState {
    /// Flip the desktop collapse, returning the value to persist.
    pub fn toggle_collapse(&mut self) -> SidebarCollapsed {
        self.collapsed = !self.collapsed;
        SidebarCollapsed(self.collapsed)
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    /// Apply a persisted collapse flag. Narrow viewports keep the default.
    pub fn restore(&mut self, stored: Option<SidebarCollapsed>, viewport_width: f64, min_width: f64) {
        if let Some(SidebarCollapsed(collapsed)) = stored {
            if viewport_width >= min_width {
                self.collapsed = collapsed;
            }
        }
    }

    pub fn sidebar_class(&self) -> String {
        let mut class = String::from("sidebar");
        if self.collapsed {
            class.push_str(" collapsed");
        }
        if self.mobile_open {
            class.push_str(" active");
        }
        class
    }

    pub fn main_class(&self) -> &'static str {
        if self.collapsed {
            "main-content sidebar-collapsed"
        } else {
            "main-content"
        }
    }

    pub fn overlay_class(&self) -> &'static str {
        if self.mobile_open {
            "sidebar-overlay active"
        } else {
            "sidebar-overlay"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_collapse() {
        let mut state = SidebarState::default();
        assert_eq!(state.toggle_collapse(), SidebarCollapsed(true));
        assert_eq!(state.sidebar_class(), "sidebar collapsed");
        assert_eq!(state.main_class(), "main-content sidebar-collapsed");
        assert_eq!(state.toggle_collapse(), SidebarCollapsed(false));
        assert_eq!(state.sidebar_class(), "sidebar");
    }

    #[test]
    fn test_restore_respects_breakpoint() {
        let mut wide = SidebarState::default();
        wide.restore(Some(SidebarCollapsed(true)), 1200.0, 1200.0);
        assert!(wide.collapsed);

        let mut narrow = SidebarState::default();
        narrow.restore(Some(SidebarCollapsed(true)), 1199.0, 1200.0);
        assert!(!narrow.collapsed);

        let mut absent = SidebarState::default();
        absent.restore(None, 1920.0, 1200.0);
        assert_eq!(absent, SidebarState::default());
    }

    #[test]
    fn test_mobile_overlay() {
        let mut state = SidebarState::default();
        state.toggle_mobile();
        assert_eq!(state.overlay_class(), "sidebar-overlay active");
        assert_eq!(state.sidebar_class(), "sidebar active");
        state.close_mobile();
        state.close_mobile();
        assert_eq!(state.overlay_class(), "sidebar-overlay");
    }
}
