use crate::domain::a005_movement::ui::service::MovementsService;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::modal_service::ModalService;
use crate::layout::Shell;
use crate::shared::charts::ChartsContext;
use crate::shared::config::{load_config, AppSection};
use crate::shared::entity_detail::service::EntityDetailService;
use crate::shared::theme::ThemeContext;
use crate::shared::toast::{ToastService, ToastTiming};
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot startup flag.
pub struct InitGuard(AtomicBool);

impl InitGuard {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// `true` on the first call only.
    pub fn begin(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }

    pub fn is_ready(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

impl Default for InitGuard {
    fn default() -> Self {
        Self::new()
    }
}

static INIT: InitGuard = InitGuard::new();

pub fn banner(app: &AppSection) -> String {
    format!("{} Dashboard v{} loaded successfully!", app.name, app.version)
}

/// Log the startup banner. Later calls only warn.
pub fn announce(app: &AppSection) {
    if INIT.begin() {
        log::info!("{}", banner(app));
    } else {
        log::warn!("App already initialized");
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    announce(&config.app);

    let toasts = ToastService::new(ToastTiming::from(config.toast));
    let modals = ModalService::new();

    provide_context(ThemeContext::new());
    provide_context(toasts);
    provide_context(modals);
    provide_context(EntityDetailService::new(modals, toasts));
    provide_context(MovementsService::new(modals, toasts));
    provide_context(ChartsContext::new());
    // Restores the sidebar and shows the default section.
    provide_context(AppGlobalContext::new(&config));
    provide_context(config);

    view! { <Shell /> }
}
