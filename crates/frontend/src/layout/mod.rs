pub mod center;
pub mod global_context;
pub mod left;
pub mod modal_service;
pub mod top_header;

use crate::shared::toast::ToastHost;
use global_context::use_global_context;
use leptos::prelude::*;
use modal_service::ModalHost;

/// Application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |           |          TopHeader           |
/// |  Sidebar  +------------------------------+
/// |           |     Center (active section)  |
/// +-----------+------------------------------+
/// ```
/// The modal host and the toast container float above everything.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-layout">
            <left::Sidebar />
            <div id="mainContent" class=move || ctx.sidebar.get().main_class()>
                <top_header::TopHeader />
                <center::Center />
            </div>
            <ModalHost />
            <ToastHost />
        </div>
    }
}
