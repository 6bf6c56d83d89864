//! Navigation sidebar: section links, desktop collapse and mobile overlay.

use crate::layout::global_context::{use_global_context, SECTIONS};
use crate::shared::config::use_config;
use crate::shared::icons::bi;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let config = use_config();

    let items = SECTIONS
        .iter()
        .map(|&(id, label, icon_name)| {
            view! {
                <a
                    href="#"
                    class="nav-item"
                    class:active=move || ctx.is_active(id)
                    data-section=id
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate_from_sidebar(id);
                    }
                >
                    {bi(icon_name)}
                    <span class="nav-text">{label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <div
            class=move || ctx.sidebar.get().overlay_class()
            on:click=move |_| ctx.close_mobile()
        ></div>
        <aside id="sidebar" class=move || ctx.sidebar.get().sidebar_class()>
            <div class="sidebar-header">
                <div class="sidebar-brand">
                    {bi("lightning-charge-fill")}
                    <span class="nav-text">{config.app.name.clone()}</span>
                </div>
                <button
                    class="sidebar-toggle-btn"
                    title="Contraer menú"
                    on:click=move |_| ctx.toggle_collapse()
                >
                    {move || bi(if ctx.sidebar.get().collapsed { "chevron-right" } else { "chevron-left" })}
                </button>
            </div>
            <nav class="sidebar-nav">{items}</nav>
            <div class="sidebar-footer">
                <small class="nav-text">{format!("v{}", config.app.version)}</small>
            </div>
        </aside>
    }
}
