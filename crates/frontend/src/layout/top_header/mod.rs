//! Top bar: mobile menu button, page title with breadcrumb, theme toggle
//! and user badge.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::bi;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let title = move || ctx.current_title();

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button
                    id="menuToggle"
                    class="top-header-icon-btn menu-toggle"
                    title="Menú"
                    on:click=move |_| ctx.toggle_mobile()
                >
                    {bi("list")}
                </button>
                <div>
                    <h1 id="pageTitle" class="page-title">{title}</h1>
                    <nav class="breadcrumb-custom">
                        <span>"Inicio"</span>
                        <span class="breadcrumb-separator">"/"</span>
                        <span id="breadcrumbCurrent">{title}</span>
                    </nav>
                </div>
            </div>
            <div class="top-header__actions">
                <ThemeToggle />
                <button class="top-header-icon-btn" title="Notificaciones">
                    {bi("bell")}
                </button>
                <div class="top-header__user">
                    <div class="user-avatar">"AU"</div>
                    <span>"Admin User"</span>
                </div>
            </div>
        </header>
    }
}
