use crate::dashboards::{DashboardSection, ReportsSection};
use crate::domain::a001_client::ui::list::ClientsSection;
use crate::domain::a002_employee::ui::list::EmployeesSection;
use crate::domain::a003_project::ui::list::ProjectsSection;
use crate::domain::a004_invoice::ui::list::InvoicesSection;
use crate::domain::a005_movement::ui::list::MovementsSection;
use crate::layout::global_context::use_global_context;
use crate::system::settings::SettingsSection;
use leptos::prelude::*;

/// Content area showing the active section only.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_global_context();
    let section = Memo::new(move |_| ctx.current_section());

    view! {
        <main class="content-area">
            {move || match section.get().as_str() {
                "clients" => view! { <ClientsSection /> }.into_any(),
                "projects" => view! { <ProjectsSection /> }.into_any(),
                "invoices" => view! { <InvoicesSection /> }.into_any(),
                "employees" => view! { <EmployeesSection /> }.into_any(),
                "movements" => view! { <MovementsSection /> }.into_any(),
                "reports" => view! { <ReportsSection /> }.into_any(),
                "settings" => view! { <SettingsSection /> }.into_any(),
                _ => view! { <DashboardSection /> }.into_any(),
            }}
        </main>
    }
}
