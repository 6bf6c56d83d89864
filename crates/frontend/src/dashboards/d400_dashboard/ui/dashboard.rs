use crate::dashboards::d400_dashboard::summary::DashboardSummary;
use crate::shared::charts::Chart;
use crate::shared::components::page_header::SectionHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::format::{format_currency, Currency};
use contracts::domain::a001_client::fixtures::demo_clients;
use contracts::domain::a003_project::fixtures::demo_projects;
use contracts::domain::a004_invoice::fixtures::demo_invoices;
use contracts::domain::a005_movement::store::DemoMovementStore;
use contracts::shared::charts::{PROJECTS_CHART, REVENUE_CHART};
use leptos::prelude::*;

#[component]
pub fn DashboardSection() -> impl IntoView {
    let store = DemoMovementStore::with_fixtures();
    let summary = DashboardSummary::compute(
        demo_clients(),
        demo_projects(),
        demo_invoices(),
        &store.all(),
    );
    let usd = |amount: f64| format_currency(amount, Currency::Usd);

    view! {
        <section id="section-dashboard" class="content-section active">
            <SectionHeader title="Dashboard" icon="grid-1x2" />
            <div class="stats-grid">
                <StatCard
                    label="Ingresos cobrados"
                    icon_name="currency-dollar"
                    value=usd(summary.revenue)
                    tone=StatTone::Success
                    change_percent=summary.margin_percent().unwrap_or_default()
                />
                <StatCard
                    label="Por cobrar"
                    icon_name="hourglass-split"
                    value=usd(summary.receivable)
                    tone=StatTone::Warning
                />
                <StatCard
                    label="Clientes activos"
                    icon_name="people"
                    value=summary.active_clients.to_string()
                />
                <StatCard
                    label="Proyectos en curso"
                    icon_name="kanban"
                    value=summary.projects_in_progress.to_string()
                />
                <StatCard
                    label="Egresos"
                    icon_name="arrow-up-right"
                    value=usd(summary.expenses)
                    tone=StatTone::Danger
                />
            </div>
            <div class="charts-grid">
                <div class="card-custom chart-card chart-card--wide">
                    <h5>"Ingresos por Categoría"</h5>
                    <Chart name=REVENUE_CHART />
                </div>
                <div class="card-custom chart-card">
                    <h5>"Estado de Proyectos"</h5>
                    <Chart name=PROJECTS_CHART />
                </div>
            </div>
        </section>
    }
}
