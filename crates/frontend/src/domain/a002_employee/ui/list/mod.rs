use crate::shared::components::row_actions::RowActions;
use crate::shared::entity_detail::service::use_entity_details;
use crate::shared::format::{format_currency, format_date_short, Currency};
use crate::shared::icons::bi;
use contracts::domain::a002_employee::fixtures::demo_employees;
use contracts::domain::common::EntityRecord;
use leptos::prelude::*;

#[component]
pub fn EmployeesSection() -> impl IntoView {
    let details = use_entity_details();

    let cards = demo_employees()
        .iter()
        .map(|employee| {
            let record = EntityRecord::Employee(employee.clone());
            let (name, initials, role) = (
                employee.name.clone(),
                employee.initials.clone(),
                employee.role.clone(),
            );
            view! {
                <div class="employee-card card-custom">
                    <div class="view-header">
                        <div class="view-avatar">{employee.initials.clone()}</div>
                        <div>
                            <h5 class="mb-0">{employee.name.clone()}</h5>
                            <small class="view-subtitle">{employee.role.clone()}</small>
                        </div>
                    </div>
                    <div class="view-detail">
                        <span class="view-label">"Ingreso"</span>
                        <span>{format_date_short(employee.start_date)}</span>
                    </div>
                    <div class="view-detail">
                        <span class="view-label">"Salario"</span>
                        <strong>{format_currency(employee.salary, Currency::Usd)}</strong>
                    </div>
                    <div class="employee-card__actions">
                        <button
                            class="btn-primary-custom"
                            on:click=move |_| details.open_payment(&name, &initials, &role)
                        >
                            {bi("cash-coin")}
                            " Pagar"
                        </button>
                        <RowActions record=record />
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="section-employees" class="content-section active">
            <div class="section-header">
                <h2>{bi("person-badge")} " Empleados"</h2>
            </div>
            <div class="employee-grid">{cards}</div>
        </section>
    }
}
