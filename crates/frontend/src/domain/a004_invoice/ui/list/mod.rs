use crate::shared::components::row_actions::RowActions;
use crate::shared::format::format_usd_whole;
use crate::shared::icons::bi;
use contracts::domain::a004_invoice::fixtures::demo_invoices;
use contracts::domain::common::EntityRecord;
use leptos::prelude::*;

#[component]
pub fn InvoicesSection() -> impl IntoView {
    let rows = demo_invoices()
        .iter()
        .map(|invoice| {
            let record = EntityRecord::Invoice(invoice.clone());
            view! {
                <tr>
                    <td><strong>{invoice.number.clone()}</strong></td>
                    <td>{invoice.client.clone()}</td>
                    <td>{invoice.project.clone()}</td>
                    <td><strong>{format_usd_whole(invoice.amount)}</strong></td>
                    <td>
                        <span class=format!("status-badge {}", invoice.status.css_class())>
                            {invoice.status.label()}
                        </span>
                    </td>
                    <td><RowActions record=record /></td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section id="section-invoices" class="content-section active">
            <div class="section-header">
                <h2>{bi("receipt")} " Facturación"</h2>
            </div>
            <div class="card-custom">
                <table class="table-custom">
                    <thead>
                        <tr>
                            <th>"Factura"</th>
                            <th>"Cliente"</th>
                            <th>"Proyecto"</th>
                            <th>"Monto"</th>
                            <th>"Estado"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
        </section>
    }
}
