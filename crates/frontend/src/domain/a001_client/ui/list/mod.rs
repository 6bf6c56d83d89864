use crate::shared::components::row_actions::RowActions;
use crate::shared::icons::bi;
use contracts::domain::a001_client::fixtures::demo_clients;
use contracts::domain::common::EntityRecord;
use leptos::prelude::*;

#[component]
pub fn ClientsSection() -> impl IntoView {
    let rows = demo_clients()
        .iter()
        .map(|client| {
            let record = EntityRecord::Client(client.clone());
            view! {
                <tr>
                    <td>
                        <div class="table-user">
                            <div class="table-avatar">{client.initials.clone()}</div>
                            <div>
                                <strong>{client.name.clone()}</strong>
                                <small class="d-block text-muted">{client.email.clone()}</small>
                            </div>
                        </div>
                    </td>
                    <td>{client.phone.clone()}</td>
                    <td>{client.projects}</td>
                    <td>
                        <span class=format!("status-badge {}", client.status.css_class())>
                            {client.status.label()}
                        </span>
                    </td>
                    <td><RowActions record=record /></td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section id="section-clients" class="content-section active">
            <div class="section-header">
                <h2>{bi("people")} " Clientes"</h2>
            </div>
            <div class="card-custom">
                <table class="table-custom">
                    <thead>
                        <tr>
                            <th>"Cliente"</th>
                            <th>"Teléfono"</th>
                            <th>"Proyectos"</th>
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
