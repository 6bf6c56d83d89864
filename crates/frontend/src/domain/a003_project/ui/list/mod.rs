use crate::shared::components::row_actions::RowActions;
use crate::shared::format::format_usd_whole;
use crate::shared::icons::bi;
use contracts::domain::a003_project::fixtures::demo_projects;
use contracts::domain::common::EntityRecord;
use leptos::prelude::*;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let rows = demo_projects()
        .iter()
        .map(|project| {
            let record = EntityRecord::Project(project.clone());
            view! {
                <tr>
                    <td>
                        <div class="table-user">
                            <div class="table-avatar">{bi(&project.icon)}</div>
                            <strong>{project.name.clone()}</strong>
                        </div>
                    </td>
                    <td>{project.client.clone()}</td>
                    <td><strong>{format_usd_whole(project.budget)}</strong></td>
                    <td>
                        <span class=format!("status-badge {}", project.status.css_class())>
                            {project.status.label()}
                        </span>
                    </td>
                    <td><RowActions record=record /></td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section id="section-projects" class="content-section active">
            <div class="section-header">
                <h2>{bi("kanban")} " Proyectos"</h2>
            </div>
            <div class="card-custom">
                <table class="table-custom">
                    <thead>
                        <tr>
                            <th>"Proyecto"</th>
                            <th>"Cliente"</th>
                            <th>"Presupuesto"</th>
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
