use super::form::{employee_options, project_options, type_options};
use super::service::use_movements;
use crate::shared::components::form_field::Select;
use crate::shared::components::page_header::SectionHeader;
use crate::shared::config::use_config;
use crate::shared::format::{format_currency, Currency};
use crate::shared::icons::bi;
use crate::shared::timing::Debouncer;
use contracts::domain::a005_movement::aggregate::MovementType;
use contracts::domain::a005_movement::filter::{MovementFilter, Period};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

fn period_options() -> Vec<(String, String)> {
    Period::all()
        .into_iter()
        .map(|p| (p.code().to_string(), p.label().to_string()))
        .collect()
}

fn code_of(id: Option<u32>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Filter bar. Changes are applied after a quiet period.
#[component]
fn MovementFilters() -> impl IntoView {
    let movements = use_movements();
    let config = use_config();
    let draft = RwSignal::new(movements.filter.get_untracked());
    let debouncer = Debouncer::new(config.movements.filter_debounce_ms);

    let change = move |edit: fn(&mut MovementFilter, String)| {
        Callback::new(move |value: String| {
            draft.update(|f| edit(f, value));
            debouncer.call(move || movements.apply_filter(draft.get_untracked()));
        })
    };
    let value = move |read: fn(&MovementFilter) -> String| Signal::derive(move || draft.with(read));

    let reset = move |_: ev::MouseEvent| {
        debouncer.cancel();
        draft.set(MovementFilter::default());
        movements.apply_filter(MovementFilter::default());
    };

    view! {
        <div class="card-custom filters-bar">
            <div class="filters-grid">
                <Select
                    label="Tipo"
                    value=value(|f| f.movement_type.map(|t| t.code().to_string()).unwrap_or_default())
                    options=type_options("Todos")
                    on_change=change(|f, v| f.movement_type = MovementType::from_code(&v))
                />
                <Select
                    label="Empleado"
                    value=value(|f| code_of(f.employee_id))
                    options=employee_options("Todos")
                    on_change=change(|f, v| f.employee_id = v.parse().ok())
                />
                <Select
                    label="Proyecto"
                    value=value(|f| code_of(f.project_id))
                    options=project_options("Todos")
                    on_change=change(|f, v| f.project_id = v.parse().ok())
                />
                <Select
                    label="Periodo"
                    value=value(|f| f.period.code().to_string())
                    options=period_options()
                    on_change=change(|f, v| f.period = Period::from_code(&v).unwrap_or_default())
                />
            </div>
            <Show when=move || draft.with(|f| !f.is_empty())>
                <button class="btn-link-custom" on:click=reset>
                    {bi("x-circle")}
                    " Limpiar filtros"
                </button>
            </Show>
        </div>
    }
}

#[component]
pub fn MovementsSection() -> impl IntoView {
    let movements = use_movements();

    let rows = move || movements.rows();
    let total = move || format_currency(movements.total(), Currency::Usd);
    let count = move || movements.rows().len();

    view! {
        <section id="section-movements" class="content-section active">
            <SectionHeader title="Movimientos" icon="arrow-left-right">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| movements.open_new()>
                    {bi("plus-lg")}
                    " Nuevo Movimiento"
                </Button>
            </SectionHeader>
            <div class="movements-summary">
                <div class="card-custom">
                    <span class="view-label">"Total egresos"</span>
                    <strong class="amount-negative">{total}</strong>
                </div>
                <div class="card-custom">
                    <span class="view-label">"Movimientos"</span>
                    <strong>{count}</strong>
                </div>
            </div>
            <MovementFilters />
            <div class="card-custom">
                <table class="table-custom">
                    <thead>
                        <tr>
                            <th>"Movimiento"</th>
                            <th>"Tipo"</th>
                            <th>"Empleado / Proyecto"</th>
                            <th>"Fecha"</th>
                            <th class="text-end">"Monto"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=rows
                            key=|row| row.id
                            children=move |row| {
                                let id = row.id;
                                view! {
                                    <tr class="movement-row" on:click=move |_| movements.open_detail(id)>
                                        <td>
                                            <div class="table-user">
                                                <div class=row.icon_class>
                                                    <i class=format!("bi {}", row.icon)></i>
                                                </div>
                                                <strong>{row.description}</strong>
                                            </div>
                                        </td>
                                        <td><span class=row.badge_class>{row.type_label}</span></td>
                                        <td>{row.related}</td>
                                        <td>{row.date}</td>
                                        <td class="text-end amount-negative">{row.amount}</td>
                                        <td on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                                            <div class="action-btns">
                                                <button class="action-btn view" title="Ver" on:click=move |_| movements.open_detail(id)>
                                                    {bi("eye")}
                                                </button>
                                                <button class="action-btn edit" title="Editar" on:click=move |_| movements.open_edit(id)>
                                                    {bi("pencil")}
                                                </button>
                                                <button class="action-btn delete" title="Eliminar" on:click=move |_| movements.open_delete(id)>
                                                    {bi("trash")}
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || movements.rows().is_empty()>
                    <div class="empty-state">"No hay movimientos para los filtros seleccionados."</div>
                </Show>
            </div>
        </section>
    }
}
