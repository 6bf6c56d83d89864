use crate::shared::entity_detail::service::use_entity_details;
use crate::shared::icons::bi;
use contracts::domain::common::{EntityKind, EntityRecord};
use leptos::prelude::*;

/// View / edit / delete buttons of a list row.
#[component]
pub fn RowActions(record: EntityRecord) -> impl IntoView {
    let details = use_entity_details();
    let kind = record.kind();
    let name = record.name().to_string();
    let record = StoredValue::new(record);
    let name = StoredValue::new(name);
    let editable = !matches!(kind, EntityKind::Invoice | EntityKind::Movement);

    view! {
        <div class="action-btns">
            <button
                class="action-btn view"
                title="Ver"
                on:click=move |_| record.with_value(|r| details.open_view(r))
            >
                {bi("eye")}
            </button>
            {editable.then(|| view! {
                <button
                    class="action-btn edit"
                    title="Editar"
                    on:click=move |_| name.with_value(|n| details.open_edit(kind, n))
                >
                    {bi("pencil")}
                </button>
            })}
            <button
                class="action-btn delete"
                title="Eliminar"
                on:click=move |_| name.with_value(|n| details.open_delete(kind, n))
            >
                {bi("trash")}
            </button>
        </div>
    }
}
