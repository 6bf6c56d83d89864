use super::service::use_movements;
use crate::shared::icons::bi;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use thaw::*;

/// Read-only view of one movement
#[component]
pub fn MovementDetailModal(id: u32) -> impl IntoView {
    let movements = use_movements();
    let vm = movements.detail(id);
    // Unknown ids render the fallback record; edit and delete follow it.
    let id = vm.id;

    let row = |label: &'static str, value: String| {
        view! {
            <div class="view-detail">
                <span class="view-label">{label}</span>
                <span>{value}</span>
            </div>
        }
    };

    view! {
        <ModalFrame title="Detalle del Movimiento" on_close=Callback::new(move |_| movements.close())>
            <div class="modal-body-custom">
                <div class="view-header">
                    <div class=vm.icon_class.clone()>
                        <i class=format!("bi {}", vm.icon)></i>
                    </div>
                    <div>
                        <h5 class="mb-0">{vm.description.clone()}</h5>
                        <span class=vm.badge_class.clone()>{vm.type_label}</span>
                    </div>
                </div>
                <div class="view-detail">
                    <span class="view-label">"Monto"</span>
                    <strong class="amount-negative">{vm.amount.clone()}</strong>
                </div>
                {row("Fecha", vm.date.clone())}
                {row("Empleado", vm.employee.clone())}
                {row("Proyecto", vm.project.clone())}
                {row("Notas", vm.notes.clone())}
                {row("Registrado por", vm.created_by.to_string())}
            </div>
            <div class="modal-footer-custom">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| movements.open_delete(id)>
                    {bi("trash")}
                    " Eliminar"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| movements.open_edit(id)>
                    {bi("pencil")}
                    " Editar"
                </Button>
            </div>
        </ModalFrame>
    }
}
