use super::service::use_movements;
use crate::shared::components::form_field::{Input, Select};
use crate::shared::icons::bi;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a002_employee::fixtures::demo_employees;
use contracts::domain::a003_project::fixtures::demo_projects;
use contracts::domain::a005_movement::aggregate::MovementType;
use contracts::domain::a005_movement::form::MovementForm;
use leptos::prelude::*;
use thaw::*;

pub fn type_options(placeholder: &str) -> Vec<(String, String)> {
    std::iter::once((String::new(), placeholder.to_string()))
        .chain(
            MovementType::all()
                .into_iter()
                .map(|t| (t.code().to_string(), t.label().to_string())),
        )
        .collect()
}

pub fn employee_options(placeholder: &str) -> Vec<(String, String)> {
    std::iter::once((String::new(), placeholder.to_string()))
        .chain(
            demo_employees()
                .iter()
                .map(|e| (e.id.to_string(), e.name.clone())),
        )
        .collect()
}

pub fn project_options(placeholder: &str) -> Vec<(String, String)> {
    std::iter::once((String::new(), placeholder.to_string()))
        .chain(
            demo_projects()
                .iter()
                .map(|p| (p.id.to_string(), p.name.clone())),
        )
        .collect()
}

/// Create/edit form of a movement
#[component]
pub fn MovementFormModal() -> impl IntoView {
    let movements = use_movements();
    let editor = movements.editor;

    let field = move |get: fn(&MovementForm) -> &String| {
        Signal::derive(move || editor.with(|e| get(e.form()).clone()))
    };
    let error = move |name: &'static str| Signal::derive(move || editor.with(|e| e.error_for(name)));
    let setter = move |set: fn(&mut MovementForm, String)| {
        Callback::new(move |value: String| editor.update(|e| set(e.form_mut(), value)))
    };

    let employee_visible = move || editor.with(|e| e.employee_field().visible);
    let title = editor.with_untracked(|e| e.title());

    view! {
        <ModalFrame title=title on_close=Callback::new(move |_| movements.close())>
            <div class="modal-body-custom">
                <div class="form-grid">
                    <div class="form-col-6">
                        <Select
                            label="Tipo de movimiento"
                            value=field(|f| &f.movement_type)
                            options=type_options("Seleccionar tipo")
                            on_change=Callback::new(move |code: String| {
                                editor.update(|e| e.set_type(&code))
                            })
                            required=true
                            error=error("movement_type")
                        />
                    </div>
                    <Show when=employee_visible>
                        <div class="form-col-6">
                            <Select
                                label="Empleado"
                                value=field(|f| &f.employee_id)
                                options=employee_options("Seleccionar empleado")
                                on_change=setter(|f, v| f.employee_id = v)
                                required=true
                                error=error("employee_id")
                            />
                        </div>
                    </Show>
                    <div class="form-col-12">
                        <Input
                            label="Descripción"
                            value=field(|f| &f.description)
                            on_input=setter(|f, v| f.description = v)
                            placeholder="Ej: Suscripción mensual"
                            required=true
                            error=error("description")
                        />
                    </div>
                    <div class="form-col-6">
                        <Input
                            label="Monto"
                            input_type="number"
                            prefix="$"
                            value=field(|f| &f.amount)
                            on_input=setter(|f, v| f.amount = v)
                            required=true
                            error=error("amount")
                        />
                    </div>
                    <div class="form-col-6">
                        <Input
                            label="Fecha"
                            input_type="date"
                            value=field(|f| &f.date)
                            on_input=setter(|f, v| f.date = v)
                            required=true
                            error=error("date")
                        />
                    </div>
                    <div class="form-col-12">
                        <Select
                            label="Proyecto"
                            value=field(|f| &f.project_id)
                            options=project_options("General")
                            on_change=setter(|f, v| f.project_id = v)
                        />
                    </div>
                    <div class="form-col-12">
                        <label class="form-label-custom">"Notas"</label>
                        <textarea
                            class="form-control-custom"
                            rows="3"
                            prop:value=move || editor.with(|e| e.form().notes.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                editor.update(|e| e.form_mut().notes = value);
                            }
                        ></textarea>
                    </div>
                </div>
            </div>
            <div class="modal-footer-custom">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| movements.close()>
                    "Cancelar"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| movements.save()>
                    {bi("check-lg")}
                    " Guardar"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn MovementDeleteModal(id: u32) -> impl IntoView {
    let movements = use_movements();
    let description = movements.record(id).description;

    view! {
        <ModalFrame
            title="Eliminar Movimiento"
            modal_class="modal-sm"
            on_close=Callback::new(move |_| movements.cancel_delete())
        >
            <div class="modal-body-custom text-center">
                <div class="delete-icon">{bi("exclamation-triangle")}</div>
                <p>"¿Estás seguro de que deseas eliminar este movimiento?"</p>
                <p class="delete-item-name">{description}</p>
                <small class="text-muted">"Esta acción no se puede deshacer."</small>
            </div>
            <div class="modal-footer-custom">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| movements.cancel_delete()>
                    "Cancelar"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| movements.confirm_delete()>
                    {bi("trash")}
                    " Eliminar"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_start_with_placeholder() {
        let types = type_options("Todos");
        assert_eq!(types[0], (String::new(), "Todos".to_string()));
        assert_eq!(types.len(), 5);
        assert!(types.iter().any(|(code, _)| code == "pago_equipo"));

        let projects = project_options("General");
        assert_eq!(projects.len(), demo_projects().len() + 1);
        let employees = employee_options("Todos");
        assert_eq!(employees[1].0, demo_employees()[0].id.to_string());
    }
}
