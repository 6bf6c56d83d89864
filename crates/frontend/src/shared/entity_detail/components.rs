use super::service::use_entity_details;
use super::{
    Avatar, DeleteTarget, DetailFragment, DetailValue, EditForm, EditInput, FieldWidth,
    PaymentTarget,
};
use crate::layout::modal_service::use_modals;
use crate::shared::icons::bi;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;
use thaw::*;

fn detail_value_view(value: DetailValue) -> AnyView {
    match value {
        DetailValue::Plain(text) => view! { <span>{text}</span> }.into_any(),
        DetailValue::Strong { text, color } => {
            view! { <strong style=format!("color:{color};")>{text}</strong> }.into_any()
        }
        DetailValue::Badge { text, class } => {
            view! { <span class=format!("status-badge {class}")>{text}</span> }.into_any()
        }
    }
}

fn avatar_view(avatar: Avatar, extra_class: Option<&'static str>) -> impl IntoView {
    let class = match extra_class {
        Some(extra) => format!("view-avatar {extra}"),
        None => "view-avatar".to_string(),
    };
    let content = match avatar {
        Avatar::Initials(initials) => view! { <span>{initials}</span> }.into_any(),
        Avatar::Icon(name) => bi(&name),
    };
    view! { <div class=class>{content}</div> }
}

#[component]
pub fn ViewModal(fragment: DetailFragment) -> impl IntoView {
    let modals = use_modals();
    let details = use_entity_details();
    let DetailFragment {
        title,
        avatar,
        avatar_class,
        heading,
        subtitle,
        rows,
        edit,
    } = fragment;

    let rows_view = rows
        .into_iter()
        .map(|row| {
            view! {
                <div class="view-detail">
                    <span class="view-label">{row.label}</span>
                    {detail_value_view(row.value)}
                </div>
            }
        })
        .collect_view();

    let edit_button = edit.map(|target| {
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| details.open_edit(target.kind, &target.name)
            >
                {bi("pencil")}
                " Editar"
            </Button>
        }
    });

    view! {
        <ModalFrame title=title on_close=Callback::new(move |_| modals.hide())>
            <div class="modal-body-custom">
                <div class="view-header">
                    {avatar_view(avatar, avatar_class)}
                    <div>
                        <h5 class="mb-0">{heading}</h5>
                        <small class="view-subtitle">{subtitle}</small>
                    </div>
                </div>
                {rows_view}
            </div>
            <div class="modal-footer-custom">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| modals.hide()>
                    "Cerrar"
                </Button>
                {edit_button}
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn EditModal(form: EditForm) -> impl IntoView {
    let modals = use_modals();
    let details = use_entity_details();
    let title = form.title;
    let fields = form.fields.clone();
    let form = StoredValue::new(form);

    let fields_view = fields
        .into_iter()
        .map(|field| {
            let col = match field.width {
                FieldWidth::Half => "form-col-6",
                FieldWidth::Full => "form-col-12",
            };
            let input = match field.input {
                EditInput::Text {
                    input_type,
                    value,
                    prefix,
                } => {
                    let input = view! {
                        <input type=input_type class="form-control-custom" prop:value=value />
                    };
                    match prefix {
                        Some(prefix) => view! {
                            <div class="input-group">
                                <span class="input-group-text-custom">{prefix}</span>
                                {input}
                            </div>
                        }
                        .into_any(),
                        None => input.into_any(),
                    }
                }
                EditInput::Select { options, selected } => view! {
                    <select class="form-select-custom">
                        {options
                            .into_iter()
                            .enumerate()
                            .map(|(i, option)| {
                                view! { <option selected=i == selected>{option}</option> }
                            })
                            .collect_view()}
                    </select>
                }
                .into_any(),
            };
            view! {
                <div class=col>
                    <label class="form-label-custom">{field.label}</label>
                    {input}
                </div>
            }
        })
        .collect_view();

    view! {
        <ModalFrame title=title on_close=Callback::new(move |_| modals.hide())>
            <div class="modal-body-custom">
                <div class="form-grid">{fields_view}</div>
            </div>
            <div class="modal-footer-custom">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| modals.hide()>
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| form.with_value(|form| details.save_edit(form))
                >
                    "Guardar Cambios"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn DeleteModal(target: DeleteTarget) -> impl IntoView {
    let details = use_entity_details();

    view! {
        <ModalFrame
            title="Confirmar Eliminación"
            modal_class="modal-sm"
            on_close=Callback::new(move |_| details.cancel_delete())
        >
            <div class="modal-body-custom text-center">
                <div class="delete-icon">{bi("exclamation-triangle")}</div>
                <p>"¿Estás seguro de que deseas eliminar este elemento?"</p>
                <p class="delete-item-name">{target.prompt()}</p>
                <small class="text-muted">"Esta acción no se puede deshacer."</small>
            </div>
            <div class="modal-footer-custom">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| details.cancel_delete()
                >
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| details.confirm_delete()
                >
                    {bi("trash")}
                    " Eliminar"
                </Button>
            </div>
        </ModalFrame>
    }
}

#[component]
pub fn PaymentModal(target: PaymentTarget) -> impl IntoView {
    let details = use_entity_details();
    let date = target.date.format("%Y-%m-%d").to_string();

    view! {
        <ModalFrame
            title="Registrar Pago"
            on_close=Callback::new(move |_| details.cancel_payment())
        >
            <div class="modal-body-custom">
                <div class="view-header">
                    <div class="view-avatar">{target.initials}</div>
                    <div>
                        <h5 class="mb-0">{target.name}</h5>
                        <small class="view-subtitle">{target.role}</small>
                    </div>
                </div>
                <div class="form-col-12">
                    <label class="form-label-custom">"Fecha de pago"</label>
                    <input type="date" class="form-control-custom" prop:value=date />
                </div>
            </div>
            <div class="modal-footer-custom">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| details.cancel_payment()
                >
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| details.confirm_payment()
                >
                    {bi("check-lg")}
                    " Confirmar Pago"
                </Button>
            </div>
        </ModalFrame>
    }
}
