//! View, edit, delete and payment surfaces for clients, employees, projects
//! and invoices.
//!
//! Everything here is plain data; [`components`] renders it and
//! [`service`] drives it from the UI.

pub mod components;
pub mod service;

use crate::shared::format::{format_date_short, format_usd_whole};
use chrono::NaiveDate;
use contracts::domain::a001_client::aggregate::ClientStatus;
use contracts::domain::a001_client::fixtures::demo_clients;
use contracts::domain::a002_employee::fixtures::demo_employees;
use contracts::domain::a003_project::aggregate::ProjectStatus;
use contracts::domain::a003_project::fixtures::demo_projects;
use contracts::domain::common::{EntityKind, EntityRecord};
use contracts::shared::notification::Notification;
use thiserror::Error;

const EM_DASH: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailError {
    #[error("no edit form for {0}")]
    UnsupportedKind(EntityKind),
    #[error("nothing is pending confirmation")]
    NothingPending,
}

// ============================================================================
// View
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Initials(String),
    /// Bootstrap icon name.
    Icon(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValue {
    Plain(String),
    /// Emphasized amount with a CSS color.
    Strong { text: String, color: &'static str },
    Badge { text: String, class: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: DetailValue,
}

impl DetailRow {
    fn plain(label: &'static str, text: &str) -> Self {
        let text = if text.trim().is_empty() { EM_DASH } else { text };
        Self {
            label,
            value: DetailValue::Plain(text.to_string()),
        }
    }

    fn strong(label: &'static str, text: String, color: &'static str) -> Self {
        Self {
            label,
            value: DetailValue::Strong { text, color },
        }
    }

    fn badge(label: &'static str, text: &str, class: String) -> Self {
        Self {
            label,
            value: DetailValue::Badge {
                text: text.to_string(),
                class,
            },
        }
    }
}

/// What the edit button of a view surface hands over: only the kind and
/// the primary name. The edit form re-derives everything else from those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub kind: EntityKind,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFragment {
    pub title: &'static str,
    pub avatar: Avatar,
    /// Extra class on the avatar (invoices use a warm gradient).
    pub avatar_class: Option<&'static str>,
    pub heading: String,
    pub subtitle: String,
    pub rows: Vec<DetailRow>,
    pub edit: Option<EditTarget>,
}

fn edit_target(kind: EntityKind, name: &str) -> Option<EditTarget> {
    Some(EditTarget {
        kind,
        name: name.to_string(),
    })
}

pub fn render_view(record: &EntityRecord) -> DetailFragment {
    match record {
        EntityRecord::Client(client) => DetailFragment {
            title: "Detalles del Cliente",
            avatar: Avatar::Initials(client.initials.clone()),
            avatar_class: None,
            heading: client.name.clone(),
            subtitle: client.email.clone(),
            rows: vec![
                DetailRow::plain("Teléfono", &client.phone),
                DetailRow::plain("Proyectos", &client.projects.to_string()),
                DetailRow::badge("Estado", client.status.label(), client.status.css_class()),
            ],
            edit: edit_target(EntityKind::Client, &client.name),
        },
        EntityRecord::Employee(employee) => DetailFragment {
            title: "Detalles del Empleado",
            avatar: Avatar::Initials(employee.initials.clone()),
            avatar_class: None,
            heading: employee.name.clone(),
            subtitle: employee.role.clone(),
            rows: vec![
                DetailRow::plain("Email", &employee.email),
                DetailRow::plain("Teléfono", &employee.phone),
                DetailRow::plain("Ingreso", &format_date_short(employee.start_date)),
            ],
            edit: edit_target(EntityKind::Employee, &employee.name),
        },
        EntityRecord::Project(project) => DetailFragment {
            title: "Detalles del Proyecto",
            avatar: Avatar::Icon(project.icon.clone()),
            avatar_class: None,
            heading: project.name.clone(),
            subtitle: format!("Cliente: {}", project.client),
            rows: vec![
                DetailRow::strong(
                    "Presupuesto",
                    format_usd_whole(project.budget),
                    "var(--success)",
                ),
                DetailRow::badge(
                    "Estado",
                    project.status.label(),
                    project.status.css_class(),
                ),
            ],
            edit: edit_target(EntityKind::Project, &project.name),
        },
        EntityRecord::Invoice(invoice) => DetailFragment {
            title: "Detalles de Factura",
            avatar: Avatar::Icon("receipt".to_string()),
            avatar_class: Some("view-avatar-invoice"),
            heading: invoice.number.clone(),
            subtitle: invoice.project.clone(),
            rows: vec![
                DetailRow::plain("Cliente", &invoice.client),
                DetailRow::strong("Monto", format_usd_whole(invoice.amount), "var(--primary)"),
                DetailRow::badge("Estado", invoice.status.label(), invoice.status.css_class()),
            ],
            edit: None,
        },
    }
}

// ============================================================================
// Edit
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidth {
    Half,
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditInput {
    Text {
        input_type: &'static str,
        value: String,
        prefix: Option<&'static str>,
    },
    Select {
        options: Vec<String>,
        selected: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditField {
    pub label: &'static str,
    pub width: FieldWidth,
    pub input: EditInput,
}

impl EditField {
    fn text(label: &'static str, width: FieldWidth, value: impl Into<String>) -> Self {
        Self::typed(label, width, "text", value)
    }

    fn typed(
        label: &'static str,
        width: FieldWidth,
        input_type: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self {
            label,
            width,
            input: EditInput::Text {
                input_type,
                value: value.into(),
                prefix: None,
            },
        }
    }

    fn select(label: &'static str, width: FieldWidth, options: Vec<String>, selected: usize) -> Self {
        Self {
            label,
            width,
            input: EditInput::Select { options, selected },
        }
    }

    fn with_prefix(mut self, p: &'static str) -> Self {
        if let EditInput::Text { prefix, .. } = &mut self.input {
            *prefix = Some(p);
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub kind: EntityKind,
    pub title: &'static str,
    pub fields: Vec<EditField>,
}

/// `"María García"` + `"ypservices.com"` -> `"maría.garcía@ypservices.com"`.
///
/// Only the first space becomes a dot.
pub fn derive_email(name: &str, domain: &str) -> String {
    format!("{}@{domain}", name.to_lowercase().replacen(' ', ".", 1))
}

/// First word and second word of a name; a missing second word is empty.
fn split_name(name: &str) -> (String, String) {
    let mut parts = name.split(' ');
    let first = parts.next().unwrap_or_default().to_string();
    let last = parts.next().unwrap_or_default().to_string();
    (first, last)
}

fn position_of(options: &[String], value: &str) -> usize {
    options.iter().position(|o| o == value).unwrap_or(0)
}

fn person_fields(name: &str, domain: &str) -> Vec<EditField> {
    let (first, last) = split_name(name);
    vec![
        EditField::text("Nombre", FieldWidth::Half, first),
        EditField::text("Apellido", FieldWidth::Half, last),
        EditField::typed("Email", FieldWidth::Full, "email", derive_email(name, domain)),
    ]
}

/// Edit form for an entity identified only by kind and name.
pub fn render_edit(kind: EntityKind, name: &str) -> Result<EditForm, DetailError> {
    let (title, fields) = match kind {
        EntityKind::Client => {
            let statuses: Vec<String> =
                ClientStatus::all().iter().map(|s| s.label().to_string()).collect();
            let mut fields = person_fields(name, "email.com");
            fields.push(EditField::select("Estado", FieldWidth::Full, statuses, 0));
            ("Editar Cliente", fields)
        }
        EntityKind::Employee => {
            let mut roles: Vec<String> = Vec::new();
            for employee in demo_employees() {
                if !roles.contains(&employee.role) {
                    roles.push(employee.role.clone());
                }
            }
            let selected = demo_employees()
                .iter()
                .find(|e| e.name == name)
                .map(|e| position_of(&roles, &e.role))
                .unwrap_or(0);
            let mut fields = person_fields(name, "ypservices.com");
            fields.push(EditField::select("Cargo", FieldWidth::Full, roles, selected));
            ("Editar Empleado", fields)
        }
        EntityKind::Project => {
            let project = demo_projects().iter().find(|p| p.name == name);
            let clients: Vec<String> = demo_clients().iter().map(|c| c.name.clone()).collect();
            let statuses: Vec<String> =
                ProjectStatus::all().iter().map(|s| s.label().to_string()).collect();
            let client_index = project
                .map(|p| position_of(&clients, &p.client))
                .unwrap_or(0);
            let status = project.map(|p| p.status).unwrap_or_default();
            let budget = project
                .map(|p| format!("{:.0}", p.budget))
                .unwrap_or_default();
            (
                "Editar Proyecto",
                vec![
                    EditField::text("Nombre", FieldWidth::Full, name),
                    EditField::select("Cliente", FieldWidth::Full, clients, client_index),
                    EditField::typed("Presupuesto", FieldWidth::Half, "number", budget)
                        .with_prefix("$"),
                    EditField::select(
                        "Estado",
                        FieldWidth::Half,
                        statuses.clone(),
                        position_of(&statuses, status.label()),
                    ),
                ],
            )
        }
        EntityKind::Invoice | EntityKind::Movement => {
            return Err(DetailError::UnsupportedKind(kind));
        }
    };
    Ok(EditForm {
        kind,
        title,
        fields,
    })
}

// ============================================================================
// Delete / payment confirmations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub kind: EntityKind,
    pub name: String,
}

impl DeleteTarget {
    /// Line shown in the confirmation dialog, e.g. `cliente: Juan Domínguez`.
    pub fn prompt(&self) -> String {
        format!("{}: {}", self.kind.label(), self.name)
    }
}

/// At most one pending delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pending: Option<DeleteTarget>,
}

impl DeleteConfirmation {
    pub fn request(&mut self, kind: EntityKind, name: &str) -> &DeleteTarget {
        self.pending.insert(DeleteTarget {
            kind,
            name: name.to_string(),
        })
    }

    pub fn pending(&self) -> Option<&DeleteTarget> {
        self.pending.as_ref()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Clear the pending target and produce the success notification.
    pub fn confirm(&mut self) -> Result<Notification, DetailError> {
        let target = self.pending.take().ok_or(DetailError::NothingPending)?;
        Ok(Notification::success(
            "Eliminado",
            format!(
                "El {} \"{}\" ha sido eliminado.",
                target.kind.label(),
                target.name
            ),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentTarget {
    pub name: String,
    pub initials: String,
    pub role: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentConfirmation {
    pending: Option<PaymentTarget>,
}

impl PaymentConfirmation {
    /// The payment date defaults to `today`.
    pub fn open(&mut self, name: &str, initials: &str, role: &str, today: NaiveDate) -> &PaymentTarget {
        self.pending.insert(PaymentTarget {
            name: name.to_string(),
            initials: initials.to_string(),
            role: role.to_string(),
            date: today,
        })
    }

    pub fn pending(&self) -> Option<&PaymentTarget> {
        self.pending.as_ref()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn confirm(&mut self) -> Result<Notification, DetailError> {
        let target = self.pending.take().ok_or(DetailError::NothingPending)?;
        Ok(Notification::success(
            "Pago Registrado",
            format!("El pago a {} se ha registrado.", target.name),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::aggregate::Client;
    use contracts::domain::a002_employee::fixtures::find_employee;
    use contracts::domain::a003_project::fixtures::find_project;
    use contracts::domain::a004_invoice::fixtures::demo_invoices;
    use contracts::shared::notification::NotificationKind;

    fn text_value(field: &EditField) -> &str {
        match &field.input {
            EditInput::Text { value, .. } => value,
            EditInput::Select { .. } => panic!("{} is a select", field.label),
        }
    }

    fn selected_option(field: &EditField) -> &str {
        match &field.input {
            EditInput::Select { options, selected } => &options[*selected],
            EditInput::Text { .. } => panic!("{} is a text input", field.label),
        }
    }

    #[test]
    fn test_client_view() {
        let record = EntityRecord::Client(demo_clients()[2].clone());
        let view = render_view(&record);
        assert_eq!(view.title, "Detalles del Cliente");
        assert_eq!(view.avatar, Avatar::Initials("RS".into()));
        assert_eq!(view.subtitle, "roberto@saborcasero.mx");
        assert_eq!(
            view.rows[2].value,
            DetailValue::Badge {
                text: "Inactivo".into(),
                class: "inactivo".into()
            }
        );
        assert_eq!(
            view.edit,
            Some(EditTarget {
                kind: EntityKind::Client,
                name: "Roberto Sánchez".into()
            })
        );
    }

    #[test]
    fn test_missing_fields_render_dash() {
        let client = Client::new("Sin Datos", "SD", "", "", 0, ClientStatus::Active);
        let view = render_view(&EntityRecord::Client(client));
        assert_eq!(view.rows[0].value, DetailValue::Plain("—".into()));
    }

    #[test]
    fn test_employee_view() {
        let record = EntityRecord::Employee(find_employee(1).unwrap().clone());
        let view = render_view(&record);
        assert_eq!(view.title, "Detalles del Empleado");
        assert_eq!(view.subtitle, "Desarrollador Full Stack");
        assert_eq!(view.rows[2].value, DetailValue::Plain("15 mar 2023".into()));
    }

    #[test]
    fn test_project_view_status_class() {
        let record = EntityRecord::Project(find_project(1).unwrap().clone());
        let view = render_view(&record);
        assert_eq!(view.title, "Detalles del Proyecto");
        assert_eq!(view.subtitle, "Cliente: Juan Domínguez");
        match &view.rows[1].value {
            DetailValue::Badge { class, .. } => assert_eq!(class, "progress"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_invoice_view_has_no_edit() {
        let record = EntityRecord::Invoice(demo_invoices()[0].clone());
        let view = render_view(&record);
        assert_eq!(view.title, "Detalles de Factura");
        assert_eq!(view.edit, None);
        assert_eq!(view.avatar, Avatar::Icon("receipt".into()));
        assert_eq!(
            view.rows[1].value,
            DetailValue::Strong {
                text: "$4,250".into(),
                color: "var(--primary)"
            }
        );
        assert_eq!(
            view.rows[2].value,
            DetailValue::Badge {
                text: "Pagada".into(),
                class: "pagada".into()
            }
        );
    }

    #[test]
    fn test_edit_email_derivation() {
        let client = render_edit(EntityKind::Client, "Juan Domínguez").unwrap();
        assert_eq!(client.title, "Editar Cliente");
        assert_eq!(text_value(&client.fields[0]), "Juan");
        assert_eq!(text_value(&client.fields[1]), "Domínguez");
        assert_eq!(text_value(&client.fields[2]), "juan.domínguez@email.com");

        let employee = render_edit(EntityKind::Employee, "Ana Martínez").unwrap();
        assert_eq!(employee.title, "Editar Empleado");
        assert_eq!(text_value(&employee.fields[2]), "ana.martínez@ypservices.com");
        assert_eq!(selected_option(&employee.fields[3]), "Diseñadora UX/UI");
    }

    #[test]
    fn test_edit_single_word_and_three_word_names() {
        let form = render_edit(EntityKind::Client, "Cher").unwrap();
        assert_eq!(text_value(&form.fields[1]), "");
        assert_eq!(text_value(&form.fields[2]), "cher@email.com");

        let form = render_edit(EntityKind::Client, "Ana María Ruiz").unwrap();
        assert_eq!(text_value(&form.fields[1]), "María");
        assert_eq!(text_value(&form.fields[2]), "ana.maría ruiz@email.com");
    }

    #[test]
    fn test_project_edit_prefills_from_fixtures() {
        let form = render_edit(EntityKind::Project, "App Gestión Inventario").unwrap();
        assert_eq!(form.title, "Editar Proyecto");
        assert_eq!(selected_option(&form.fields[1]), "María González");
        assert_eq!(text_value(&form.fields[2]), "12000");
        assert_eq!(selected_option(&form.fields[3]), "En Progreso");

        let unknown = render_edit(EntityKind::Project, "Proyecto Nuevo").unwrap();
        assert_eq!(text_value(&unknown.fields[2]), "");
    }

    #[test]
    fn test_edit_unsupported_kinds() {
        assert_eq!(
            render_edit(EntityKind::Invoice, "FAC-2026-001"),
            Err(DetailError::UnsupportedKind(EntityKind::Invoice))
        );
        assert_eq!(
            render_edit(EntityKind::Movement, "x"),
            Err(DetailError::UnsupportedKind(EntityKind::Movement))
        );
    }

    #[test]
    fn test_delete_confirmation() {
        let mut deletes = DeleteConfirmation::default();
        assert_eq!(deletes.confirm(), Err(DetailError::NothingPending));

        let prompt = deletes.request(EntityKind::Client, "Juan Domínguez").prompt();
        assert_eq!(prompt, "cliente: Juan Domínguez");

        let notification = deletes.confirm().unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.title, "Eliminado");
        assert_eq!(
            notification.message,
            "El cliente \"Juan Domínguez\" ha sido eliminado."
        );
        assert_eq!(deletes.pending(), None);
        assert_eq!(deletes.confirm(), Err(DetailError::NothingPending));
    }

    #[test]
    fn test_payment_confirmation() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let mut payments = PaymentConfirmation::default();
        let target = payments.open("Carlos López", "CL", "Desarrollador Frontend", today);
        assert_eq!(target.date, today);

        let notification = payments.confirm().unwrap();
        assert_eq!(notification.title, "Pago Registrado");
        assert_eq!(notification.message, "El pago a Carlos López se ha registrado.");
        assert_eq!(payments.confirm(), Err(DetailError::NothingPending));
    }
}
