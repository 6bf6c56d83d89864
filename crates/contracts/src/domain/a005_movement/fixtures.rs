use chrono::NaiveDate;

use super::aggregate::{EmployeeRef, Movement, MovementType, ProjectRef};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn employee(id: u32, name: &str) -> Option<EmployeeRef> {
    Some(EmployeeRef {
        id,
        name: name.to_string(),
    })
}

fn project(id: Option<u32>, name: &str) -> Option<ProjectRef> {
    Some(ProjectRef {
        id,
        name: name.to_string(),
    })
}

fn notes(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

/// First demo movement, shown for unknown ids.
pub fn fallback_movement() -> Movement {
    Movement {
        id: 1,
        movement_type: MovementType::TeamPayment,
        icon: "bi-person-fill".into(),
        description: "Pago quincenal - María García".into(),
        amount: 1800.0,
        date: date(2026, 1, 11),
        employee: employee(1, "María García"),
        project: None,
        notes: notes("Pago correspondiente a primera quincena de enero 2026"),
    }
}

/// The seven demo movements of the movements screen.
pub fn demo_movements() -> Vec<Movement> {
    vec![
        fallback_movement(),
        Movement {
            id: 2,
            movement_type: MovementType::TeamPayment,
            icon: "bi-person-fill".into(),
            description: "Pago quincenal - Carlos López".into(),
            amount: 2200.0,
            date: date(2026, 1, 10),
            employee: employee(2, "Carlos López"),
            project: None,
            notes: notes(""),
        },
        Movement {
            id: 3,
            movement_type: MovementType::Service,
            icon: "bi-cloud-fill".into(),
            description: "Suscripción AWS - Enero".into(),
            amount: 450.0,
            date: date(2026, 1, 8),
            employee: None,
            project: project(Some(1), "E-commerce TechStore"),
            notes: notes("Factura AWS-2026-0108"),
        },
        Movement {
            id: 4,
            movement_type: MovementType::ProjectExpense,
            icon: "bi-kanban-fill".into(),
            description: "Licencia plugin premium".into(),
            amount: 79.0,
            date: date(2026, 1, 5),
            employee: None,
            project: project(Some(2), "App Gestión Inventario"),
            notes: notes("Plugin WooCommerce para inventario"),
        },
        Movement {
            id: 5,
            movement_type: MovementType::Service,
            icon: "bi-palette-fill".into(),
            description: "Suscripción Figma Team".into(),
            amount: 75.0,
            date: date(2026, 1, 3),
            employee: None,
            project: project(None, "General"),
            notes: notes("Plan Team mensual"),
        },
        Movement {
            id: 6,
            movement_type: MovementType::Other,
            icon: "bi-three-dots".into(),
            description: "Dominio anual ypservices.com".into(),
            amount: 15.0,
            date: date(2026, 1, 1),
            employee: None,
            project: project(None, "General"),
            notes: notes("Renovación anual GoDaddy"),
        },
        Movement {
            id: 7,
            movement_type: MovementType::TeamPayment,
            icon: "bi-person-fill".into(),
            description: "Bono fin de año - Ana Martínez".into(),
            amount: 500.0,
            date: date(2025, 12, 28),
            employee: employee(3, "Ana Martínez"),
            project: None,
            notes: notes("Bono navideño"),
        },
    ]
}
