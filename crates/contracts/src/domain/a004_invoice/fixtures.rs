use once_cell::sync::Lazy;

use super::aggregate::{Invoice, InvoiceStatus};

static INVOICES: Lazy<Vec<Invoice>> = Lazy::new(|| {
    [
        (
            "FAC-2026-001",
            "Juan Domínguez",
            "E-commerce TechStore",
            4250.0,
            InvoiceStatus::Paid,
        ),
        (
            "FAC-2026-002",
            "María González",
            "App Gestión Inventario",
            6000.0,
            InvoiceStatus::Pending,
        ),
        (
            "FAC-2025-048",
            "Roberto Sánchez",
            "Landing Page Restaurante",
            2500.0,
            InvoiceStatus::Overdue,
        ),
    ]
    .into_iter()
    .map(|(number, client, project, amount, status)| Invoice {
        number: number.to_string(),
        client: client.to_string(),
        project: project.to_string(),
        amount,
        status,
    })
    .collect()
});

pub fn demo_invoices() -> &'static [Invoice] {
    &INVOICES
}
