use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Pagada",
            InvoiceStatus::Pending => "Pendiente",
            InvoiceStatus::Overdue => "Vencida",
        }
    }

    pub fn css_class(&self) -> String {
        self.label().to_lowercase()
    }
}

/// Issued invoice. Invoices are read-only: the view modal offers no edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub number: String,
    pub client: String,
    pub project: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}
