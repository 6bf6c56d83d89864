use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
}

impl ClientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Activo",
            ClientStatus::Inactive => "Inactivo",
        }
    }

    /// Badge class: the lower-cased label.
    pub fn css_class(&self) -> String {
        self.label().to_lowercase()
    }

    pub fn all() -> [ClientStatus; 2] {
        [ClientStatus::Active, ClientStatus::Inactive]
    }
}

// ============================================================================
// Record
// ============================================================================

/// Client shown in the clients section and the view modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub initials: String,
    pub email: String,
    pub phone: String,
    /// Number of projects linked to the client.
    pub projects: u32,
    pub status: ClientStatus,
}

impl Client {
    pub fn new(
        name: &str,
        initials: &str,
        email: &str,
        phone: &str,
        projects: u32,
        status: ClientStatus,
    ) -> Self {
        Self {
            name: name.to_string(),
            initials: initials.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            projects,
            status,
        }
    }
}
