use serde::{Deserialize, Serialize};

use super::EntityKind;
use crate::domain::a001_client::aggregate::Client;
use crate::domain::a002_employee::aggregate::Employee;
use crate::domain::a003_project::aggregate::Project;
use crate::domain::a004_invoice::aggregate::Invoice;

/// A record that can be shown in the generic view modal.
///
/// Movements have their own detail surface and are not part of this enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntityRecord {
    Client(Client),
    Employee(Employee),
    Project(Project),
    Invoice(Invoice),
}

impl EntityRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRecord::Client(_) => EntityKind::Client,
            EntityRecord::Employee(_) => EntityKind::Employee,
            EntityRecord::Project(_) => EntityKind::Project,
            EntityRecord::Invoice(_) => EntityKind::Invoice,
        }
    }

    /// Primary display name, also used as the re-lookup key for edit/delete.
    pub fn name(&self) -> &str {
        match self {
            EntityRecord::Client(c) => &c.name,
            EntityRecord::Employee(e) => &e.name,
            EntityRecord::Project(p) => &p.name,
            EntityRecord::Invoice(i) => &i.number,
        }
    }
}

impl From<Client> for EntityRecord {
    fn from(value: Client) -> Self {
        EntityRecord::Client(value)
    }
}

impl From<Employee> for EntityRecord {
    fn from(value: Employee) -> Self {
        EntityRecord::Employee(value)
    }
}

impl From<Project> for EntityRecord {
    fn from(value: Project) -> Self {
        EntityRecord::Project(value)
    }
}

impl From<Invoice> for EntityRecord {
    fn from(value: Invoice) -> Self {
        EntityRecord::Invoice(value)
    }
}
