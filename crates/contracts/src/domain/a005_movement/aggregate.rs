use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Movement type
// ============================================================================

/// Ledger movement category.
///
/// `code` is the value of the type selector in the form and the serialized
/// form, `badge_class` the class used by type badges and icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementType {
    #[serde(rename = "pago_equipo")]
    TeamPayment,
    #[serde(rename = "servicio")]
    Service,
    #[serde(rename = "gasto_proyecto")]
    ProjectExpense,
    #[serde(rename = "otro")]
    Other,
}

/// Selector value of the team payment type.
pub const TEAM_PAYMENT_CODE: &str = "pago_equipo";

impl MovementType {
    pub fn code(&self) -> &'static str {
        match self {
            MovementType::TeamPayment => TEAM_PAYMENT_CODE,
            MovementType::Service => "servicio",
            MovementType::ProjectExpense => "gasto_proyecto",
            MovementType::Other => "otro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MovementType::TeamPayment => "Pago a Equipo",
            MovementType::Service => "Servicio",
            MovementType::ProjectExpense => "Gasto Proyecto",
            MovementType::Other => "Otro",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            MovementType::TeamPayment => "payment",
            MovementType::Service => "service",
            MovementType::ProjectExpense => "project",
            MovementType::Other => "other",
        }
    }

    pub fn all() -> [MovementType; 4] {
        [
            MovementType::TeamPayment,
            MovementType::Service,
            MovementType::ProjectExpense,
            MovementType::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }

    /// Team payments must name the paid employee.
    pub fn requires_employee(&self) -> bool {
        matches!(self, MovementType::TeamPayment)
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRef {
    pub id: u32,
    pub name: String,
}

/// Project a movement is charged to. `id` is absent for the "General" bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: Option<u32>,
    pub name: String,
}

/// Outgoing financial movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: u32,
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    /// Bootstrap icon class, e.g. `bi-cloud-fill`.
    pub icon: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub employee: Option<EmployeeRef>,
    pub project: Option<ProjectRef>,
    pub notes: Option<String>,
}

impl Movement {
    pub fn employee_id(&self) -> Option<u32> {
        self.employee.as_ref().map(|e| e.id)
    }

    pub fn project_id(&self) -> Option<u32> {
        self.project.as_ref().and_then(|p| p.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_codes_round_trip() {
        for t in MovementType::all() {
            assert_eq!(MovementType::from_code(t.code()), Some(t));
        }
        assert_eq!(MovementType::from_code("payment"), None);
    }

    #[test]
    fn test_only_team_payment_requires_employee() {
        let required: Vec<_> = MovementType::all()
            .into_iter()
            .filter(|t| t.requires_employee())
            .collect();
        assert_eq!(required, vec![MovementType::TeamPayment]);
        assert_eq!(MovementType::TeamPayment.code(), "pago_equipo");
    }
}
