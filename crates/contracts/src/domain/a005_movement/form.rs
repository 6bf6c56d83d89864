use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::{Movement, MovementType};

// ============================================================================
// Form state
// ============================================================================

/// Raw values of the create/edit movement form, as typed by the user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovementForm {
    /// Selector value, see [`MovementType::code`]. Empty when nothing is chosen.
    pub movement_type: String,
    pub employee_id: String,
    pub description: String,
    pub amount: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    pub project_id: String,
    pub notes: String,
}

/// Visibility and constraint of a conditional form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldState {
    pub visible: bool,
    pub required: bool,
}

impl FieldState {
    pub const HIDDEN: FieldState = FieldState {
        visible: false,
        required: false,
    };
    pub const REQUIRED: FieldState = FieldState {
        visible: true,
        required: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MovementValidationError {
    #[error("Selecciona el tipo de movimiento")]
    MissingType,
    #[error("Selecciona el empleado")]
    MissingEmployee,
    #[error("Ingresa una descripción")]
    MissingDescription,
    #[error("Ingresa un monto mayor a cero")]
    InvalidAmount,
    #[error("Ingresa una fecha válida")]
    InvalidDate,
}

impl MovementValidationError {
    /// Name of the form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            MovementValidationError::MissingType => "movement_type",
            MovementValidationError::MissingEmployee => "employee_id",
            MovementValidationError::MissingDescription => "description",
            MovementValidationError::InvalidAmount => "amount",
            MovementValidationError::InvalidDate => "date",
        }
    }
}

/// Validated form contents, logged on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementPayload {
    #[serde(rename = "type")]
    pub movement_type: MovementType,
    #[serde(rename = "employeeId")]
    pub employee_id: Option<u32>,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(rename = "projectId")]
    pub project_id: Option<u32>,
    pub notes: Option<String>,
}

fn optional_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

impl MovementForm {
    /// Empty form dated `today`.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Default::default()
        }
    }

    /// Form pre-filled from an existing movement.
    pub fn from_movement(movement: &Movement) -> Self {
        Self {
            movement_type: movement.movement_type.code().to_string(),
            employee_id: movement
                .employee_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            description: movement.description.clone(),
            amount: movement.amount.to_string(),
            date: movement.date.format("%Y-%m-%d").to_string(),
            project_id: movement
                .project_id()
                .map(|id| id.to_string())
                .unwrap_or_default(),
            notes: movement.notes.clone().unwrap_or_default(),
        }
    }

    pub fn selected_type(&self) -> Option<MovementType> {
        MovementType::from_code(&self.movement_type)
    }

    /// The employee selector is shown and mandatory only for team payments.
    pub fn employee_field(&self) -> FieldState {
        match self.selected_type() {
            Some(t) if t.requires_employee() => FieldState::REQUIRED,
            _ => FieldState::HIDDEN,
        }
    }

    /// Check every required field, collecting all failures in field order.
    pub fn validate(&self) -> Result<MovementPayload, Vec<MovementValidationError>> {
        let mut errors = Vec::new();

        let movement_type = self.selected_type();
        if movement_type.is_none() {
            errors.push(MovementValidationError::MissingType);
        }

        let employee_id = optional_id(&self.employee_id);
        if self.employee_field().required && employee_id.is_none() {
            errors.push(MovementValidationError::MissingEmployee);
        }

        if self.description.trim().is_empty() {
            errors.push(MovementValidationError::MissingDescription);
        }

        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite() && *a > 0.0);
        if amount.is_none() {
            errors.push(MovementValidationError::InvalidAmount);
        }

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok();
        if date.is_none() {
            errors.push(MovementValidationError::InvalidDate);
        }

        match (movement_type, amount, date) {
            (Some(movement_type), Some(amount), Some(date)) if errors.is_empty() => {
                let notes = self.notes.trim();
                Ok(MovementPayload {
                    movement_type,
                    employee_id: if movement_type.requires_employee() {
                        employee_id
                    } else {
                        None
                    },
                    description: self.description.trim().to_string(),
                    amount,
                    date,
                    project_id: optional_id(&self.project_id),
                    notes: (!notes.is_empty()).then(|| notes.to_string()),
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_movement::store::DemoMovementStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_employee_field_follows_type() {
        let mut form = MovementForm::blank(today());
        assert_eq!(form.employee_field(), FieldState::HIDDEN);

        form.movement_type = "pago_equipo".into();
        assert_eq!(form.employee_field(), FieldState::REQUIRED);

        form.movement_type = "servicio".into();
        assert_eq!(form.employee_field(), FieldState::HIDDEN);
    }

    #[test]
    fn test_blank_form_reports_all_missing_fields() {
        let mut form = MovementForm::blank(today());
        form.date.clear();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                MovementValidationError::MissingType,
                MovementValidationError::MissingDescription,
                MovementValidationError::InvalidAmount,
                MovementValidationError::InvalidDate,
            ]
        );
    }

    #[test]
    fn test_team_payment_requires_employee() {
        let form = MovementForm {
            movement_type: "pago_equipo".into(),
            description: "Pago quincenal".into(),
            amount: "1800".into(),
            date: "2026-01-11".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            vec![MovementValidationError::MissingEmployee]
        );
        assert_eq!(MovementValidationError::MissingEmployee.field(), "employee_id");
    }

    #[test]
    fn test_valid_form_produces_payload() {
        let form = MovementForm {
            movement_type: "servicio".into(),
            employee_id: "2".into(),
            description: "  Hosting  ".into(),
            amount: "120.5".into(),
            date: "2026-01-12".into(),
            project_id: "1".into(),
            notes: " ".into(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.movement_type, MovementType::Service);
        assert_eq!(payload.employee_id, None);
        assert_eq!(payload.description, "Hosting");
        assert_eq!(payload.amount, 120.5);
        assert_eq!(payload.project_id, Some(1));
        assert_eq!(payload.notes, None);
    }

    #[test]
    fn test_from_movement_round_trips_through_validation() {
        let store = DemoMovementStore::with_fixtures();
        let form = MovementForm::from_movement(store.lookup(1).unwrap());
        assert_eq!(form.movement_type, "pago_equipo");
        assert_eq!(form.employee_id, "1");
        assert_eq!(form.date, "2026-01-11");
        let payload = form.validate().unwrap();
        assert_eq!(payload.employee_id, Some(1));
        assert_eq!(payload.amount, 1800.0);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let form = MovementForm {
            movement_type: "otro".into(),
            description: "Ajuste".into(),
            amount: "-5".into(),
            date: "2026-01-12".into(),
            ..Default::default()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            vec![MovementValidationError::InvalidAmount]
        );
    }

    #[test]
    fn test_payload_json_field_names() {
        let store = DemoMovementStore::with_fixtures();
        let payload = MovementForm::from_movement(store.lookup(1).unwrap())
            .validate()
            .unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "pago_equipo");
        assert_eq!(json["type"], MovementType::TeamPayment.code());
        assert_eq!(json["employeeId"], 1);
        assert_eq!(json["projectId"], serde_json::Value::Null);
        assert_eq!(json["date"], "2026-01-11");

        for movement_type in MovementType::all() {
            let value = serde_json::to_value(movement_type).unwrap();
            assert_eq!(value, movement_type.code());
        }
    }
}
