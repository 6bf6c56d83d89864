//! Form and delete-confirmation state of the movements screen.

use chrono::NaiveDate;
use contracts::domain::a005_movement::aggregate::Movement;
use contracts::domain::a005_movement::form::{
    FieldState, MovementForm, MovementPayload, MovementValidationError,
};
use contracts::shared::notification::Notification;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("no movement is awaiting deletion")]
    NothingToDelete,
}

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedMovement {
    /// Id of the edited record, `None` for a new one.
    pub id: Option<u32>,
    pub payload: MovementPayload,
    pub notification: Notification,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovementEditor {
    pending_id: Option<u32>,
    form: MovementForm,
    errors: Vec<MovementValidationError>,
    pending_delete: Option<u32>,
}

impl MovementEditor {
    /// Fresh create form dated `today`. Forgets any record under edit.
    pub fn open_new(&mut self, today: NaiveDate) {
        self.pending_id = None;
        self.form = MovementForm::blank(today);
        self.errors.clear();
    }

    pub fn open_edit(&mut self, movement: &Movement) {
        self.pending_id = Some(movement.id);
        self.form = MovementForm::from_movement(movement);
        self.errors.clear();
    }

    pub fn pending_id(&self) -> Option<u32> {
        self.pending_id
    }

    pub fn is_editing(&self) -> bool {
        self.pending_id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Editar Movimiento"
        } else {
            "Nuevo Movimiento"
        }
    }

    pub fn form(&self) -> &MovementForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MovementForm {
        &mut self.form
    }

    /// Change the type selector. The employee field follows the new type.
    pub fn set_type(&mut self, code: &str) {
        self.form.movement_type = code.to_string();
        if !self.form.employee_field().visible {
            self.form.employee_id.clear();
        }
    }

    pub fn employee_field(&self) -> FieldState {
        self.form.employee_field()
    }

    pub fn errors(&self) -> &[MovementValidationError] {
        &self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<String> {
        self.errors
            .iter()
            .find(|e| e.field() == field)
            .map(|e| e.to_string())
    }

    /// Validate the form. On failure the errors are kept for display and
    /// the record under edit stays pending.
    pub fn save(&mut self) -> Result<SavedMovement, Vec<MovementValidationError>> {
        match self.form.validate() {
            Ok(payload) => {
                let id = self.pending_id.take();
                let title = if id.is_some() {
                    "Movimiento actualizado"
                } else {
                    "Movimiento creado"
                };
                self.errors.clear();
                Ok(SavedMovement {
                    id,
                    payload,
                    notification: Notification::success(
                        title,
                        "El movimiento ha sido guardado correctamente.",
                    ),
                })
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    pub fn request_delete(&mut self, id: u32) {
        self.pending_delete = Some(id);
    }

    pub fn pending_delete(&self) -> Option<u32> {
        self.pending_delete
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn confirm_delete(&mut self) -> Result<(u32, Notification), EditorError> {
        let id = self.pending_delete.take().ok_or(EditorError::NothingToDelete)?;
        Ok((
            id,
            Notification::success(
                "Movimiento eliminado",
                "El movimiento ha sido eliminado correctamente.",
            ),
        ))
    }
}
