use crate::shared::format::{format_date_long, format_date_short, format_outgoing};
use contracts::domain::a005_movement::aggregate::Movement;

const MISSING: &str = "—";

/// Display values of the movement detail dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementDetailVm {
    pub id: u32,
    pub description: String,
    pub amount: String,
    pub date: String,
    pub employee: String,
    pub project: String,
    pub notes: String,
    pub created_by: &'static str,
    pub type_label: &'static str,
    pub badge_class: String,
    /// Bootstrap icon class of the record, e.g. `bi-cloud-fill`.
    pub icon: String,
    pub icon_class: String,
}

impl MovementDetailVm {
    pub fn from_movement(movement: &Movement) -> Self {
        let kind = movement.movement_type.badge_class();
        Self {
            id: movement.id,
            description: movement.description.clone(),
            amount: format_outgoing(movement.amount),
            date: format_date_long(movement.date),
            employee: movement
                .employee
                .as_ref()
                .map(|e| e.name.clone())
                .unwrap_or_else(|| MISSING.to_string()),
            project: movement
                .project
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_else(|| MISSING.to_string()),
            notes: movement
                .notes
                .clone()
                .unwrap_or_else(|| "Sin notas".to_string()),
            created_by: "Admin User",
            type_label: movement.movement_type.label(),
            badge_class: format!("type-badge {kind}"),
            icon: movement.icon.clone(),
            icon_class: format!("movement-icon-lg {kind}"),
        }
    }
}

/// One row of the movements table.
#[derive(Debug, Clone, PartialEq)]
pub struct MovementRowVm {
    pub id: u32,
    pub icon: String,
    pub icon_class: String,
    pub description: String,
    pub type_label: &'static str,
    pub badge_class: String,
    pub related: String,
    pub date: String,
    pub amount: String,
}

impl MovementRowVm {
    pub fn from_movement(movement: &Movement) -> Self {
        let kind = movement.movement_type.badge_class();
        let related = movement
            .employee
            .as_ref()
            .map(|e| e.name.clone())
            .or_else(|| movement.project.as_ref().map(|p| p.name.clone()))
            .unwrap_or_else(|| MISSING.to_string());
        Self {
            id: movement.id,
            icon: movement.icon.clone(),
            icon_class: format!("movement-icon {kind}"),
            description: movement.description.clone(),
            type_label: movement.movement_type.label(),
            badge_class: format!("type-badge {kind}"),
            related,
            date: format_date_short(movement.date),
            amount: format_outgoing(movement.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_movement::store::DemoMovementStore;

    #[test]
    fn test_detail_of_team_payment() {
        let store = DemoMovementStore::with_fixtures();
        let vm = MovementDetailVm::from_movement(store.lookup(1).unwrap());
        assert_eq!(vm.amount, "-$1,800.00");
        assert_eq!(vm.date, "11 de enero de 2026");
        assert_eq!(vm.employee, "María García");
        assert_eq!(vm.project, "—");
        assert_eq!(vm.created_by, "Admin User");
        assert_eq!(vm.badge_class, "type-badge payment");
        assert_eq!(vm.icon_class, "movement-icon-lg payment");
    }

    #[test]
    fn test_detail_placeholders() {
        let store = DemoMovementStore::with_fixtures();
        let vm = MovementDetailVm::from_movement(store.lookup(2).unwrap());
        assert_eq!(vm.notes, "Sin notas");

        let vm = MovementDetailVm::from_movement(store.lookup(3).unwrap());
        assert_eq!(vm.employee, "—");
        assert_eq!(vm.project, "E-commerce TechStore");
        assert_eq!(vm.amount, "-$450.00");
        assert_eq!(vm.type_label, "Servicio");
    }

    #[test]
    fn test_row() {
        let store = DemoMovementStore::with_fixtures();
        let row = MovementRowVm::from_movement(store.lookup(3).unwrap());
        assert_eq!(row.related, "E-commerce TechStore");
        assert_eq!(row.date, "8 ene 2026");
        assert_eq!(row.icon_class, "movement-icon service");
    }
}
