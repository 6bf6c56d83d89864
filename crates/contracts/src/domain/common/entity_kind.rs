use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of entity a record, view fragment or delete target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Client,
    Employee,
    Project,
    Invoice,
    Movement,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported entity kind: {0}")]
pub struct KindParseError(pub String);

impl EntityKind {
    /// Stable code used in markup attributes and logs.
    pub fn code(&self) -> &'static str {
        match self {
            EntityKind::Client => "client",
            EntityKind::Employee => "employee",
            EntityKind::Project => "project",
            EntityKind::Invoice => "invoice",
            EntityKind::Movement => "movement",
        }
    }

    /// Lower-case Spanish noun shown in confirmation texts.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Client => "cliente",
            EntityKind::Employee => "empleado",
            EntityKind::Project => "proyecto",
            EntityKind::Invoice => "factura",
            EntityKind::Movement => "movimiento",
        }
    }

    pub fn all() -> [EntityKind; 5] {
        [
            EntityKind::Client,
            EntityKind::Employee,
            EntityKind::Project,
            EntityKind::Invoice,
            EntityKind::Movement,
        ]
    }

    /// Parse a kind from its code. Unknown codes are reported instead of
    /// being silently ignored.
    pub fn from_code(code: &str) -> Result<Self, KindParseError> {
        Self::all()
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| KindParseError(code.to_string()))
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known() {
        for kind in EntityKind::all() {
            assert_eq!(EntityKind::from_code(kind.code()), Ok(kind));
        }
    }

    #[test]
    fn test_from_code_unknown() {
        let err = EntityKind::from_code("supplier").unwrap_err();
        assert_eq!(err, KindParseError("supplier".into()));
        assert_eq!(err.to_string(), "unsupported entity kind: supplier");
    }
}
