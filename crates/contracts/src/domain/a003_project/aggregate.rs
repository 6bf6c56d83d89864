use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    Pending,
    #[default]
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Pending => "Pendiente",
            ProjectStatus::InProgress => "En Progreso",
            ProjectStatus::Completed => "Completado",
        }
    }

    /// "En Progreso" maps to `progress`; other statuses use the lower-cased label.
    pub fn css_class(&self) -> String {
        match self {
            ProjectStatus::InProgress => "progress".to_string(),
            other => other.label().to_lowercase(),
        }
    }

    pub fn all() -> [ProjectStatus; 3] {
        [
            ProjectStatus::Pending,
            ProjectStatus::InProgress,
            ProjectStatus::Completed,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    /// Bootstrap icon name without the `bi-` prefix.
    pub icon: String,
    pub client: String,
    pub budget: f64,
    pub status: ProjectStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_css_class() {
        assert_eq!(ProjectStatus::InProgress.css_class(), "progress");
        assert_eq!(ProjectStatus::Pending.css_class(), "pendiente");
        assert_eq!(ProjectStatus::Completed.css_class(), "completado");
    }
}
