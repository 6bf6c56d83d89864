use once_cell::sync::Lazy;

use super::aggregate::{Project, ProjectStatus};

fn project(
    id: u32,
    name: &str,
    icon: &str,
    client: &str,
    budget: f64,
    status: ProjectStatus,
) -> Project {
    Project {
        id,
        name: name.to_string(),
        icon: icon.to_string(),
        client: client.to_string(),
        budget,
        status,
    }
}

static PROJECTS: Lazy<Vec<Project>> = Lazy::new(|| {
    vec![
        project(
            1,
            "E-commerce TechStore",
            "cart3",
            "Juan Domínguez",
            8500.0,
            ProjectStatus::InProgress,
        ),
        project(
            2,
            "App Gestión Inventario",
            "phone",
            "María González",
            12000.0,
            ProjectStatus::InProgress,
        ),
        project(
            3,
            "Landing Page Restaurante",
            "window",
            "Roberto Sánchez",
            2500.0,
            ProjectStatus::Completed,
        ),
        project(
            4,
            "Sistema de Reservas",
            "calendar-check",
            "Laura Fernández",
            6800.0,
            ProjectStatus::Pending,
        ),
    ]
});

pub fn demo_projects() -> &'static [Project] {
    &PROJECTS
}

pub fn find_project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
