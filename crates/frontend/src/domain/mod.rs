pub mod a001_client;
pub mod a002_employee;
pub mod a003_project;
pub mod a004_invoice;
pub mod a005_movement;
