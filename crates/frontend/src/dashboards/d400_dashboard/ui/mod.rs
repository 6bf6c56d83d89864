mod dashboard;

pub use dashboard::DashboardSection;
