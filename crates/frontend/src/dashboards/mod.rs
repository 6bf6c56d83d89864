pub mod d400_dashboard;
pub mod d401_reports;

pub use d400_dashboard::ui::DashboardSection;
pub use d401_reports::ui::ReportsSection;
