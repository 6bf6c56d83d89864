mod reports;

pub use reports::ReportsSection;
