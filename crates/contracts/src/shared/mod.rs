pub mod charts;
pub mod notification;
pub mod preferences;
