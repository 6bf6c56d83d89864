pub mod charts;
pub mod clock;
pub mod components;
pub mod config;
pub mod entity_detail;
pub mod format;
pub mod icons;
pub mod modal_frame;
pub mod panel_switcher;
pub mod preferences;
pub mod theme;
pub mod timing;
pub mod toast;
