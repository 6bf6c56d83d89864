pub mod details;
pub mod editor;
pub mod form;
pub mod list;
pub mod service;
pub mod view_model;
