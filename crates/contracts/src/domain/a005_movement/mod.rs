pub mod aggregate;
pub mod filter;
pub mod fixtures;
pub mod form;
pub mod store;
