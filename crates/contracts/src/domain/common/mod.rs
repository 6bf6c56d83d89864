//! Types shared by every entity kind

pub mod entity_kind;
pub mod record;

// Re-exports
pub use entity_kind::{EntityKind, KindParseError};
pub use record::EntityRecord;
