pub mod form_field;
pub mod page_header;
pub mod row_actions;
pub mod stat_card;
