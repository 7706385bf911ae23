pub mod alerts;
pub mod animations;
pub mod api_utils;
pub mod config;
pub mod confirm_delete;
pub mod dom_utils;
pub mod form_validation;
pub mod list_utils;
pub mod number_parse;
pub mod preferences;
pub mod table_utils;
