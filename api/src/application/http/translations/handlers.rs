pub mod count_translations;
pub mod get_translations;
pub mod search_translations;
