pub mod get_translator;
pub mod get_translators;
pub mod search_translators;
