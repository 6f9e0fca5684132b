pub mod get_languages;
pub mod get_magazines;
pub mod get_vocabulary;
pub mod get_years;
