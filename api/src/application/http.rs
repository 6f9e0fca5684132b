pub mod authors;
pub mod catalog;
pub mod health;
pub mod magazines;
pub mod query_extractor;
pub mod query_params;
pub mod server;
pub mod translations;
pub mod translators;
