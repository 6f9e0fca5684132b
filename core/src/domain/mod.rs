pub mod common;
pub mod health;
pub mod knowledge_base;
pub mod query;
