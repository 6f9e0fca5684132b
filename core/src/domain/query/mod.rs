pub mod compiler;
pub mod filters;
pub mod grouper;
pub mod rows;
pub mod sparql;
pub mod templates;
pub mod terms;
