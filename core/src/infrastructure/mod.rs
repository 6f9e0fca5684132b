pub mod sparql;
