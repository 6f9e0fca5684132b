pub mod entities;
pub mod mappers;
pub mod ports;
pub mod services;
pub mod value_objects;
