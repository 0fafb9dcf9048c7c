pub mod builder;
pub mod entities;
pub mod ports;
pub mod resolver;
pub mod services;
pub mod value_objects;
