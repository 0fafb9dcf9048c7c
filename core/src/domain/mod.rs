pub mod assistant;
pub mod common;
pub mod menu;
