pub mod generate_questions;
pub mod suggest_dishes;
