pub mod db;
pub mod llm;
pub mod menu_store;
