pub mod get_menu_view;
pub mod get_menu_views;
