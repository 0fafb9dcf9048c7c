pub mod category;
pub mod menu_view;
pub mod variant;

pub use category::*;
pub use menu_view::*;
pub use variant::*;
