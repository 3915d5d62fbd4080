pub mod apps;
pub mod model;
pub mod theme;
pub mod window_manager;

pub use apps::{blog_window_shell, open_blog_window, BlogWindowServices, MaterializeOutcome};
pub use model::*;
pub use theme::{palette_body_style, reconcile_theme, ThemeError, ThemeOutcome};
pub use window_manager::{bring_to_front, next_z_order, parse_z_order};
