use desktop_app_blog::BLOG_WINDOW_IDENTITY;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_TOP: i32 = 50;
pub const DEFAULT_WINDOW_LEFT: i32 = 50;
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 550;
pub const DEFAULT_WINDOW_Z_ORDER: i64 = 1000;
pub const DEFAULT_BODY_BACKGROUND: &str = "#e0e0e0";
pub const DEFAULT_BODY_BORDER_COLOR: &str = "#808080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: DEFAULT_WINDOW_LEFT,
            y: DEFAULT_WINDOW_TOP,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Shell and fallback-theme settings for the blog window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogWindowConfig {
    /// Window identity, also shown as its title. Fixed to [`BLOG_WINDOW_IDENTITY`].
    #[serde(skip)]
    pub identity: String,
    /// Heading rendered above the posts.
    pub heading: String,
    pub rect: WindowRect,
    pub initial_z_order: i64,
    pub resizable: bool,
    /// Body background used when the saved palette has no fourth colour.
    pub fallback_background: String,
    /// Body border colour used when the saved palette has no second colour.
    pub fallback_border_color: String,
}

impl Default for BlogWindowConfig {
    fn default() -> Self {
        Self {
            identity: BLOG_WINDOW_IDENTITY.to_string(),
            heading: "My Blog".to_string(),
            rect: WindowRect::default(),
            initial_z_order: DEFAULT_WINDOW_Z_ORDER,
            resizable: true,
            fallback_background: DEFAULT_BODY_BACKGROUND.to_string(),
            fallback_border_color: DEFAULT_BODY_BORDER_COLOR.to_string(),
        }
    }
}

impl BlogWindowConfig {
    /// Parses a (possibly partial) JSON override; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
