//! Blog content model as authored in the site's content document.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Top-level content document: `{ "blogPosts": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogContent {
    /// Posts in authored order.
    #[serde(default)]
    pub blog_posts: Vec<Post>,
}

impl BlogContent {
    /// Parses a content document.
    ///
    /// # Errors
    ///
    /// Returns an error when the document is not valid JSON or a post lacks a required field.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// One blog post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Post headline.
    pub title: String,
    /// Display date, shown as authored.
    pub date: String,
    /// Body markup, inserted without escaping.
    pub text: String,
    /// Attached images, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageField>,
}

/// The `image` field of a post: one reference or a list of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageField {
    /// A list of references, rendered in order.
    List(Vec<ImageRef>),
    /// A lone reference.
    Single(ImageRef),
}

/// One image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    /// Bare asset name with default sizing.
    Bare(String),
    /// Structured entry with optional sizing.
    Entry(ImageEntry),
    /// Anything else found in the content document (null, numbers, nested lists).
    Unrecognized(Value),
}

impl ImageRef {
    /// Shorthand for a structured entry with only a file name.
    pub fn entry(filename: &str) -> ImageEntry {
        ImageEntry {
            filename: Some(filename.to_string()),
            ..ImageEntry::default()
        }
    }
}

/// Structured image entry. `filename` is required for the entry to render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Asset name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Named size class (`small`, `medium`, `large`, or any custom suffix).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Explicit width; switches the image to custom sizing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Explicit height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
}

impl ImageEntry {
    /// Sets the named size class.
    pub fn size(mut self, size: &str) -> Self {
        self.size = Some(size.to_string());
        self
    }

    /// Sets an explicit width.
    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sets an explicit height.
    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = Some(height.into());
        self
    }
}

impl From<ImageEntry> for ImageRef {
    fn from(entry: ImageEntry) -> Self {
        Self::Entry(entry)
    }
}

impl From<&str> for ImageRef {
    fn from(name: &str) -> Self {
        Self::Bare(name.to_string())
    }
}

/// A width or height as authored: a pixel count or a CSS length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Pixel count.
    Pixels(Number),
    /// CSS length passed through unchanged (`"50%"`, `"12rem"`).
    Css(String),
}

impl Dimension {
    /// Renders the dimension as a CSS length.
    ///
    /// Whole pixel counts print without a fraction, however they were written (`200.0`, `2e2`).
    pub fn to_css(&self) -> String {
        match self {
            Self::Pixels(n) => {
                if let Some(px) = n.as_i64() {
                    format!("{px}px")
                } else if let Some(px) = n.as_u64() {
                    format!("{px}px")
                } else {
                    format!("{}px", n.as_f64().unwrap_or_default())
                }
            }
            Self::Css(s) => s.clone(),
        }
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Self::Pixels(Number::from(px))
    }
}

impl From<&str> for Dimension {
    fn from(css: &str) -> Self {
        Self::Css(css.to_string())
    }
}
