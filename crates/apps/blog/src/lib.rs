//! Blog desktop app: post content model, image normalization, and post markup rendering.
//!
//! Rendering is a pure function of the content and an [`platform_host::AssetResolver`]; window
//! lifecycle and theming are owned by the desktop runtime.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod content;
pub mod images;
pub mod render;

pub use content::{BlogContent, Dimension, ImageEntry, ImageField, ImageRef, Post};
pub use images::{
    classify_images, normalize_images, resolve_image, ImageDropReason, ResolvedImage, SizeClass,
};
pub use render::{escape_attr, escape_text, render_post, render_posts, ImageElement};

/// Identity (window title) of the blog window.
pub const BLOG_WINDOW_IDENTITY: &str = "Blog.exe";
