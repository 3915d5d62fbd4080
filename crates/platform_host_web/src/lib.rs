//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for prefs, the desktop window
//! registry, image asset resolution, and the default-palette hook. Off `wasm32` every adapter
//! compiles to an inert fallback so host-agnostic crates can still be tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;
pub mod hooks;
pub mod storage;
pub mod windows;

pub use hooks::{JsAssetResolver, JsPaletteHost};
pub use storage::local_prefs::WebPrefsStore;
pub use windows::{
    window_selector, DomWindowHandle, DomWindowRegistry, DESKTOP_SELECTOR, WINDOW_BODY_SELECTOR,
    WINDOW_TAG,
};
