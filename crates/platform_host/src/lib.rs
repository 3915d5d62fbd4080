//! Typed host-domain contracts shared by the desktop runtime, apps, and browser adapters.
//!
//! This crate is the API-first boundary for platform services: preference storage, image asset
//! resolution, persisted palette state, and the desktop window registry. Concrete browser
//! adapters live in `platform_host_web`; the in-memory adapters here back headless tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod assets;
pub mod palette;
pub mod storage;
pub mod windows;

pub use assets::{AssetResolver, NoopAssetResolver, StaticAssetResolver};
pub use palette::{
    NoopPaletteHost, PaletteHost, PaletteSnapshot, RecordingPaletteHost, DEFAULT_PALETTE_NAME,
    PALETTE_COLORS_KEY, PALETTE_NAME_KEY,
};
pub use storage::prefs::{load_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore};
pub use windows::{
    BodyStyle, MemoryWindow, MemoryWindowId, MemoryWindowRegistry, RegistryError,
    WindowRegistry, WindowShell, WindowSnapshot, WindowVisibility,
};
