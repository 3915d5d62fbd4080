//! Persisted colour-palette state and the host hook that applies the default palette.

use std::{cell::Cell, rc::Rc};

use crate::storage::prefs::PrefsStore;

/// Prefs key holding the name of the last applied palette.
pub const PALETTE_NAME_KEY: &str = "colorPalette";
/// Prefs key holding the JSON-encoded colour list of the last applied palette.
pub const PALETTE_COLORS_KEY: &str = "paletteColors";
/// Palette name marking the built-in default theme.
pub const DEFAULT_PALETTE_NAME: &str = "default";

/// Read-only snapshot of the persisted palette entries, taken at one point in time.
///
/// The colour list is kept raw; decoding it is the consumer's concern so a malformed value can
/// degrade to default styling instead of failing the read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteSnapshot {
    /// Saved palette name, if any.
    pub name: Option<String>,
    /// Saved colour list as stored (expected to be a JSON array of colour strings).
    pub colors_raw: Option<String>,
}

impl PaletteSnapshot {
    /// Creates a snapshot from explicit values.
    pub fn new(name: Option<&str>, colors_raw: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            colors_raw: colors_raw.map(str::to_string),
        }
    }

    /// Reads both palette entries from `store`.
    ///
    /// Store failures read as absent entries.
    pub fn load<S: PrefsStore + ?Sized>(store: &S) -> Self {
        Self {
            name: store.load_pref(PALETTE_NAME_KEY).ok().flatten(),
            colors_raw: store.load_pref(PALETTE_COLORS_KEY).ok().flatten(),
        }
    }

    /// Returns `true` when the saved palette name is missing, empty, or the default marker.
    pub fn is_default(&self) -> bool {
        match self.name.as_deref() {
            None | Some("") => true,
            Some(name) => name == DEFAULT_PALETTE_NAME,
        }
    }
}

/// Host routine that restyles the whole desktop with the default palette.
pub trait PaletteHost {
    /// Applies the default palette. Fire-and-forget.
    fn apply_default_palette(&self);
}

#[derive(Debug, Clone, Copy, Default)]
/// Palette host that does nothing.
pub struct NoopPaletteHost;

impl PaletteHost for NoopPaletteHost {
    fn apply_default_palette(&self) {}
}

#[derive(Debug, Clone, Default)]
/// Palette host that counts default-palette applications.
pub struct RecordingPaletteHost {
    applied: Rc<Cell<usize>>,
}

impl RecordingPaletteHost {
    /// Number of times the default palette was applied.
    pub fn default_applications(&self) -> usize {
        self.applied.get()
    }
}

impl PaletteHost for RecordingPaletteHost {
    fn apply_default_palette(&self) {
        self.applied.set(self.applied.get() + 1);
    }
}
