//! Persistent storage contracts.

pub mod prefs;
