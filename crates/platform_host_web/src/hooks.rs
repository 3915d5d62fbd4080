//! Asset-resolution and palette adapters backed by page-script hooks.

use leptos::logging;
use platform_host::{AssetResolver, PaletteHost, DEFAULT_PALETTE_NAME};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Asset resolver delegating to the page's `getImageUrl(name)`.
///
/// A missing hook, a thrown error, or an empty result all read as an unknown asset.
pub struct JsAssetResolver;

impl AssetResolver for JsAssetResolver {
    fn resolve_image_url(&self, name: &str) -> Option<String> {
        bridge::resolve_image_url(name).ok().flatten()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Palette host delegating to the page's `applyColorPalette("default")`.
pub struct JsPaletteHost;

impl PaletteHost for JsPaletteHost {
    fn apply_default_palette(&self) {
        if let Err(err) = bridge::apply_color_palette(DEFAULT_PALETTE_NAME) {
            logging::warn!("applyColorPalette failed: {err}");
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn non_wasm_hooks_are_inert() {
        assert_eq!(JsAssetResolver.resolve_image_url("cat.png"), None);
        JsPaletteHost.apply_default_palette();
    }
}
