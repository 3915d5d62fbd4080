//! JS interop for page-level desktop hooks.
//!
//! The page script owns asset URLs (`getImageUrl`) and desktop-wide theming
//! (`applyColorPalette`). This module calls them when compiled for `wasm32` and degrades to
//! inert fallbacks elsewhere.

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(inline_js = r#"
export function jsResolveImageUrl(name) {
  const resolve = globalThis.getImageUrl;
  if (typeof resolve !== 'function') {
    return null;
  }
  const url = resolve(name);
  return typeof url === 'string' && url.length > 0 ? url : null;
}

export function jsApplyColorPalette(name) {
  const apply = globalThis.applyColorPalette;
  if (typeof apply === 'function') {
    apply(name);
  }
}
"#)]
    extern "C" {
        #[wasm_bindgen(catch, js_name = jsResolveImageUrl)]
        fn js_resolve_image_url(name: &str) -> Result<Option<String>, JsValue>;
        #[wasm_bindgen(catch, js_name = jsApplyColorPalette)]
        fn js_apply_color_palette(name: &str) -> Result<(), JsValue>;
    }

    pub fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }

    pub fn resolve_image_url(name: &str) -> Result<Option<String>, String> {
        js_resolve_image_url(name).map_err(js_error_to_string)
    }

    pub fn apply_color_palette(name: &str) -> Result<(), String> {
        js_apply_color_palette(name).map_err(js_error_to_string)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub fn resolve_image_url(_name: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    pub fn apply_color_palette(_name: &str) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use imp::js_error_to_string;

pub fn resolve_image_url(name: &str) -> Result<Option<String>, String> {
    imp::resolve_image_url(name)
}

pub fn apply_color_palette(name: &str) -> Result<(), String> {
    imp::apply_color_palette(name)
}
