//! DOM-backed window registry for the `win98-desktop` page shell.
//!
//! Windows are `win98-window` custom elements addressed by their `title` attribute. Visibility
//! maps to inline `display`, stacking to inline `z-index`.

use platform_host::{BodyStyle, RegistryError, WindowRegistry, WindowShell, WindowSnapshot};

#[cfg(target_arch = "wasm32")]
use platform_host::WindowVisibility;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Desktop container selector used by the page shell.
pub const DESKTOP_SELECTOR: &str = "win98-desktop";
/// Tag name of window elements.
pub const WINDOW_TAG: &str = "win98-window";
/// Selector of a window's scrollable body element.
pub const WINDOW_BODY_SELECTOR: &str = ".window-body";

#[derive(Debug, Clone)]
/// Handle to a window element in the live document.
pub struct DomWindowHandle {
    #[cfg(target_arch = "wasm32")]
    element: web_sys::HtmlElement,
}

#[derive(Debug, Clone, Copy, Default)]
/// Window registry over the page document.
///
/// Off `wasm32` there is no document: lookups find nothing and creation reports a missing
/// desktop.
pub struct DomWindowRegistry;

/// Selector matching the window whose title is `identity`.
pub fn window_selector(identity: &str) -> String {
    let mut escaped = String::with_capacity(identity.len());
    for ch in identity.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    format!("{WINDOW_TAG}[title=\"{escaped}\"]")
}

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

#[cfg(target_arch = "wasm32")]
fn set_style(element: &web_sys::HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

impl WindowRegistry for DomWindowRegistry {
    type Handle = DomWindowHandle;

    fn find_by_identity(&self, identity: &str) -> Option<Self::Handle> {
        #[cfg(target_arch = "wasm32")]
        {
            let element = document()?
                .query_selector(&window_selector(identity))
                .ok()
                .flatten()?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            Some(DomWindowHandle { element })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = identity;
            None
        }
    }

    fn create(&self, shell: &WindowShell) -> Result<Self::Handle, RegistryError> {
        #[cfg(target_arch = "wasm32")]
        {
            let desktop = document()
                .and_then(|doc| doc.query_selector(DESKTOP_SELECTOR).ok().flatten())
                .ok_or(RegistryError::DesktopUnavailable)?;
            desktop
                .insert_adjacent_html("beforeend", &shell.markup)
                .map_err(|err| RegistryError::Host(crate::bridge::js_error_to_string(err)))?;
            self.find_by_identity(&shell.identity).ok_or_else(|| {
                RegistryError::Host(format!("inserted window `{}` not found", shell.identity))
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = shell;
            Err(RegistryError::DesktopUnavailable)
        }
    }

    fn list_all(&self) -> Vec<WindowSnapshot> {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(nodes) = document().and_then(|doc| doc.query_selector_all(WINDOW_TAG).ok())
            else {
                return Vec::new();
            };
            (0..nodes.length())
                .filter_map(|index| nodes.get(index))
                .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|element| {
                    let style = element.style();
                    let display = style.get_property_value("display").unwrap_or_default();
                    let z_order = style
                        .get_property_value("z-index")
                        .ok()
                        .filter(|z| !z.is_empty());
                    WindowSnapshot {
                        identity: element.get_attribute("title").unwrap_or_default(),
                        visibility: if display == "none" {
                            WindowVisibility::Hidden
                        } else {
                            WindowVisibility::Visible
                        },
                        z_order,
                    }
                })
                .collect()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Vec::new()
        }
    }

    fn set_visible(&self, handle: &Self::Handle, visible: bool) {
        #[cfg(target_arch = "wasm32")]
        {
            set_style(
                &handle.element,
                "display",
                if visible { "block" } else { "none" },
            );
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (handle, visible);
        }
    }

    fn set_z_order(&self, handle: &Self::Handle, z_order: i64) {
        #[cfg(target_arch = "wasm32")]
        {
            set_style(&handle.element, "z-index", &z_order.to_string());
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (handle, z_order);
        }
    }

    fn set_override_style(&self, handle: &Self::Handle, style: &BodyStyle) {
        #[cfg(target_arch = "wasm32")]
        {
            let body = handle
                .element
                .query_selector(WINDOW_BODY_SELECTOR)
                .ok()
                .flatten()
                .and_then(|body| body.dyn_into::<web_sys::HtmlElement>().ok());
            if let Some(body) = body {
                set_style(&body, "background-color", &style.background);
                set_style(&body, "border", &style.border);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (handle, style);
        }
    }
}
