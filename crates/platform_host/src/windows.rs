//! Desktop window registry contracts and the in-memory adapter used by headless tests.
//!
//! The registry is the only surface through which app code touches window elements: lookup by
//! identity, insertion into the desktop container, enumeration for stacking, and the few style
//! properties apps are allowed to mutate.

use std::{cell::RefCell, rc::Rc};

use thiserror::Error;

/// Visibility of a window element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowVisibility {
    /// Not displayed.
    Hidden,
    /// Displayed.
    #[default]
    Visible,
}

/// Markup and metadata for a window about to be inserted into the desktop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowShell {
    /// Identity (title attribute) used for later lookups.
    pub identity: String,
    /// Stacking order the window carries when first inserted.
    pub initial_z_order: i64,
    /// Full window markup, inserted verbatim at the end of the desktop container.
    pub markup: String,
}

/// Point-in-time view of one window element, as returned by [`WindowRegistry::list_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSnapshot {
    /// Window identity.
    pub identity: String,
    /// Current visibility.
    pub visibility: WindowVisibility,
    /// Raw stacking-order value as stored on the element, if any.
    pub z_order: Option<String>,
}

/// Explicit colour override for a window body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyStyle {
    /// CSS background colour.
    pub background: String,
    /// CSS border shorthand.
    pub border: String,
}

/// Failures reported by a [`WindowRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The desktop container element does not exist.
    #[error("desktop container unavailable")]
    DesktopUnavailable,
    /// The host rejected the operation.
    #[error("window host error: {0}")]
    Host(String),
}

/// Host service owning the desktop container and its window elements.
pub trait WindowRegistry {
    /// Handle addressing one window element.
    type Handle: Clone;

    /// Finds the window whose identity equals `identity`.
    fn find_by_identity(&self, identity: &str) -> Option<Self::Handle>;

    /// Inserts `shell` as the last child of the desktop container and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DesktopUnavailable`] when there is no desktop container, or
    /// [`RegistryError::Host`] when insertion fails.
    fn create(&self, shell: &WindowShell) -> Result<Self::Handle, RegistryError>;

    /// Lists every window element in document order.
    fn list_all(&self) -> Vec<WindowSnapshot>;

    /// Shows or hides a window.
    fn set_visible(&self, handle: &Self::Handle, visible: bool);

    /// Assigns a window's stacking order.
    fn set_z_order(&self, handle: &Self::Handle, z_order: i64);

    /// Overrides the colours of a window's body element.
    fn set_override_style(&self, handle: &Self::Handle, style: &BodyStyle);
}

/// Handle into a [`MemoryWindowRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemoryWindowId(pub usize);

/// One window held by [`MemoryWindowRegistry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryWindow {
    /// Window identity.
    pub identity: String,
    /// Current visibility.
    pub visibility: WindowVisibility,
    /// Raw stacking-order value.
    pub z_order: Option<String>,
    /// Markup the window was created with; empty for seeded windows.
    pub markup: String,
    /// Body colour override, if one was applied.
    pub body_style: Option<BodyStyle>,
    /// Scroll offset of the window body; never touched by the registry itself.
    pub scroll_top: i32,
}

#[derive(Debug, Default)]
struct MemoryDesktop {
    missing: bool,
    windows: Vec<MemoryWindow>,
    create_calls: usize,
}

#[derive(Debug, Clone, Default)]
/// In-memory window registry with a desktop container present by default.
pub struct MemoryWindowRegistry {
    inner: Rc<RefCell<MemoryDesktop>>,
}

impl MemoryWindowRegistry {
    /// Creates a registry whose desktop container does not exist.
    pub fn without_desktop() -> Self {
        let registry = Self::default();
        registry.inner.borrow_mut().missing = true;
        registry
    }

    /// Seeds a window that some other app already owns.
    pub fn seed_window(
        &self,
        identity: &str,
        visibility: WindowVisibility,
        z_order: Option<&str>,
    ) -> MemoryWindowId {
        let mut desktop = self.inner.borrow_mut();
        desktop.windows.push(MemoryWindow {
            identity: identity.to_string(),
            visibility,
            z_order: z_order.map(str::to_string),
            markup: String::new(),
            body_style: None,
            scroll_top: 0,
        });
        MemoryWindowId(desktop.windows.len() - 1)
    }

    /// Returns a copy of every window in insertion order.
    pub fn windows(&self) -> Vec<MemoryWindow> {
        self.inner.borrow().windows.clone()
    }

    /// Returns a copy of one window.
    pub fn window(&self, id: MemoryWindowId) -> Option<MemoryWindow> {
        self.inner.borrow().windows.get(id.0).cloned()
    }

    /// Number of windows carrying `identity`.
    pub fn count_identity(&self, identity: &str) -> usize {
        self.inner
            .borrow()
            .windows
            .iter()
            .filter(|w| w.identity == identity)
            .count()
    }

    /// Number of successful [`WindowRegistry::create`] calls.
    pub fn create_calls(&self) -> usize {
        self.inner.borrow().create_calls
    }

    /// Simulates the user scrolling a window body.
    pub fn scroll_to(&self, id: MemoryWindowId, scroll_top: i32) {
        if let Some(window) = self.inner.borrow_mut().windows.get_mut(id.0) {
            window.scroll_top = scroll_top;
        }
    }
}

impl WindowRegistry for MemoryWindowRegistry {
    type Handle = MemoryWindowId;

    fn find_by_identity(&self, identity: &str) -> Option<Self::Handle> {
        self.inner
            .borrow()
            .windows
            .iter()
            .position(|w| w.identity == identity)
            .map(MemoryWindowId)
    }

    fn create(&self, shell: &WindowShell) -> Result<Self::Handle, RegistryError> {
        let mut desktop = self.inner.borrow_mut();
        if desktop.missing {
            return Err(RegistryError::DesktopUnavailable);
        }
        desktop.create_calls += 1;
        desktop.windows.push(MemoryWindow {
            identity: shell.identity.clone(),
            visibility: WindowVisibility::Visible,
            z_order: Some(shell.initial_z_order.to_string()),
            markup: shell.markup.clone(),
            body_style: None,
            scroll_top: 0,
        });
        Ok(MemoryWindowId(desktop.windows.len() - 1))
    }

    fn list_all(&self) -> Vec<WindowSnapshot> {
        self.inner
            .borrow()
            .windows
            .iter()
            .map(|w| WindowSnapshot {
                identity: w.identity.clone(),
                visibility: w.visibility,
                z_order: w.z_order.clone(),
            })
            .collect()
    }

    fn set_visible(&self, handle: &Self::Handle, visible: bool) {
        if let Some(window) = self.inner.borrow_mut().windows.get_mut(handle.0) {
            window.visibility = if visible {
                WindowVisibility::Visible
            } else {
                WindowVisibility::Hidden
            };
        }
    }

    fn set_z_order(&self, handle: &Self::Handle, z_order: i64) {
        if let Some(window) = self.inner.borrow_mut().windows.get_mut(handle.0) {
            window.z_order = Some(z_order.to_string());
        }
    }

    fn set_override_style(&self, handle: &Self::Handle, style: &BodyStyle) {
        if let Some(window) = self.inner.borrow_mut().windows.get_mut(handle.0) {
            window.body_style = Some(style.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn shell(identity: &str) -> WindowShell {
        WindowShell {
            identity: identity.to_string(),
            initial_z_order: 1000,
            markup: format!("<win98-window title=\"{identity}\"></win98-window>"),
        }
    }

    #[test]
    fn create_appends_and_find_locates_by_identity() {
        let registry = MemoryWindowRegistry::default();
        registry.seed_window("Notepad.exe", WindowVisibility::Visible, Some("3"));

        let handle = registry.create(&shell("Blog.exe")).expect("create");

        assert_eq!(handle, MemoryWindowId(1));
        assert_eq!(registry.find_by_identity("Blog.exe"), Some(handle));
        assert_eq!(registry.find_by_identity("Paint.exe"), None);
        assert_eq!(registry.create_calls(), 1);
        assert_eq!(
            registry.list_all().last().map(|w| w.z_order.clone()),
            Some(Some("1000".to_string()))
        );
    }

    #[test]
    fn create_without_desktop_fails_and_leaves_no_window() {
        let registry = MemoryWindowRegistry::without_desktop();
        assert_eq!(
            registry.create(&shell("Blog.exe")),
            Err(RegistryError::DesktopUnavailable)
        );
        assert!(registry.windows().is_empty());
        assert_eq!(registry.create_calls(), 0);
    }

    #[test]
    fn mutators_update_visibility_stack_and_style() {
        let registry = MemoryWindowRegistry::default();
        let id = registry.seed_window("Blog.exe", WindowVisibility::Hidden, None);

        registry.set_visible(&id, true);
        registry.set_z_order(&id, 13);
        registry.set_override_style(
            &id,
            &BodyStyle {
                background: "c3".to_string(),
                border: "2px solid c1".to_string(),
            },
        );

        let window = registry.window(id).expect("window");
        assert_eq!(window.visibility, WindowVisibility::Visible);
        assert_eq!(window.z_order.as_deref(), Some("13"));
        assert_eq!(
            window.body_style.map(|s| s.background),
            Some("c3".to_string())
        );
    }
}
