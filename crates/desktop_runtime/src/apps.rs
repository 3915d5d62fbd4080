//! App window materialization: idempotent open-or-focus for the blog window.

use desktop_app_blog::{escape_attr, escape_text, render_posts, BlogContent};
use leptos::logging;
use platform_host::{
    AssetResolver, PaletteHost, PaletteSnapshot, PrefsStore, RegistryError, WindowRegistry,
    WindowShell,
};

use crate::{
    model::BlogWindowConfig,
    theme::{reconcile_theme, ThemeOutcome},
    window_manager::bring_to_front,
};

/// Host services the blog window reads from while opening.
#[derive(Clone, Copy)]
pub struct BlogWindowServices<'a> {
    /// Persisted preferences holding the current palette.
    pub prefs: &'a dyn PrefsStore,
    /// Image asset lookup.
    pub assets: &'a dyn AssetResolver,
    /// Desktop-wide default palette routine.
    pub palette_host: &'a dyn PaletteHost,
}

/// Result of [`open_blog_window`].
#[derive(Debug)]
pub enum MaterializeOutcome {
    /// The window did not exist and was inserted into the desktop.
    Created { z_order: i64, theme: ThemeOutcome },
    /// The window already existed and was shown and raised.
    Focused { z_order: i64, theme: ThemeOutcome },
    /// No window exists and none could be created.
    Unavailable(RegistryError),
}

impl MaterializeOutcome {
    /// Stacking order assigned to the window, if one was materialized.
    pub fn z_order(&self) -> Option<i64> {
        match self {
            Self::Created { z_order, .. } | Self::Focused { z_order, .. } => Some(*z_order),
            Self::Unavailable(_) => None,
        }
    }
}

/// Builds the full window markup around the rendered posts.
pub fn blog_window_shell(
    content: &BlogContent,
    assets: &dyn AssetResolver,
    config: &BlogWindowConfig,
) -> WindowShell {
    let rect = config.rect;
    let posts = render_posts(&content.blog_posts, assets);
    let resizable = if config.resizable { " resizable" } else { "" };
    let markup = format!(
        "<win98-window title=\"{title}\"{resizable} style=\"top: {top}px; left: {left}px; \
         width: {width}px; height: {height}px; z-index: {z};\">\
         <div class=\"window-body\" style=\"padding: 12px 12px 2px 12px; overflow-y: auto; \
         height: calc(100% - 54px); box-sizing: border-box; border: 2px solid {border};\">\
         <h2 style=\"margin-top: 0; margin-bottom: 20px; font-weight: bold; font-size: 1.5em;\">\
         {heading}</h2><div style=\"max-width: 100%;\">{posts}</div></div></win98-window>",
        title = escape_attr(&config.identity),
        top = rect.y,
        left = rect.x,
        width = rect.w,
        height = rect.h,
        z = config.initial_z_order,
        border = escape_attr(&config.fallback_border_color),
        heading = escape_text(&config.heading),
    );
    WindowShell {
        identity: config.identity.clone(),
        initial_z_order: config.initial_z_order,
        markup,
    }
}

/// Opens the blog window, or focuses it when it is already on the desktop.
///
/// Content is rendered only when the window is first created; an existing window keeps its
/// markup and scroll position. Either way the saved palette is reconciled and the window is
/// shown above every other visible window. Without a desktop container nothing happens.
pub fn open_blog_window<R: WindowRegistry>(
    registry: &R,
    services: BlogWindowServices<'_>,
    content: &BlogContent,
    config: &BlogWindowConfig,
) -> MaterializeOutcome {
    let (handle, created) = match registry.find_by_identity(&config.identity) {
        Some(handle) => (handle, false),
        None => {
            let shell = blog_window_shell(content, services.assets, config);
            match registry.create(&shell) {
                Ok(handle) => (handle, true),
                Err(err) => {
                    logging::warn!("{} not opened: {err}", config.identity);
                    return MaterializeOutcome::Unavailable(err);
                }
            }
        }
    };

    let palette = PaletteSnapshot::load(services.prefs);
    let theme = reconcile_theme(registry, &handle, &palette, services.palette_host, config);
    let z_order = bring_to_front(registry, &handle);

    if created {
        MaterializeOutcome::Created { z_order, theme }
    } else {
        MaterializeOutcome::Focused { z_order, theme }
    }
}
