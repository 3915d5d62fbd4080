//! Browser entry points wiring the desktop runtime to the page's host adapters.

use desktop_app_blog::BlogContent;
use desktop_runtime::{BlogWindowConfig, BlogWindowServices, MaterializeOutcome};
use leptos::logging;
use platform_host::{load_pref_with, AssetResolver, PaletteHost, PrefsStore, WindowRegistry};
use platform_host_web::{DomWindowRegistry, JsAssetResolver, JsPaletteHost, WebPrefsStore};

/// Prefs key holding an optional JSON override of the blog window settings.
pub const BLOG_WINDOW_CONFIG_KEY: &str = "blogWindowConfig";

const BLOG_CONTENT_JSON: &str = include_str!("../content/blog.json");

thread_local! {
    static BLOG_CONTENT: BlogContent = parse_blog_content(BLOG_CONTENT_JSON);
}

/// Parses the bundled content document; an unreadable document yields an empty blog.
pub fn parse_blog_content(raw: &str) -> BlogContent {
    BlogContent::from_json(raw).unwrap_or_else(|err| {
        logging::warn!("blog content unreadable: {err}");
        BlogContent::default()
    })
}

/// Reads the blog window settings, falling back to defaults on a missing or bad override.
pub fn load_blog_window_config(prefs: &dyn PrefsStore) -> BlogWindowConfig {
    match load_pref_with(prefs, BLOG_WINDOW_CONFIG_KEY) {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            logging::warn!("blog window config override ignored: {err}");
            BlogWindowConfig::default()
        }
    }
}

/// Opens or focuses the blog window against an arbitrary host.
pub fn open_blog_window_on<R: WindowRegistry>(
    registry: &R,
    prefs: &dyn PrefsStore,
    assets: &dyn AssetResolver,
    palette_host: &dyn PaletteHost,
) -> MaterializeOutcome {
    let config = load_blog_window_config(prefs);
    let services = BlogWindowServices {
        prefs,
        assets,
        palette_host,
    };
    BLOG_CONTENT.with(|content| {
        desktop_runtime::open_blog_window(registry, services, content, &config)
    })
}

/// Page-script entry point: opens the blog window or brings it to the front.
#[wasm_bindgen::prelude::wasm_bindgen(js_name = openBlogWindow)]
pub fn open_blog_window() {
    install_panic_hook();
    let _ = open_blog_window_on(
        &DomWindowRegistry,
        &WebPrefsStore,
        &JsAssetResolver,
        &JsPaletteHost,
    );
}

/// Routes Rust panics to the browser console.
pub fn install_panic_hook() {
    console_error_panic_hook::set_once();
}
