//! Binary entrypoint for the browser-hosted `site` application.

#[cfg(target_arch = "wasm32")]
fn main() {
    site::install_panic_hook();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `site` for wasm32 and call `openBlogWindow()` from the page script."
    );
}
