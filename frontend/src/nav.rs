//! Navigation collaborator: fire-and-forget redirects via the browser
//! location. The editor core never owns routing beyond this seam.

pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

/// Full reload, the only recovery path offered by the error panels.
pub fn reload() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

/// Current path, used once at startup to pick the page to mount.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
