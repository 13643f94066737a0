//! Window Commands
//!
//! Alerts, navigation and document styling.

use crate::background;
use crate::theme::Theme;

/// Class on `<html>` that switches the stylesheet to light colors
const LIGHT_THEME_CLASS: &str = "light-theme";

fn document() -> Result<web_sys::Document, String> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "No document".to_string())
}

/// Blocking user-visible message
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Replace the current page
pub fn navigate(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    window.location().set_href(url).map_err(|e| format!("{:?}", e))
}

/// Open `url` in a new browsing context
pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
    window
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// `prefers-color-scheme: light` media query
pub fn prefers_light_scheme() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: light)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn apply_theme_class(theme: Theme) -> Result<(), String> {
    let root = document()?
        .document_element()
        .ok_or_else(|| "No root element".to_string())?;
    root.class_list()
        .toggle_with_force(LIGHT_THEME_CLASS, theme == Theme::Light)
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

pub fn apply_background(src: &str) -> Result<(), String> {
    let body = document()?.body().ok_or_else(|| "No body".to_string())?;
    body.style()
        .set_property("background-image", &background::css_value(src))
        .map_err(|e| format!("{:?}", e))
}
