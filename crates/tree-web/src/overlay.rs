use crate::dom;
use tree_core::{Scene, HELP_LINES};
use web_sys as web;

const HELP_ID: &str = "help-overlay";
const STATUS_ID: &str = "status";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HELP_ID) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HELP_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(HELP_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

pub fn fill_help(document: &web::Document) {
    dom::set_text(document, HELP_ID, &HELP_LINES.join("\n"));
}

/// One-line summary of theme, mode and photo count.
pub fn update_status(document: &web::Document, scene: &Scene) {
    let text = format!(
        "{} · {} · {} photos",
        scene.theme().name,
        scene.mode(),
        scene.photos().len()
    );
    dom::set_text(document, STATUS_ID, &text);
}
