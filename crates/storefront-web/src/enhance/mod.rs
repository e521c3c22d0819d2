//! Behaviour attached to markup the server already rendered.
//!
//! Listeners live as long as the page, so each one is forgotten after it is
//! attached.

pub mod auth_popup;
pub mod favorites;
pub mod search;
pub mod tabs;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub(crate) fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn select_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}
