//! Thin helpers over the page the islands live in.

use crate::config::{ConfigSource, PageConfig};
use crate::credentials::KeyValueStore;
use crate::routes::Route;
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use gloo_utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};
use yew_router::Routable;

const FAVORITES_ICON: &str = ".nav-right .favorites-btn ion-icon";

pub struct DocumentSource {
    document: Document,
}

impl ConfigSource for DocumentSource {
    fn value(&self, id: &str) -> Option<String> {
        let element = self.document.get_element_by_id(id)?;
        match element.dyn_ref::<HtmlInputElement>() {
            Some(input) => Some(input.value()),
            None => element.get_attribute("value"),
        }
    }
}

pub fn page_config() -> PageConfig<DocumentSource> {
    PageConfig::new(DocumentSource {
        document: document(),
    })
}

/// Raw string values in `localStorage`.
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            log::warn!("Failed to store {}: {:?}", key, e);
        }
    }

    fn delete(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

pub fn query_param(name: &str) -> Option<String> {
    let search = window().location().search().ok()?;
    web_sys::UrlSearchParams::new_with_str(&search)
        .ok()?
        .get(name)
        .filter(|value| !value.is_empty())
}

pub fn with_query(base: &str, name: &str, value: &str) -> String {
    match web_sys::UrlSearchParams::new() {
        Ok(params) => {
            params.append(name, value);
            let query: String = params.to_string().into();
            format!("{}?{}", base, query)
        }
        Err(e) => {
            log::error!("UrlSearchParams unavailable: {:?}", e);
            base.to_string()
        }
    }
}

pub fn navigate(url: &str) {
    log::info!("Navigating to {}", url);
    if let Err(e) = window().location().set_href(url) {
        log::error!("Navigation to {} failed: {:?}", url, e);
    }
}

pub fn navigate_to(route: Route) {
    navigate(&route.to_path());
}

pub fn reload() {
    if let Err(e) = window().location().reload() {
        log::error!("Reload failed: {:?}", e);
    }
}

pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::error!("Alert failed: {:?}", e);
    }
}

/// Pulses the heart in the navigation bar for a second.
pub fn pulse_favorites_icon() {
    let Some(icon) = document().query_selector(FAVORITES_ICON).ok().flatten() else {
        return;
    };
    let Ok(icon) = icon.dyn_into::<HtmlElement>() else {
        return;
    };

    let _ = icon.set_attribute("name", "heart");
    let style = icon.style();
    let _ = style.set_property("color", "#ff0000");
    let _ = style.set_property("transform", "scale(1.5)");
    let _ = style.set_property("transition", "transform 0.3s ease, color 0.3s ease");

    Timeout::new(1_000, move || {
        let _ = icon.set_attribute("name", "heart-outline");
        let style = icon.style();
        let _ = style.remove_property("color");
        let _ = style.set_property("transform", "scale(1)");
    })
    .forget();
}
