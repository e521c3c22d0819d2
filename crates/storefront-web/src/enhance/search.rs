use super::select_one;
use crate::dom;
use crate::utils::format::normalize_query;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, KeyboardEvent};

const SEARCH_INPUT: &str = "search-input";

fn submit(input: &HtmlInputElement, search_url: &str) {
    let value = input.value();
    if let Some(query) = normalize_query(&value) {
        dom::navigate(&dom::with_query(search_url, "query", query));
    }
}

pub fn attach(document: &Document, search_url: String) -> bool {
    let Some(input) = document
        .get_element_by_id(SEARCH_INPUT)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        log::debug!("No search input on this page");
        return false;
    };

    if let Some(icon) = select_one(document, ".search-btn ion-icon") {
        let input = input.clone();
        let search_url = search_url.clone();
        EventListener::new(&icon, "click", move |_| submit(&input, &search_url)).forget();
    }

    let target = input.clone();
    EventListener::new(&target, "keydown", move |event| {
        let is_enter = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Enter");
        if is_enter {
            submit(&input, &search_url);
        }
    })
    .forget();

    true
}
