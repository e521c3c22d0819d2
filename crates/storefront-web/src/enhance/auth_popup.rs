use super::select_one;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

const POPUP_DELAY_MS: u32 = 400;

fn toggle(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let _ = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

/// Login/register popup on the landing page. Returns `false` unless every
/// part of the popup is present.
pub fn attach(document: &Document) -> bool {
    let (
        Some(wrapper),
        Some(block_content),
        Some(login_link),
        Some(register_link),
        Some(open_button),
        Some(close_icon),
    ) = (
        select_one(document, ".wrapper"),
        select_one(document, ".block-content"),
        select_one(document, ".login-link"),
        select_one(document, ".register-link"),
        select_one(document, ".login-btn"),
        select_one(document, ".icon-close"),
    )
    else {
        return false;
    };

    {
        let wrapper = wrapper.clone();
        EventListener::new(&register_link, "click", move |_| toggle(&wrapper, "active", true))
            .forget();
    }
    {
        let wrapper = wrapper.clone();
        EventListener::new(&login_link, "click", move |_| toggle(&wrapper, "active", false))
            .forget();
    }
    {
        let wrapper = wrapper.clone();
        let block_content = block_content.clone();
        EventListener::new(&open_button, "click", move |_| {
            toggle(&block_content, "hidden", true);
            let wrapper = wrapper.clone();
            Timeout::new(POPUP_DELAY_MS, move || toggle(&wrapper, "active-popup", true)).forget();
        })
        .forget();
    }
    EventListener::new(&close_icon, "click", move |_| {
        toggle(&wrapper, "active-popup", false);
        let block_content = block_content.clone();
        Timeout::new(POPUP_DELAY_MS, move || toggle(&block_content, "hidden", false)).forget();
    })
    .forget();

    true
}
