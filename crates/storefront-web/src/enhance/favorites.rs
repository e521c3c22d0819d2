use super::select_all;
use crate::api::favorites::remove_favorite;
use crate::dom;
use crate::feedback::{Feedback, FeedbackPolicy};
use crate::messages;
use crate::utils::validation::validate_favorite_id;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element};

fn set_disabled(button: &Element, disabled: bool) {
    let _ = if disabled {
        button.set_attribute("disabled", "")
    } else {
        button.remove_attribute("disabled")
    };
}

/// Delete buttons on the favorites page, one latch per button.
pub fn attach(document: &Document, delete_url: String) -> usize {
    let buttons = select_all(document, ".btn-delete");

    for button in &buttons {
        let feedback = Rc::new(RefCell::new(Feedback::new(FeedbackPolicy::retryable())));
        let delete_url = delete_url.clone();
        let target = button.clone();

        EventListener::new(button, "click", move |_| {
            let favorite_id = match validate_favorite_id(target.get_attribute("data-favorite-id")) {
                Ok(id) => id,
                Err(message) => {
                    dom::alert(message);
                    return;
                }
            };

            if feedback.borrow_mut().begin().is_err() {
                return;
            }
            set_disabled(&target, true);

            let feedback = feedback.clone();
            let delete_url = delete_url.clone();
            let target = target.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match remove_favorite(&delete_url, &favorite_id).await {
                    Ok(()) => {
                        feedback.borrow_mut().succeed(None);
                        dom::reload();
                    }
                    Err(e) => {
                        let message = if e.is_transport() {
                            log::error!("Removing favorite {} failed: {}", favorite_id, e);
                            messages::FAVORITE_REMOVE_ERROR.to_string()
                        } else {
                            log::warn!("Removing favorite {} rejected: {}", favorite_id, e);
                            messages::detail_or(&e, messages::FAVORITE_REMOVE_FAILED)
                        };
                        feedback.borrow_mut().release();
                        set_disabled(&target, false);
                        dom::alert(&message);
                    }
                }
            });
        })
        .forget();
    }

    buttons.len()
}
