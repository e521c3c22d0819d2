use crate::api::auth::logout;
use crate::dom;
use crate::feedback::FeedbackPolicy;
use crate::hooks::use_feedback;
use crate::messages;
use crate::routes::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoutButtonProps {
    pub logout_url: AttrValue,
}

#[function_component(LogoutButton)]
pub fn logout_button(props: &LogoutButtonProps) -> Html {
    let feedback = use_feedback(FeedbackPolicy::retryable());

    let on_click = {
        let feedback = feedback.clone();
        let logout_url = props.logout_url.clone();

        Callback::from(move |e: MouseEvent| {
            e.prevent_default();

            if feedback.begin().is_none() {
                return;
            }

            let feedback = feedback.clone();
            let logout_url = logout_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match logout(&logout_url).await {
                    Ok(()) => {
                        feedback.succeed(None);
                        dom::navigate_to(Route::Home);
                    }
                    Err(e) if e.is_transport() => {
                        log::error!("Logout request failed: {}", e);
                        feedback.release();
                        dom::alert(messages::NETWORK_ERROR);
                    }
                    Err(e) => {
                        log::warn!("Logout rejected: {}", e);
                        feedback.release();
                        dom::alert(messages::LOGOUT_FAILED);
                    }
                }
            });
        })
    };

    html! {
        <button
            id="btn-exit"
            class="btn"
            onclick={on_click}
            disabled={!feedback.snapshot().trigger_enabled()}
        >
            {"Sign out"}
        </button>
    }
}
