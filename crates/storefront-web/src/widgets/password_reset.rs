use crate::api::auth::{request_password_reset, reset_password};
use crate::components::{FormField, Loading, NoticeBanner};
use crate::dom;
use crate::feedback::{FeedbackPolicy, Notice};
use crate::hooks::use_feedback;
use crate::messages;
use crate::routes::Route;
use crate::utils::validation::required;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PasswordResetRequestProps {
    pub reset_url: AttrValue,
    /// Set on the profile page, where the address is already known. The
    /// "forgot password" page leaves it empty and asks for it.
    #[prop_or_default]
    pub email: Option<AttrValue>,
    #[prop_or(true)]
    pub with_loading: bool,
}

#[function_component(PasswordResetRequest)]
pub fn password_reset_request(props: &PasswordResetRequestProps) -> Html {
    let typed_email = use_state(String::new);
    let feedback = use_feedback(FeedbackPolicy::one_shot());

    let on_email = {
        let typed_email = typed_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            typed_email.set(input.value());
        })
    };

    let on_click = {
        let typed_email = typed_email.clone();
        let feedback = feedback.clone();
        let reset_url = props.reset_url.clone();
        let fixed_email = props.email.clone();

        Callback::from(move |e: MouseEvent| {
            e.prevent_default();

            if feedback.begin().is_none() {
                return;
            }

            let email = match &fixed_email {
                Some(email) => email.to_string(),
                None => required(&typed_email).unwrap_or_default(),
            };

            let feedback = feedback.clone();
            let reset_url = reset_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match request_password_reset(&reset_url, &email).await {
                    Ok(()) => feedback.succeed(Some(Notice::success(messages::RESET_SENT))),
                    Err(e) if e.is_transport() => {
                        log::error!("Password reset request failed: {}", e);
                        feedback.fail(messages::NETWORK_ERROR);
                    }
                    Err(e) => {
                        log::warn!("Password reset request rejected: {}", e);
                        feedback.fail(messages::RESET_REQUEST_FAILED);
                    }
                }
            });
        })
    };

    let state = feedback.snapshot();
    let button_label = if state.is_completed() {
        messages::RESET_CHECK_EMAIL
    } else {
        "Reset password"
    };

    html! {
        <div class="password-reset-request">
            if props.email.is_none() {
                <FormField label="Email" input_id="recovery-email">
                    <input
                        type="email"
                        id="recovery-email"
                        value={(*typed_email).clone()}
                        oninput={on_email}
                        disabled={state.is_completed()}
                    />
                </FormField>
            }

            <NoticeBanner notice={state.notice().cloned()} />

            if state.is_loading() && props.with_loading {
                <Loading label="Sending..." />
            } else {
                <button
                    id="btn-recovery-email"
                    class="btn"
                    onclick={on_click}
                    disabled={!state.trigger_enabled()}
                >
                    {button_label}
                </button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResetPasswordFormProps {
    pub reset_url: AttrValue,
}

/// Sets a new password from the emailed link.
#[function_component(ResetPasswordForm)]
pub fn reset_password_form(props: &ResetPasswordFormProps) -> Html {
    let new_password = use_state(String::new);
    let feedback = use_feedback(FeedbackPolicy::retryable());

    let on_password = {
        let new_password = new_password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            new_password.set(input.value());
        })
    };

    let on_click = {
        let new_password = new_password.clone();
        let feedback = feedback.clone();
        let reset_url = props.reset_url.clone();

        Callback::from(move |e: MouseEvent| {
            e.prevent_default();

            let Some(token) = dom::query_param("token") else {
                dom::alert(messages::RESET_TOKEN_MISSING);
                return;
            };

            if feedback.begin().is_none() {
                return;
            }

            let password = required(&new_password).unwrap_or_default();
            let feedback = feedback.clone();
            let reset_url = reset_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match reset_password(&reset_url, &token, &password).await {
                    Ok(()) => {
                        feedback.succeed(None);
                        dom::navigate_to(Route::Home);
                    }
                    Err(e) => {
                        if e.is_transport() {
                            log::error!("Password reset failed: {}", e);
                        } else {
                            log::warn!("Password reset rejected: {}", e);
                        }
                        feedback.release();
                        dom::alert(&messages::detail_or(&e, messages::RESET_FAILED));
                    }
                }
            });
        })
    };

    let state = feedback.snapshot();

    html! {
        <form class="form">
            <FormField label="New password" input_id="password-new">
                <input
                    type="password"
                    id="password-new"
                    value={(*new_password).clone()}
                    oninput={on_password}
                />
            </FormField>
            if state.is_loading() {
                <Loading label="Saving..." />
            } else {
                <button id="change-password" class="btn" onclick={on_click}>
                    {"Change password"}
                </button>
            }
        </form>
    }
}
