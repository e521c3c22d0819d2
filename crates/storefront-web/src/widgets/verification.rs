use crate::api::auth::{request_verification, verify_email};
use crate::components::{Loading, NoticeBanner};
use crate::dom;
use crate::feedback::{FeedbackPolicy, Notice};
use crate::hooks::use_feedback;
use crate::messages;
use crate::routes::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VerificationRequestProps {
    pub verify_url: AttrValue,
    pub email: AttrValue,
}

/// "Send me a verification email" on the profile page. Allowed once per
/// page load.
#[function_component(VerificationRequest)]
pub fn verification_request(props: &VerificationRequestProps) -> Html {
    let feedback = use_feedback(FeedbackPolicy::one_shot());

    let on_click = {
        let feedback = feedback.clone();
        let verify_url = props.verify_url.clone();
        let email = props.email.clone();

        Callback::from(move |e: MouseEvent| {
            e.prevent_default();

            if feedback.begin().is_none() {
                return;
            }

            let feedback = feedback.clone();
            let verify_url = verify_url.clone();
            let email = email.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match request_verification(&verify_url, &email).await {
                    Ok(()) => feedback.succeed(Some(Notice::success(messages::VERIFICATION_SENT))),
                    Err(e) if e.is_transport() => {
                        log::error!("Verification request failed: {}", e);
                        feedback.fail(messages::NETWORK_ERROR);
                    }
                    Err(e) => {
                        log::warn!("Verification request rejected: {}", e);
                        feedback.fail(messages::VERIFICATION_REQUEST_FAILED);
                    }
                }
            });
        })
    };

    let state = feedback.snapshot();

    html! {
        <div id="email-verification-form">
            <NoticeBanner notice={state.notice().cloned()} />
            if state.is_loading() {
                <Loading label="Sending..." />
            } else if state.trigger_enabled() {
                <button class="btnEmailVerify" onclick={on_click}>
                    {"Verify email"}
                </button>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VerifyEmailProps {
    pub verify_url: AttrValue,
}

/// Landing page of the verification link. Confirms the token as soon as it
/// mounts.
#[function_component(VerifyEmail)]
pub fn verify_email_page(props: &VerifyEmailProps) -> Html {
    let feedback = use_feedback(FeedbackPolicy::one_shot());
    let token_missing = use_state(|| false);

    {
        let feedback = feedback.clone();
        let token_missing = token_missing.clone();
        let verify_url = props.verify_url.clone();

        use_effect_with((), move |_| {
            match dom::query_param("token") {
                None => {
                    log::warn!("Verification link has no token");
                    token_missing.set(true);
                }
                Some(token) => {
                    if feedback.begin().is_some() {
                        wasm_bindgen_futures::spawn_local(async move {
                            match verify_email(&verify_url, &token).await {
                                Ok(()) => {
                                    feedback.succeed(None);
                                    dom::navigate_to(Route::Home);
                                }
                                Err(e) => {
                                    if e.is_transport() {
                                        log::error!("Email verification failed: {}", e);
                                    } else {
                                        log::warn!("Email verification rejected: {}", e);
                                    }
                                    feedback.fail(messages::VERIFICATION_FAILED);
                                }
                            }
                        });
                    }
                }
            }
            || ()
        });
    }

    let state = feedback.snapshot();

    html! {
        <div class="verification">
            if *token_missing {
                <div id="missing-token-alert" class="alert alert-warning">
                    {messages::VERIFICATION_TOKEN_MISSING}
                </div>
            }
            if state.is_loading() {
                <Loading label="Confirming your email..." />
            }
            if state.notice().is_some_and(|n| n.is_error()) {
                <NoticeBanner id="verification-error-alert" notice={state.notice().cloned()} />
            }
        </div>
    }
}
