use crate::api::auth::{register, request_verification};
use crate::components::{FormField, Loading, NoticeBanner};
use crate::dom;
use crate::feedback::FeedbackPolicy;
use crate::hooks::use_feedback;
use crate::messages;
use crate::models::RegisterRequest;
use crate::routes::Route;
use crate::utils::validation::required;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    pub register_url: AttrValue,
    pub verify_url: AttrValue,
}

#[derive(Default, Clone, PartialEq)]
struct RegistrationData {
    first_name: String,
    email: String,
    password: String,
}

#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let form_data = use_state(RegistrationData::default);
    let feedback = use_feedback(FeedbackPolicy::retryable());

    let on_field = |apply: fn(&mut RegistrationData, String)| {
        let form_data = form_data.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut data = (*form_data).clone();
            apply(&mut data, input.value());
            form_data.set(data);
        })
    };
    let on_first_name = on_field(|data, value| data.first_name = value);
    let on_email = on_field(|data, value| data.email = value);
    let on_password = on_field(|data, value| data.password = value);

    let on_register = {
        let form_data = form_data.clone();
        let feedback = feedback.clone();
        let register_url = props.register_url.clone();
        let verify_url = props.verify_url.clone();

        Callback::from(move |e: MouseEvent| {
            e.prevent_default();

            if feedback.begin().is_none() {
                return;
            }

            let data = (*form_data).clone();
            let request = RegisterRequest {
                email: required(&data.email).unwrap_or_default(),
                password: required(&data.password).unwrap_or_default(),
                first_name: required(&data.first_name).unwrap_or_default(),
            };

            let feedback = feedback.clone();
            let register_url = register_url.clone();
            let verify_url = verify_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match register(&register_url, &request).await {
                    Ok(()) => {
                        if let Err(e) = request_verification(&verify_url, &request.email).await {
                            log::warn!("Verification email request failed: {}", e);
                        }
                        feedback.succeed(None);
                        dom::alert(messages::REGISTRATION_EMAIL_SENT);
                        dom::navigate_to(Route::Home);
                    }
                    Err(e) if e.is_transport() => {
                        log::error!("Registration request failed: {}", e);
                        feedback.release();
                        dom::alert(messages::GENERIC_RETRY);
                    }
                    Err(e) => {
                        log::warn!("Registration rejected: {}", e);
                        feedback.fail(messages::REGISTRATION_FAILED);
                    }
                }
            });
        })
    };

    let state = feedback.snapshot();

    html! {
        <form class="form">
            <FormField label="Name" input_id="register-first-name">
                <input
                    type="text"
                    id="register-first-name"
                    value={form_data.first_name.clone()}
                    oninput={on_first_name}
                />
            </FormField>
            <FormField label="Email" input_id="register-email">
                <input
                    type="email"
                    id="register-email"
                    value={form_data.email.clone()}
                    oninput={on_email}
                />
            </FormField>
            <FormField label="Password" input_id="register-password">
                <input
                    type="password"
                    id="register-password"
                    value={form_data.password.clone()}
                    oninput={on_password}
                />
            </FormField>

            <NoticeBanner id="register-request-error" notice={state.notice().cloned()} />

            if state.is_loading() {
                <Loading label="Creating your account..." />
            } else {
                <button
                    id="btn-register"
                    class="btn"
                    onclick={on_register}
                    disabled={!state.trigger_enabled()}
                >
                    {"Register"}
                </button>
            }
        </form>
    }
}
