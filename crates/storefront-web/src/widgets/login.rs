use crate::api::auth::login;
use crate::credentials::CredentialVault;
use crate::dom::{self, BrowserStore};
use crate::feedback::{FeedbackPolicy, ERROR_AUTO_HIDE};
use crate::hooks::use_feedback;
use crate::messages;
use crate::models::LoginCredentials;
use crate::routes::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub login_url: AttrValue,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let remembered = (*use_memo((), |_| CredentialVault::new(BrowserStore).load())).clone();
    let remember_me = use_state(|| remembered.is_some());
    let remembered = remembered.unwrap_or_default();
    let username = use_state(move || remembered.username);
    let password = use_state(move || remembered.password);
    let feedback = use_feedback(FeedbackPolicy::retryable().auto_hide(ERROR_AUTO_HIDE));

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_remember = {
        let remember_me = remember_me.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            remember_me.set(input.checked());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let remember_me = remember_me.clone();
        let feedback = feedback.clone();
        let login_url = props.login_url.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if feedback.begin().is_none() {
                return;
            }

            let credentials = LoginCredentials {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            CredentialVault::new(BrowserStore).record(*remember_me, &credentials);

            let feedback = feedback.clone();
            let login_url = login_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match login(&login_url, &credentials).await {
                    Ok(()) => {
                        feedback.succeed(None);
                        dom::navigate_to(Route::Home);
                    }
                    Err(e) => {
                        if e.is_transport() {
                            log::error!("Login request failed: {}", e);
                        } else {
                            log::warn!("Login rejected: {}", e);
                        }
                        feedback.fail(messages::login_failure(&e));
                    }
                }
            });
        })
    };

    let state = feedback.snapshot();

    html! {
        <form id="login-form" class="form" onsubmit={on_submit}>
            <div class="input-box">
                <input
                    type="text"
                    name="username"
                    required={true}
                    value={(*username).clone()}
                    oninput={on_username}
                    placeholder="Email"
                />
            </div>
            <div class="input-box">
                <input
                    type="password"
                    name="password"
                    required={true}
                    value={(*password).clone()}
                    oninput={on_password}
                    placeholder="Password"
                />
            </div>
            <div class="remember-forgot">
                <label>
                    <input
                        type="checkbox"
                        id="remember-me"
                        checked={*remember_me}
                        onchange={on_remember}
                    />
                    {" Remember me"}
                </label>
            </div>
            <div id="login-error" class={classes!("login-error", state.notice().is_some().then_some("show"))}>
                { state.notice().map(|n| n.text.clone()).unwrap_or_default() }
            </div>
            <button type="submit" class="btn" disabled={!state.trigger_enabled()}>
                { if state.is_loading() { "Signing in..." } else { "Sign in" } }
            </button>
        </form>
    }
}
