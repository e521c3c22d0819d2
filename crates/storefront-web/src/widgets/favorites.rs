use crate::api::favorites::add_favorite;
use crate::dom;
use crate::feedback::FeedbackPolicy;
use crate::hooks::use_feedback;
use crate::messages;
use crate::models::AddFavoriteRequest;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AddFavoriteButtonProps {
    pub add_url: AttrValue,
    pub user_id: Option<i64>,
    pub product_id: i64,
}

#[function_component(AddFavoriteButton)]
pub fn add_favorite_button(props: &AddFavoriteButtonProps) -> Html {
    let feedback = use_feedback(FeedbackPolicy::retryable());

    let on_click = {
        let feedback = feedback.clone();
        let add_url = props.add_url.clone();
        let user_id = props.user_id;
        let product_id = props.product_id;

        Callback::from(move |e: MouseEvent| {
            e.prevent_default();

            let Some(user_id) = user_id else {
                dom::alert(messages::FAVORITE_SIGN_IN);
                return;
            };

            if feedback.begin().is_none() {
                return;
            }

            let request = AddFavoriteRequest {
                user_id,
                product_id,
            };
            let feedback = feedback.clone();
            let add_url = add_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match add_favorite(&add_url, &request).await {
                    Ok(()) => {
                        feedback.succeed(None);
                        dom::pulse_favorites_icon();
                    }
                    Err(e) => {
                        if e.is_transport() {
                            log::error!("Adding favorite failed: {}", e);
                        } else {
                            log::info!("Favorite not added: {}", e);
                        }
                        feedback.release();
                        dom::alert(messages::favorite_add_failure(&e));
                    }
                }
            });
        })
    };

    html! {
        <button
            id="btnAddFavorites"
            class="btn-favorites"
            onclick={on_click}
            disabled={!feedback.snapshot().trigger_enabled()}
        >
            <ion-icon name="heart-outline"></ion-icon>
            {" To favorites"}
        </button>
    }
}
