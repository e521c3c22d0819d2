use crate::api::orders::{create_order, list_pickup_points};
use crate::components::{Loading, Modal};
use crate::dom;
use crate::feedback::FeedbackPolicy;
use crate::hooks::use_feedback;
use crate::messages;
use crate::models::{CreateOrderRequest, PickupPoint};
use crate::routes::Route;
use crate::utils::format::format_price;
use crate::utils::validation::{validate_order_product, validate_pickup_selection};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OrderModalProps {
    pub pickup_points_url: AttrValue,
    pub orders_url: AttrValue,
    pub user_id: Option<i64>,
    pub product_id: Option<i64>,
    pub price: Option<AttrValue>,
}

#[derive(Debug, Clone, PartialEq)]
enum ModalContent {
    Closed,
    SignInRequired,
    Loading,
    Error(String),
    Checkout {
        product_id: i64,
        price: String,
        points: Vec<PickupPoint>,
    },
}

#[function_component(OrderModal)]
pub fn order_modal(props: &OrderModalProps) -> Html {
    let content = use_state(|| ModalContent::Closed);
    let pickup = use_feedback(FeedbackPolicy::retryable());

    let on_buy = {
        let content = content.clone();
        let pickup = pickup.clone();
        let pickup_points_url = props.pickup_points_url.clone();
        let user_id = props.user_id;
        let product_id = props.product_id;
        let price = props.price.clone();

        Callback::from(move |_: MouseEvent| {
            let (product_id, price) =
                match validate_order_product(product_id, price.as_deref()) {
                    Ok(product) => product,
                    Err(message) => {
                        dom::alert(message);
                        return;
                    }
                };

            if user_id.is_none() {
                content.set(ModalContent::SignInRequired);
                return;
            }

            let Some(attempt) = pickup.begin() else {
                return;
            };

            content.set(ModalContent::Loading);
            let content = content.clone();
            let pickup = pickup.clone();
            let pickup_points_url = pickup_points_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = list_pickup_points(&pickup_points_url).await;
                if !pickup.is_current(attempt) {
                    log::debug!("Dropping pickup points of attempt {}", attempt);
                    return;
                }

                match result {
                    Ok(points) => {
                        pickup.succeed(None);
                        content.set(ModalContent::Checkout {
                            product_id,
                            price,
                            points,
                        });
                    }
                    Err(e) => {
                        log::error!("Loading pickup points failed: {}", e);
                        pickup.release();
                        content.set(ModalContent::Error(e.to_string()));
                    }
                }
            });
        })
    };

    let on_close = {
        let content = content.clone();
        let pickup = pickup.clone();
        Callback::from(move |_| {
            pickup.release();
            content.set(ModalContent::Closed);
        })
    };

    let body = match &*content {
        ModalContent::Closed => html! {},
        ModalContent::SignInRequired => {
            let on_sign_in = Callback::from(|_: MouseEvent| dom::navigate_to(Route::Login));
            html! {
                <>
                    <h2>{"Sign in required"}</h2>
                    <p>{"Sign in or register to place an order."}</p>
                    <button class="btn-buy" onclick={on_sign_in}>{"Sign in"}</button>
                </>
            }
        }
        ModalContent::Loading => html! { <Loading /> },
        ModalContent::Error(message) => html! { <p>{format!("Error: {}", message)}</p> },
        ModalContent::Checkout {
            product_id,
            price,
            points,
        } => html! {
            <CheckoutForm
                orders_url={props.orders_url.clone()}
                product_id={*product_id}
                price={price.clone()}
                points={points.clone()}
            />
        },
    };

    html! {
        <>
            <button
                id="btnBuy"
                class="btn-buy"
                disabled={!pickup.snapshot().trigger_enabled()}
                onclick={on_buy}
            >
                {"Buy"}
            </button>
            <Modal show={*content != ModalContent::Closed} on_close={on_close}>
                <div id="orderModalContent">{body}</div>
            </Modal>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct CheckoutFormProps {
    orders_url: AttrValue,
    product_id: i64,
    price: String,
    points: Vec<PickupPoint>,
}

#[function_component(CheckoutForm)]
fn checkout_form(props: &CheckoutFormProps) -> Html {
    let selected = use_state(|| None::<i64>);
    let dropdown_open = use_state(|| false);
    let select_ref = use_node_ref();
    let feedback = use_feedback(FeedbackPolicy::retryable());

    // Any click outside the select closes the dropdown.
    {
        let dropdown_open = dropdown_open.clone();
        let select_ref = select_ref.clone();
        use_effect_with((), move |_| {
            let listener =
                EventListener::new(&gloo_utils::document(), "click", move |event| {
                    let inside = event
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
                        .zip(select_ref.get())
                        .is_some_and(|(target, select)| select.contains(Some(&target)));
                    if !inside {
                        dropdown_open.set(false);
                    }
                });
            move || drop(listener)
        });
    }

    let on_toggle = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: MouseEvent| dropdown_open.set(!*dropdown_open))
    };

    let on_submit = {
        let selected = selected.clone();
        let feedback = feedback.clone();
        let orders_url = props.orders_url.clone();
        let product_id = props.product_id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let pickup_point_id = match validate_pickup_selection(*selected) {
                Ok(id) => id,
                Err(message) => {
                    dom::alert(message);
                    return;
                }
            };

            if feedback.begin().is_none() {
                return;
            }

            let request = CreateOrderRequest {
                product_id,
                pickup_point_id,
            };
            let feedback = feedback.clone();
            let orders_url = orders_url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match create_order(&orders_url, &request).await {
                    Ok(order) => {
                        feedback.succeed(None);
                        dom::navigate(&order.payment_url);
                    }
                    Err(e) => {
                        if e.is_transport() {
                            log::error!("Order creation failed: {}", e);
                        } else {
                            log::warn!("Order rejected: {}", e);
                        }
                        feedback.release();
                        dom::alert(&messages::detail_or(&e, messages::ORDER_FAILED));
                    }
                }
            });
        })
    };

    let selected_name = (*selected)
        .and_then(|id| props.points.iter().find(|p| p.id == id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "Choose a pickup point".to_string());

    html! {
        <form id="orderForm" onsubmit={on_submit}>
            <h2>{"Checkout"}</h2>
            <div class="form-group">
                <label>{"Pickup point:"}</label>
                <div class="custom-select" ref={select_ref}>
                    <button type="button" class="select-btn" onclick={on_toggle}>
                        {selected_name}
                    </button>
                    if *dropdown_open {
                        <ul class="select-dropdown" style="display: block;">
                            { for props.points.iter().map(|point| {
                                let on_pick = {
                                    let selected = selected.clone();
                                    let dropdown_open = dropdown_open.clone();
                                    let id = point.id;
                                    Callback::from(move |_: MouseEvent| {
                                        selected.set(Some(id));
                                        dropdown_open.set(false);
                                    })
                                };
                                html! {
                                    <li key={point.id.to_string()} onclick={on_pick}>
                                        <strong>{&point.name}</strong><br />
                                        <small>{&point.address}</small><br />
                                        <em>{&point.work_hours}</em>
                                    </li>
                                }
                            })}
                        </ul>
                    }
                </div>
            </div>
            <p>{"Price: "}<strong>{format_price(&props.price)}</strong></p>
            <button
                type="submit"
                class="btn-buy"
                disabled={!feedback.snapshot().trigger_enabled()}
            >
                {"Place order"}
            </button>
        </form>
    }
}
