use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Closes on the × button or on a click on the backdrop itself.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let on_backdrop = {
        let callback = props.on_close.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let on_close = {
        let callback = props.on_close.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal" style="display: block;" onclick={on_backdrop}>
            <div class="modal-content" onclick={keep_open}>
                <span class="close" onclick={on_close}>{"×"}</span>
                {for props.children.iter()}
            </div>
        </div>
    }
}
