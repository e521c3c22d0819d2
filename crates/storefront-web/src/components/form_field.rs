use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub input_id: Option<AttrValue>,
    pub children: Children,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.input_id.clone()}>{&props.label}</label>
            {for props.children.iter()}
        </div>
    }
}
