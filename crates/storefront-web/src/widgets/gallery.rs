use crate::gallery::GalleryCursor;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<AttrValue>,
    #[prop_or_default]
    pub alt: AttrValue,
}

/// Main image with prev/next buttons and a thumbnail strip. The position is
/// kept for the current page only.
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let cursor = use_state(|| GalleryCursor::new(props.images.len()));

    let step = |direction: isize| {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *cursor;
            if next.step(direction).is_some() {
                cursor.set(next);
            }
        })
    };
    let on_prev = step(-1);
    let on_next = step(1);

    let Some(main_src) = props.images.get(cursor.index()).cloned() else {
        return html! {};
    };

    html! {
        <div class="product-gallery">
            <div class="main-image">
                <button class="nav-button prev" onclick={on_prev}>{"‹"}</button>
                <img id="main-img" src={main_src} alt={props.alt.clone()} />
                <button class="nav-button next" onclick={on_next}>{"›"}</button>
            </div>
            <div class="thumbnails">
                { for props.images.iter().enumerate().map(|(index, src)| {
                    let on_select = {
                        let cursor = cursor.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = *cursor;
                            if next.select(index).is_some() {
                                cursor.set(next);
                            }
                        })
                    };
                    html! {
                        <img
                            key={index.to_string()}
                            src={src.clone()}
                            alt={props.alt.clone()}
                            class={classes!((index == cursor.index()).then_some("active"))}
                            onclick={on_select}
                        />
                    }
                })}
            </div>
        </div>
    }
}
