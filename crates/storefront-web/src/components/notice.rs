use crate::feedback::{Notice, NoticeKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let kind = match notice.kind {
        NoticeKind::Success => "alert-success",
        NoticeKind::Error => "alert-danger",
    };

    html! {
        <div id={props.id.clone()} class={classes!("alert", kind, "show")} role="alert">
            <span>{&notice.text}</span>
        </div>
    }
}
