//! Wires islands and enhancers into the current page.
//!
//! Each island has a host element. The island is skipped when its host is
//! absent or when an endpoint it needs is missing from the page.

use crate::config::{Endpoint, PageConfig};
use crate::dom::{self, DocumentSource};
use crate::enhance::{self, select_all, select_one};
use crate::utils::format::parse_price_label;
use crate::widgets::*;
use web_sys::{Document, Element};
use yew::{AttrValue, BaseComponent, Renderer};

type Config = PageConfig<DocumentSource>;

fn host(document: &Document, id: &str) -> Option<Element> {
    let host = document.get_element_by_id(id);
    if host.is_none() {
        log::debug!("No #{} on this page", id);
    }
    host
}

fn endpoint(config: &Config, endpoint: Endpoint) -> Option<AttrValue> {
    let url = config.endpoint(endpoint);
    if url.is_none() {
        log::debug!("Endpoint #{} is not configured", endpoint.element_id());
    }
    url.map(AttrValue::from)
}

fn render<C>(host: Element, props: C::Properties)
where
    C: BaseComponent,
{
    Renderer::<C>::with_root_and_props(host, props).render();
}

/// Server-rendered thumbnails become the gallery's image list.
fn thumbnail_sources(document: &Document) -> Vec<AttrValue> {
    select_all(document, ".thumbnails img")
        .into_iter()
        .filter_map(|img| img.get_attribute("src"))
        .map(AttrValue::from)
        .collect()
}

fn product_price(document: &Document, config: &Config) -> Option<AttrValue> {
    config
        .product_price()
        .or_else(|| {
            select_one(document, ".bloc-price-info p")
                .and_then(|p| p.text_content())
                .and_then(|label| parse_price_label(&label))
        })
        .map(AttrValue::from)
}

pub fn mount_islands(document: &Document, config: &Config) {
    if let (Some(root), Some(login_url)) =
        (host(document, "login-root"), endpoint(config, Endpoint::Login))
    {
        render::<LoginForm>(root, LoginFormProps { login_url });
    }

    if let (Some(root), Some(register_url), Some(verify_url)) = (
        host(document, "register-root"),
        endpoint(config, Endpoint::Register),
        endpoint(config, Endpoint::RequestVerification),
    ) {
        render::<RegistrationForm>(
            root,
            RegistrationFormProps {
                register_url,
                verify_url,
            },
        );
    }

    if let (Some(root), Some(verify_url), Some(email)) = (
        host(document, "verification-request-root"),
        endpoint(config, Endpoint::RequestVerification),
        config.user_email(),
    ) {
        render::<VerificationRequest>(
            root,
            VerificationRequestProps {
                verify_url,
                email: email.into(),
            },
        );
    }

    if let (Some(root), Some(verify_url)) = (
        host(document, "verify-email-root"),
        endpoint(config, Endpoint::VerifyEmail),
    ) {
        render::<VerifyEmail>(root, VerifyEmailProps { verify_url });
    }

    if let (Some(root), Some(reset_url)) = (
        host(document, "forgot-password-root"),
        endpoint(config, Endpoint::ResetPasswordRequest),
    ) {
        render::<PasswordResetRequest>(
            root,
            PasswordResetRequestProps {
                reset_url,
                email: None,
                with_loading: true,
            },
        );
    }

    if let (Some(root), Some(reset_url), Some(email)) = (
        host(document, "profile-reset-password-root"),
        endpoint(config, Endpoint::ResetPasswordRequest),
        config.user_email(),
    ) {
        render::<PasswordResetRequest>(
            root,
            PasswordResetRequestProps {
                reset_url,
                email: Some(email.into()),
                with_loading: false,
            },
        );
    }

    if let (Some(root), Some(reset_url)) = (
        host(document, "reset-password-root"),
        endpoint(config, Endpoint::ResetPassword),
    ) {
        render::<ResetPasswordForm>(root, ResetPasswordFormProps { reset_url });
    }

    if let (Some(root), Some(logout_url)) = (
        host(document, "logout-root"),
        endpoint(config, Endpoint::Logout),
    ) {
        render::<LogoutButton>(root, LogoutButtonProps { logout_url });
    }

    if let (Some(root), Some(add_url), Some(product_id)) = (
        host(document, "favorite-add-root"),
        endpoint(config, Endpoint::FavoritesAdd),
        config.product_id(),
    ) {
        render::<AddFavoriteButton>(
            root,
            AddFavoriteButtonProps {
                add_url,
                user_id: config.user_id(),
                product_id,
            },
        );
    }

    if let (Some(root), Some(pickup_points_url), Some(orders_url)) = (
        host(document, "order-root"),
        endpoint(config, Endpoint::PickupPoints),
        endpoint(config, Endpoint::Orders),
    ) {
        render::<OrderModal>(
            root,
            OrderModalProps {
                pickup_points_url,
                orders_url,
                user_id: config.user_id(),
                product_id: config.product_id(),
                price: product_price(document, config),
            },
        );
    }

    if let Some(root) = host(document, "gallery-root") {
        let images = thumbnail_sources(document);
        if images.is_empty() {
            log::debug!("Gallery has no thumbnails");
        } else {
            let alt = root.get_attribute("data-alt").unwrap_or_default();
            render::<Gallery>(
                root,
                GalleryProps {
                    images,
                    alt: alt.into(),
                },
            );
        }
    }
}

pub fn attach_enhancers(document: &Document, config: &Config) {
    let tabs = enhance::tabs::attach(document);
    log::debug!("Attached {} tab links", tabs);

    if let Some(search_url) = config.endpoint(Endpoint::Search) {
        enhance::search::attach(document, search_url);
    }

    if !enhance::auth_popup::attach(document) {
        log::debug!("Auth popup is not on this page");
    }

    if let Some(delete_url) = config.endpoint(Endpoint::FavoritesDelete) {
        let buttons = enhance::favorites::attach(document, delete_url);
        log::debug!("Attached {} favorite delete buttons", buttons);
    }
}

pub fn mount_page() {
    let document = gloo_utils::document();
    let config = dom::page_config();

    attach_enhancers(&document, &config);
    mount_islands(&document, &config);
}
