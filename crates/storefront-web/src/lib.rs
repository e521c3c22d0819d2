//! Browser client of the storefront.
//!
//! Pages are rendered by the server. This crate mounts Yew islands for the
//! flows that talk to the API and attaches listeners to the rest. The
//! modules outside the `wasm32` gate hold the state machines and rules the
//! islands are built from and are tested natively.

pub mod config;
pub mod credentials;
pub mod error;
pub mod feedback;
pub mod gallery;
pub mod messages;
pub mod models;
pub mod tabs;
pub mod utils;

#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod enhance;
#[cfg(target_arch = "wasm32")]
mod hooks;
#[cfg(target_arch = "wasm32")]
mod mount;
#[cfg(target_arch = "wasm32")]
mod routes;
#[cfg(target_arch = "wasm32")]
mod widgets;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let level = config::parse_log_level(
        gloo_utils::document()
            .body()
            .and_then(|body| body.get_attribute("data-log-level"))
            .as_deref(),
    );
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Storefront client starting (log level {})", level);

    mount::mount_page();

    Ok(())
}
