use crate::error::ApiError;
use crate::models::ErrorBody;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Sends `request` and turns any non-2xx answer into `ApiError::Rejected`,
/// keeping the `detail` of the error body when there is one.
pub async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::debug!("{} answered {}: {}", response.url(), status, body);

    Err(ApiError::rejected(status, ErrorBody::parse_detail(&body)))
}

pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<Response, ApiError> {
    let request = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    send(request).await
}

pub async fn post_form(url: &str, fields: &[(&str, &str)]) -> Result<Response, ApiError> {
    let params = web_sys::UrlSearchParams::new()
        .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
    for (name, value) in fields {
        params.append(name, value);
    }
    let body: String = params.to_string().into();

    let request = Request::post(url)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    send(request).await
}

pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
