use crate::api::client::{post_json, read_json, send};
use crate::error::ApiError;
use crate::models::{CreateOrderRequest, OrderCreated, PickupPoint};
use gloo_net::http::Request;

pub async fn list_pickup_points(url: &str) -> Result<Vec<PickupPoint>, ApiError> {
    let request = Request::get(url)
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    let response = send(request).await?;
    read_json(response).await
}

pub async fn create_order(
    url: &str,
    request: &CreateOrderRequest,
) -> Result<OrderCreated, ApiError> {
    let response = post_json(url, request).await?;
    read_json(response).await
}
