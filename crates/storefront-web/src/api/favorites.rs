use crate::api::client::{post_json, send};
use crate::error::ApiError;
use crate::models::AddFavoriteRequest;
use gloo_net::http::Request;

pub async fn add_favorite(url: &str, request: &AddFavoriteRequest) -> Result<(), ApiError> {
    post_json(url, request).await?;
    Ok(())
}

pub async fn remove_favorite(url: &str, favorite_id: &str) -> Result<(), ApiError> {
    let request = Request::delete(url)
        .query([("favorite_id", favorite_id)])
        .header("Content-Type", "application/json")
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    send(request).await?;
    Ok(())
}
