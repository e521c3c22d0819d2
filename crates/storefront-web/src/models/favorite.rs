use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddFavoriteRequest {
    pub user_id: i64,
    pub product_id: i64,
}
