use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PickupPoint {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub work_hours: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreateOrderRequest {
    pub product_id: i64,
    pub pickup_point_id: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderCreated {
    pub payment_url: String,
}
