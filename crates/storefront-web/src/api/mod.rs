pub mod auth;
pub mod client;
pub mod favorites;
pub mod orders;
