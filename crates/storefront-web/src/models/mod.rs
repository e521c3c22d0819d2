pub mod auth;
pub mod failure;
pub mod favorite;
pub mod order;

pub use auth::*;
pub use failure::*;
pub use favorite::*;
pub use order::*;
