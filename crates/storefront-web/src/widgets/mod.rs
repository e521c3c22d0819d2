pub mod favorites;
pub mod gallery;
pub mod login;
pub mod logout;
pub mod order;
pub mod password_reset;
pub mod registration;
pub mod verification;

pub use favorites::*;
pub use gallery::*;
pub use login::*;
pub use logout::*;
pub use order::*;
pub use password_reset::*;
pub use registration::*;
pub use verification::*;
