pub mod form_field;
pub mod loading;
pub mod modal;
pub mod notice;

pub use form_field::*;
pub use loading::*;
pub use modal::*;
pub use notice::*;
