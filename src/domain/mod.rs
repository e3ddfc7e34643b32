pub mod error;
pub mod events;
pub mod notification;
pub mod permissions;
pub mod request;

pub use error::PushError;
