pub mod registry;
pub mod types;

pub use registry::EventListenerRegistry;
pub use types::{
    EventClass, PushEvent, RegistrationError, DEVICE_LOCAL_NOTIF_EVENT, DEVICE_NOTIF_EVENT,
    NOTIF_REGISTER_EVENT, NOTIF_REGISTRATION_ERROR_EVENT,
};
