/// WASM adapters - implementations over the JS native notification module.

pub mod console_logger;
pub mod converters;
pub mod error_conversions;
pub mod js_transport;

pub use console_logger::ConsoleLogger;
pub use js_transport::{JsSubscription, JsTransport};
