/// Native adapters - implementations for native Rust (non-WASM).

pub mod console_logger;
pub mod loopback_transport;

pub use console_logger::ConsoleLogger;
pub use loopback_transport::{LoopbackSubscription, LoopbackTransport, TransportCall};
