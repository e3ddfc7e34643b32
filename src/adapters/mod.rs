/// Adapters module - platform-specific implementations of ports.

pub mod global_logger;

// The loopback transport is plain Rust and also backs the native test suite.
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::ConsoleLogger;
#[cfg(not(target_arch = "wasm32"))]
pub use native::ConsoleLogger;

pub use global_logger::logger;
