/// Sink for the bridge's diagnostics: subscription changes, dropped events and
/// fire-and-forget calls the platform refused.
///
/// Implemented by `console.*` on wasm and by stdout/stderr on native targets.
pub trait LoggerPort: Send + Sync {
    fn log(&self, message: &str);

    fn warn(&self, message: &str);

    /// Failures that cannot be returned to a caller.
    fn error(&self, message: &str);
}
