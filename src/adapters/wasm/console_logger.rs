use crate::ports::LoggerPort;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);
}

/// Logger over the browser or webview `console`, prefixed with `[pushbridge]`.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        log(&format!("[pushbridge] {message}"));
    }

    fn error(&self, message: &str) {
        error(&format!("[pushbridge] {message}"));
    }

    fn warn(&self, message: &str) {
        warn(&format!("[pushbridge] {message}"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_logger_levels() {
        let logger = ConsoleLogger::new();
        logger.log("subscribed notification");
        logger.warn("dropped register event");
        logger.error("setApplicationIconBadgeNumber failed");
    }
}
