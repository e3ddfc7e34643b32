use crate::ports::LoggerPort;

/// Native logger writing to stdout/stderr with a `pushbridge` prefix.
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
        println!("[pushbridge] {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("[pushbridge:ERROR] {message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("[pushbridge:WARN] {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_levels() {
        let logger = ConsoleLogger::new();
        logger.log("subscribed notification");
        logger.warn("replaced listener");
        logger.error("bridge missing");
    }
}
