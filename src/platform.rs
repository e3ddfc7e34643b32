/// Platform - Dependency injection container for all ports.
///
/// Hybrid approach:
/// - Stateless ports: `&'static` references (zero-cost)
/// - Stateful ports: `Rc<dyn Trait>` (everything runs on the host's event thread)
use crate::domain::error::PushError;
use crate::ports::{LoggerPort, TransportPort};
use std::fmt;
use std::rc::Rc;

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    transport: Option<Rc<dyn TransportPort>>,
}

impl Platform {
    /// Creates a Platform with the default logger and no transport attached.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            transport: None,
        }
    }

    pub fn with_transport(transport: Rc<dyn TransportPort>) -> Self {
        Self {
            logger: crate::adapters::logger(),
            transport: Some(transport),
        }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    /// The native bridge, or [`PushError::TransportUnavailable`] when none is attached.
    pub fn transport(&self) -> Result<Rc<dyn TransportPort>, PushError> {
        self.transport
            .clone()
            .ok_or(PushError::TransportUnavailable)
    }

    pub fn has_transport(&self) -> bool {
        self.transport.is_some()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform")
            .field("has_transport", &self.has_transport())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::native::LoopbackTransport;

    #[test]
    fn test_platform_creation() {
        let platform = Platform::new();
        platform.logger().log("test");
        assert!(!platform.has_transport());
    }

    #[test]
    fn test_platform_without_transport_is_unavailable() {
        let platform = Platform::default();
        assert!(matches!(
            platform.transport(),
            Err(PushError::TransportUnavailable)
        ));
    }

    #[test]
    fn test_platform_clone_shares_transport() {
        let platform = Platform::with_transport(Rc::new(LoopbackTransport::new()));
        let cloned = platform.clone();
        assert!(cloned.has_transport());
        assert!(cloned.transport().is_ok());
    }

    #[test]
    fn test_platform_logger_access() {
        let platform = Platform::new();
        let logger = platform.logger();
        logger.log("test 1");
        logger.warn("test 2");
        logger.error("test 3");
    }
}
