use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushError {
    InvalidArgument(String),
    TransportUnavailable,
    TransportRejection(String),
}

impl fmt::Display for PushError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PushError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            PushError::TransportUnavailable => {
                write!(f, "PushNotificationManager is not available.")
            }
            PushError::TransportRejection(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for PushError {}

impl PushError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        PushError::InvalidArgument(message.into())
    }

    pub fn rejection(message: impl Into<String>) -> Self {
        PushError::TransportRejection(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_passes_through() {
        let error = PushError::rejection("user denied");
        assert_eq!(error.to_string(), "user denied");
    }

    #[test]
    fn test_invalid_argument_display() {
        let error = PushError::invalid_argument("Must provide a valid callback");
        assert_eq!(
            error.to_string(),
            "Invalid argument: Must provide a valid callback"
        );
    }
}
