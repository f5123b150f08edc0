//! Error types for gameplay callbacks and external sinks

use thiserror::Error;

/// Failure reported by a scripted callback or an external collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    /// A trigger, door or terminal handler failed
    #[error("handler failed: {0}")]
    Failed(String),

    /// An external sink (audio, narration, pointer capture) is unavailable
    #[error("sink '{sink}' unavailable: {reason}")]
    SinkUnavailable { sink: &'static str, reason: String },

    /// The handler panicked; the payload message is preserved
    #[error("handler panicked: {0}")]
    Panicked(String),
}

impl HandlerError {
    /// Shorthand for [`HandlerError::Failed`]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Shorthand for [`HandlerError::SinkUnavailable`]
    pub fn sink(sink: &'static str, reason: impl Into<String>) -> Self {
        Self::SinkUnavailable {
            sink,
            reason: reason.into(),
        }
    }
}

/// Result returned by every callback the core invokes
pub type HandlerResult = Result<(), HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            HandlerError::failed("no script").to_string(),
            "handler failed: no script"
        );
        assert_eq!(
            HandlerError::sink("audio", "device lost").to_string(),
            "sink 'audio' unavailable: device lost"
        );
    }
}
