//! Error types for data source operations.

use std::fmt;

/// Result type for data source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Structured context for source errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "fetch", "read_file")
    pub operation: Option<String>,
    /// URL or file path of the source
    pub location: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref location) = self.location {
            parts.push(format!("location={}", location));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for data source operations
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network failure or non-success HTTP status.
    #[error("Transport error: {message} {context}")]
    TransportError {
        message: String,
        context: ErrorContext,
    },

    /// File could not be read.
    #[error("I/O error: {message} {context}")]
    IoError {
        message: String,
        context: ErrorContext,
    },

    /// Body is not a valid dataset payload.
    #[error("Parse error: {message} {context}")]
    ParseError {
        message: String,
        context: ErrorContext,
    },

    /// Source is misconfigured or unavailable in this build.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },

    /// The fetch did not finish in time.
    #[error("Timeout error: {message} {context}")]
    TimeoutError {
        message: String,
        context: ErrorContext,
    },
}

impl SourceError {
    pub fn transport(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::TransportError {
            message: message.into(),
            context,
        }
    }

    pub fn io(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::IoError {
            message: message.into(),
            context,
        }
    }

    pub fn parse(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ParseError {
            message: message.into(),
            context,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn timeout(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::TimeoutError {
            message: message.into(),
            context,
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::TransportError { context, .. }
            | Self::IoError { context, .. }
            | Self::ParseError { context, .. }
            | Self::ConfigurationError { context, .. }
            | Self::TimeoutError { context, .. } => context,
        }
    }
}
