use a11ycheck_core_types::ContextId;
use thiserror::Error;

/// Result type alias using the canonical ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and reporting. Capacity truncation is deliberately
/// absent: an oversized tree is degraded, not failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration/Validation
    InvalidInput,
    InvalidConfiguration,
    NotFound,
    DuplicateElement,
    MalformedTree,

    // Collaborators
    ExternalService,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfiguration => "ERR_INVALID_CONFIGURATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::DuplicateElement => "ERR_DUPLICATE_ELEMENT",
            ExErrorKind::MalformedTree => "ERR_MALFORMED_TREE",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, element, element context) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    element_id: Option<i32>,
    context_id: Option<ContextId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            element_id: None,
            context_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add element identity context
    pub fn with_element_id(mut self, id: i32) -> Self {
        self.element_id = Some(id);
        self
    }

    /// Add element context id
    pub fn with_context_id(mut self, id: ContextId) -> Self {
        self.context_id = Some(id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the element identity context, if any
    pub fn element_id(&self) -> Option<i32> {
        self.element_id
    }

    /// Get the element context id, if any
    pub fn context_id(&self) -> Option<ContextId> {
        self.context_id
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;

        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }

        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }

        if let Some(element_id) = self.element_id {
            write!(f, " (element_id: {})", element_id)?;
        }

        if let Some(context_id) = &self.context_id {
            write!(f, " (context_id: {})", context_id)?;
        }

        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for capture and evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum A11yError {
    // ===== Configuration Errors =====
    /// Counter bound must be positive
    #[error("Upper bound must be positive, got {upper_bound}")]
    UpperBoundNotPositive { upper_bound: i32 },

    /// Counter bound must leave room for overflow detection
    #[error("Upper bound must be less than i32::MAX")]
    UpperBoundAtIntMax,

    /// A configuration value failed validation
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    // ===== Snapshot Errors =====
    /// Two elements in one snapshot share an identity
    #[error("Duplicate element identity {element_id} in snapshot")]
    DuplicateElementId { element_id: i32 },

    /// Element context is not registered with the data manager
    #[error("Element context not found: {context_id}")]
    ContextNotFound { context_id: ContextId },

    /// A loaded tree fixture could not be turned into an element tree
    #[error("Malformed element tree: {reason}")]
    MalformedTree { reason: String },

    // ===== Collaborator Errors =====
    /// A tree walker reported a failure
    #[error("Tree walker failed: {message}")]
    WalkerFailed { message: String },

    // ===== Generic Errors =====
    /// File system failure
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Serialization error (JSON/TOML decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from A11yError to ExError
impl From<A11yError> for ExError {
    fn from(err: A11yError) -> Self {
        let message = err.to_string();
        match err {
            A11yError::UpperBoundNotPositive { .. } | A11yError::UpperBoundAtIntMax => {
                ExError::new(ExErrorKind::InvalidConfiguration)
                    .with_op("bounded_counter_new")
                    .with_message(message)
            }
            A11yError::InvalidConfiguration { .. } => {
                ExError::new(ExErrorKind::InvalidConfiguration).with_message(message)
            }
            A11yError::DuplicateElementId { element_id } => {
                ExError::new(ExErrorKind::DuplicateElement)
                    .with_element_id(element_id)
                    .with_message(message)
            }
            A11yError::ContextNotFound { context_id } => ExError::new(ExErrorKind::NotFound)
                .with_context_id(context_id)
                .with_message(message),
            A11yError::MalformedTree { .. } => {
                ExError::new(ExErrorKind::MalformedTree).with_message(message)
            }
            A11yError::WalkerFailed { .. } => {
                ExError::new(ExErrorKind::ExternalService).with_message(message)
            }
            A11yError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),
            A11yError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            A11yError::Internal { .. } => ExError::new(ExErrorKind::Internal).with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::DuplicateElement)
            .with_op("capture_load")
            .with_element_id(7)
            .with_message("duplicate");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_DUPLICATE_ELEMENT]"));
        assert!(rendered.contains("capture_load"));
        assert!(rendered.contains("element_id: 7"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        use std::error::Error as _;

        let inner = ExError::new(ExErrorKind::Io).with_message("disk gone");
        let outer = ExError::new(ExErrorKind::MalformedTree).with_source(inner);

        assert_eq!(outer.source_error().map(|e| e.kind()), Some(ExErrorKind::Io));
        assert!(outer.source().is_some());
    }
}
