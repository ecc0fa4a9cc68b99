use thiserror::Error;

/// Errors produced when parsing template DSL text.
#[derive(Debug, Error)]
#[error("template parse error: {message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The parser's description of what went wrong, including the location.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ParseError::new("expected `:`");
        assert_eq!(err.to_string(), "template parse error: expected `:`");
        assert_eq!(err.message(), "expected `:`");
    }
}
