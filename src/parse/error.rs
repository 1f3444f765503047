use std::fmt;

/// Errors produced when parsing rule-set text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    line: usize,
    message: String,
}

impl ParseError {
    pub(crate) fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    /// 1-based line on which parsing stopped.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "parse error on line {}", self.line)
        } else {
            write!(f, "parse error on line {}: {}", self.line, self.message)
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ParseError::new(3, "expected match kind");
        assert_eq!(err.to_string(), "parse error on line 3: expected match kind");
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn error_display_without_message() {
        let err = ParseError::new(1, "");
        assert_eq!(err.to_string(), "parse error on line 1");
    }
}
