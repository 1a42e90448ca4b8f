use std::error::Error;
use std::fmt::{Display, Formatter};

/// Input rejected before any state mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Prompt title is blank after trim.
    EmptyTitle,
    /// Prompt content is blank after trim.
    EmptyContent,
    /// Project name is blank after trim.
    EmptyProjectName,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "prompt title must not be blank"),
            Self::EmptyContent => write!(f, "prompt content must not be blank"),
            Self::EmptyProjectName => write!(f, "project name must not be blank"),
        }
    }
}

impl Error for ValidationError {}

/// Trims `value` and rejects it with `error` when nothing remains.
pub(crate) fn require_text(value: &str, error: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(error)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{require_text, ValidationError};

    #[test]
    fn require_text_trims_surrounding_whitespace() {
        assert_eq!(
            require_text("  hello \n", ValidationError::EmptyTitle),
            Ok("hello".to_string())
        );
    }

    #[test]
    fn require_text_rejects_whitespace_only() {
        assert_eq!(
            require_text(" \t\n", ValidationError::EmptyContent),
            Err(ValidationError::EmptyContent)
        );
    }
}
