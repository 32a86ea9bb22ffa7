//! Helper error types.

use thiserror::Error;

/// Errors raised while rendering a form helper.
///
/// Most malformed input degrades to permissive markup instead of failing;
/// these variants cover the inputs that cannot be rendered at all.
#[derive(Debug, Error)]
pub enum FormHelperError {
    #[error("{helper}: options must be a mapping or a list of values, got {found}")]
    InvalidOptions { helper: &'static str, found: String },

    #[error("{helper}: invalid `{argument}` argument: {reason}")]
    InvalidArgument {
        helper: &'static str,
        argument: &'static str,
        reason: String,
    },
}

/// Result type alias using FormHelperError.
pub type FormHelperResult<T> = Result<T, FormHelperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FormHelperError::InvalidOptions {
            helper: "select",
            found: "string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "select: options must be a mapping or a list of values, got string"
        );

        let err = FormHelperError::InvalidArgument {
            helper: "select-range",
            argument: "start",
            reason: "expected an integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "select-range: invalid `start` argument: expected an integer"
        );
    }
}
