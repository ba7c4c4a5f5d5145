//! Main Crate Error

/// The request conflicts with the current state.
pub const CONFLICT: i32 = 409;
/// The requested resource does not exist.
pub const NOT_FOUND: i32 = 404;
/// Catch-all for failures nobody handled.
pub const UNHANDLED: i32 = 500;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("error[{code}]: {message}")]
/// Error carrying a message and a status code.
///
/// Both fields are fixed at construction. Any code is accepted, the
/// predicates just return `false` for codes they don't know.
pub struct ClassifiedError {
    message: String,
    code: i32,
}

impl ClassifiedError {
    pub fn new(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True if the code is [`CONFLICT`].
    pub fn is_conflict(&self) -> bool {
        self.code == CONFLICT
    }

    /// True if the code is [`NOT_FOUND`].
    pub fn is_not_found(&self) -> bool {
        self.code == NOT_FOUND
    }

    /// True if the code is [`UNHANDLED`].
    pub fn is_unhandled(&self) -> bool {
        self.code == UNHANDLED
    }
}

/// Shorthand for [`ClassifiedError::new`].
pub fn new(message: impl Into<String>, code: i32) -> ClassifiedError {
    ClassifiedError::new(message, code)
}

// Alias Result to be the crate Result.
pub type Result<T, E = ClassifiedError> = core::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::{new, ClassifiedError, CONFLICT, NOT_FOUND, UNHANDLED};

    #[test]
    fn keeps_message_and_code() {
        let err = new("user exists", 409);
        assert_eq!(err.code(), 409);
        assert_eq!(err.message(), "user exists");
    }

    #[test]
    fn renders_code_and_message() {
        assert_eq!(new("user exists", 409).to_string(), "error[409]: user exists");
        assert_eq!(new("", -7).to_string(), "error[-7]: ");
    }

    #[test]
    fn conflict_only() {
        let err = new("x", CONFLICT);
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
        assert!(!err.is_unhandled());
    }

    #[test]
    fn not_found_only() {
        let err = new("x", NOT_FOUND);
        assert!(!err.is_conflict());
        assert!(err.is_not_found());
        assert!(!err.is_unhandled());
    }

    #[test]
    fn unhandled_only() {
        let err = new("x", UNHANDLED);
        assert!(!err.is_conflict());
        assert!(!err.is_not_found());
        assert!(err.is_unhandled());
    }

    #[test]
    fn unknown_code_matches_nothing() {
        let err = new("x", 123);
        assert_eq!(err.code(), 123);
        assert!(!err.is_conflict());
        assert!(!err.is_not_found());
        assert!(!err.is_unhandled());
    }

    #[test]
    fn equal_by_value() {
        assert_eq!(new("x", 404), ClassifiedError::new(String::from("x"), 404));
        assert_ne!(new("x", 404), new("x", 409));
        assert_ne!(new("x", 404), new("y", 404));
    }

    #[test]
    fn is_a_std_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(new("gone", 404));
        assert_eq!(boxed.to_string(), "error[404]: gone");
        assert!(boxed.source().is_none());
    }
}
