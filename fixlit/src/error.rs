use thiserror::Error;

/// Errors raised when a literal operation would leave its fixed storage.
///
/// The variants only carry plain sizes so the type stays `Copy` and can be
/// produced and matched inside `const fn`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Construction or append would exceed the capacity.
    #[error("literal of {requested} elements does not fit capacity {capacity}")]
    Overflow { requested: usize, capacity: usize },

    /// An iterator was requested at a position past the storage end.
    #[error("iterator position {index} is out of range for capacity {capacity}")]
    OutOfRange { index: usize, capacity: usize },
}

impl LiteralError {
    /// Static description, usable in const panics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LiteralError::Overflow { .. } => "literal is too long for its capacity",
            LiteralError::OutOfRange { .. } => "iterator position is out of range",
        }
    }
}

/// Convenience alias used throughout the crate so functions can simply return
/// `Result<T>` instead of writing out the full type every time.
pub type Result<T> = core::result::Result<T, LiteralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_sizes() {
        let err = LiteralError::Overflow {
            requested: 41,
            capacity: 40,
        };
        assert_eq!(
            err.to_string(),
            "literal of 41 elements does not fit capacity 40"
        );

        let err = LiteralError::OutOfRange {
            index: 11,
            capacity: 9,
        };
        assert_eq!(
            err.to_string(),
            "iterator position 11 is out of range for capacity 9"
        );
    }

    #[test]
    fn test_const_message() {
        const MESSAGE: &str = LiteralError::Overflow {
            requested: 2,
            capacity: 1,
        }
        .as_str();
        assert_eq!(MESSAGE, "literal is too long for its capacity");
    }
}
