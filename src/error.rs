//! Error types.

/// Rejected range bounds.
///
/// Ranges are validated when they are built, never lazily while being pulled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("Invalid range: begin {begin} is greater than end {end}")]
    Inverted { begin: i64, end: i64 },

    #[error("Invalid range: step {step} must be positive")]
    NonPositiveStep { step: i64 },
}

pub type Error = RangeError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_message() {
        let err = RangeError::Inverted { begin: 0, end: -1 };
        assert_eq!(
            err.to_string(),
            "Invalid range: begin 0 is greater than end -1"
        );
    }

    #[test]
    fn test_step_message() {
        let err = RangeError::NonPositiveStep { step: 0 };
        assert_eq!(err.to_string(), "Invalid range: step 0 must be positive");
    }
}
