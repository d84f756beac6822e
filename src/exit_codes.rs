//! Exit code constants for the postsmith CLI.
//!
//! - 0: Success (a generated post or a fallback template was written)
//! - 1: Failure (bad configuration, I/O error, or cancelled by the user)

/// Successful execution, including runs that fell back to a template post.
pub const SUCCESS: i32 = 0;

/// Any unhandled error or user cancellation.
pub const FAILURE: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(SUCCESS, FAILURE);
    }

    #[test]
    fn exit_codes_match_documented_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(FAILURE, 1);
    }
}
