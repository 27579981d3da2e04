//! Exit code constants for the personal-agent CLI.
//!
//! - 0: Success
//! - 1: Failure (unreadable or malformed config, schema problems,
//!   validation violations, dispatch errors)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any load, validation or dispatch failure.
pub const FAILURE: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_match_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(FAILURE, 1);
    }
}
