//! Exit code constants for the ralph-bundle CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing features, unreadable config)
//! - 2: Validation failure (manifest invariants violated)
//! - 3: Filesystem failure while writing a bundle

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, no usable features, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Validation failure: one or more manifest invariants do not hold.
pub const VALIDATION_FAILURE: i32 = 2;

/// Filesystem failure: a bundle file or directory could not be written.
pub const IO_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, VALIDATION_FAILURE, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(VALIDATION_FAILURE, 2);
        assert_eq!(IO_FAILURE, 3);
    }
}
