//! Exit status codes for calcctl

use crate::pages::SubmitStatus;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when a form fails local validation (nothing was sent)
pub const EXIT_INVALID_INPUT: i32 = 64;

/// Exit code when the service answered with an `error` field
pub const EXIT_REJECTED: i32 = 65;

/// Exit code when the service is unavailable/unreachable
pub const EXIT_SERVER_UNAVAILABLE: i32 = 70;

/// Exit code matching a finished round trip
pub fn exit_code_for(status: &SubmitStatus) -> i32 {
    match status {
        SubmitStatus::Success => EXIT_SUCCESS,
        SubmitStatus::Rejected(_) => EXIT_REJECTED,
        SubmitStatus::Unreachable(_) => EXIT_SERVER_UNAVAILABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for(&SubmitStatus::Success), EXIT_SUCCESS);
        assert_eq!(
            exit_code_for(&SubmitStatus::Rejected("no".to_string())),
            EXIT_REJECTED
        );
        assert_eq!(
            exit_code_for(&SubmitStatus::Unreachable("refused".to_string())),
            EXIT_SERVER_UNAVAILABLE
        );
    }
}
