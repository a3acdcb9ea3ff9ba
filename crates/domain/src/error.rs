//! Common error types used across the workspace.
//!
//! The simulation core is deliberately lenient: malformed parameters and
//! unknown commands are reported and ignored rather than escalated, so the
//! domain surface only exposes errors for genuinely fallible parsing.

/// Failure to parse a time-of-day string.
#[derive(Debug, thiserror::Error)]
#[error("invalid time of day {input:?}, expected HH:MM")]
pub struct ParseTimeError {
    /// The rejected input.
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_mention_input_in_message() {
        let err = ParseTimeError {
            input: "25:99".to_string(),
        };
        assert_eq!(err.to_string(), "invalid time of day \"25:99\", expected HH:MM");
    }
}
