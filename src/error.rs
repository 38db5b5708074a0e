//! Error type returned by the majority finders.

use thiserror::Error;

/// Errors reported by [`FindMajority::find`](crate::FindMajority::find).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MajorityError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}

impl MajorityError {
    pub(crate) const fn empty_sequence() -> Self {
        Self::InvalidArgument {
            reason: "cannot search an empty sequence for a majority element",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_message() {
        let err = MajorityError::empty_sequence();
        assert_eq!(
            err.to_string(),
            "invalid argument: cannot search an empty sequence for a majority element"
        );
    }
}
