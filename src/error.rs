//! Error types for the GA engine.

use thiserror::Error;

/// Errors reported by [`GaEngine`](crate::ga::GaEngine).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    /// Rejected parameters at construction time; no engine is built.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The engine reached a state its selection logic cannot recover from.
    ///
    /// The population is left as it was before the failing `evolve` call.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, GaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = GaError::InvalidConfig("pool_size must be at least 1".into());
        assert_eq!(
            e.to_string(),
            "invalid configuration: pool_size must be at least 1"
        );

        let e = GaError::InvariantViolation("parent2 not found".into());
        assert_eq!(e.to_string(), "internal invariant violated: parent2 not found");
    }
}
