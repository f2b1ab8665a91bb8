//! Error types for pgclause

use thiserror::Error;

/// Result type alias for clause and statement operations
pub type ClauseResult<T> = Result<T, ClauseError>;

/// Error types for clause configuration, placeholder allocation and statement assembly
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClauseError {
    /// A setter rejected one of its arguments
    #[error("Invalid argument '{argument}' to {function}: {reason}")]
    InvalidArgument {
        function: &'static str,
        argument: &'static str,
        reason: String,
    },

    /// Stored state no longer agrees with its registry
    #[error("Invalid variable '{variable}' in {function}")]
    InvalidVariable {
        function: &'static str,
        variable: &'static str,
    },

    /// The registry could not issue, bind or render a placeholder
    #[error("Placeholder allocation failed: {0}")]
    PlaceholderAllocationFailed(String),

    /// The statement is missing a required clause or has conflicting forms
    #[error("Incomplete statement: {0}")]
    Incomplete(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl ClauseError {
    /// Create an invalid argument error naming the rejected parameter
    pub fn invalid_argument(
        function: &'static str,
        argument: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            function,
            argument,
            reason: reason.into(),
        }
    }

    /// Create an invalid variable error
    pub fn invalid_variable(function: &'static str, variable: &'static str) -> Self {
        Self::InvalidVariable { function, variable }
    }

    /// Create a placeholder allocation error
    pub fn allocation(message: impl Into<String>) -> Self {
        Self::PlaceholderAllocationFailed(message.into())
    }

    /// Create an incomplete statement error
    pub fn incomplete(message: impl Into<String>) -> Self {
        Self::Incomplete(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if this is an invalid variable error
    pub fn is_invalid_variable(&self) -> bool {
        matches!(self, Self::InvalidVariable { .. })
    }

    /// Check if this is a placeholder allocation error
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, Self::PlaceholderAllocationFailed(_))
    }

    /// Check if this is an incomplete statement error
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete(_))
    }

    /// The rejected parameter name, for invalid argument errors.
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { argument, .. } => Some(*argument),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ClauseError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_names_parameter() {
        let err = ClauseError::invalid_argument("set_cascade", "cascade", "unknown code 9");
        assert!(err.is_invalid_argument());
        assert_eq!(err.argument(), Some("cascade"));
        assert_eq!(
            err.to_string(),
            "Invalid argument 'cascade' to set_cascade: unknown code 9"
        );
    }

    #[test]
    fn other_kinds_have_no_argument() {
        assert_eq!(ClauseError::allocation("full").argument(), None);
        assert!(ClauseError::incomplete("no name").is_incomplete());
        assert!(ClauseError::invalid_variable("get", "name").is_invalid_variable());
    }
}
