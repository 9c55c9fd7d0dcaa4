//! Filter evaluation errors
//!
//! Error codes:
//! - NEO_UNLINKED_APPROACH (FATAL)

use std::fmt;

use crate::observability::Severity;

/// Filter error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterErrorCode {
    /// A predicate that reads NEO attributes met an approach with no linked NEO
    NeoUnlinkedApproach,
}

impl FilterErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            FilterErrorCode::NeoUnlinkedApproach => "NEO_UNLINKED_APPROACH",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            FilterErrorCode::NeoUnlinkedApproach => Severity::Fatal,
        }
    }
}

impl fmt::Display for FilterErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Filter error with context
#[derive(Debug, Clone, PartialEq)]
pub struct FilterError {
    code: FilterErrorCode,
    message: String,
    /// Join key of the offending approach
    designation: String,
}

impl FilterError {
    /// Create an unlinked approach error (FATAL)
    pub fn unlinked_approach(attribute: &str, designation: impl Into<String>) -> Self {
        let designation = designation.into();
        Self {
            code: FilterErrorCode::NeoUnlinkedApproach,
            message: format!(
                "cannot read {} of approach '{}': no NEO with that designation",
                attribute, designation
            ),
            designation,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> FilterErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the join key of the approach that failed evaluation
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for FilterError {}

/// Result type for filter evaluation
pub type FilterResult<T> = Result<T, FilterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            FilterErrorCode::NeoUnlinkedApproach.code(),
            "NEO_UNLINKED_APPROACH"
        );
    }

    #[test]
    fn test_unlinked_is_fatal() {
        let err = FilterError::unlinked_approach("diameter", "2099 ZZ");
        assert!(err.is_fatal());
        assert_eq!(err.designation(), "2099 ZZ");
    }

    #[test]
    fn test_error_display() {
        let err = FilterError::unlinked_approach("hazardous flag", "2099 ZZ");
        let display = format!("{}", err);
        assert!(display.contains("FATAL"));
        assert!(display.contains("NEO_UNLINKED_APPROACH"));
        assert!(display.contains("2099 ZZ"));
    }
}
