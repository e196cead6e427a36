//! Console error types

/// Console error with code and message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// E01: Invalid value format
    InvalidValue,
    /// E02: Missing required argument
    MissingArg,
    /// E03: Value out of allowed range
    OutOfRange,
    /// E04: Console used before `initialize`
    NotInitialized,
    /// E05: Internal state does not hold its invariants
    InvalidState,
}

impl ConsoleError {
    /// Get error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidValue => "E01",
            Self::MissingArg => "E02",
            Self::OutOfRange => "E03",
            Self::NotInitialized => "E04",
            Self::InvalidState => "E05",
        }
    }

    /// Get error message
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidValue => "invalid value",
            Self::MissingArg => "missing argument",
            Self::OutOfRange => "out of range",
            Self::NotInitialized => "console not initialized",
            Self::InvalidState => "invalid console state",
        }
    }
}

impl core::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}
