//! Application error type.
//!
//! Every fallible operation in the crate returns `Result<T, AppError>`. The
//! binary prints the message and exits with the carried code:
//!
//! - `2`: invalid input or configuration (bad JSON, bad flags)
//! - `3`: a caller broke the aggregation contract (a harness defect)
//! - `4`: a numeric failure the data cannot support (zero mean time, etc.)

/// Exit code for malformed input or configuration.
pub const EXIT_INVALID_INPUT: u8 = 2;
/// Exit code for a violated caller contract.
pub const EXIT_CONTRACT: u8 = 3;
/// Exit code for numeric failures.
pub const EXIT_NUMERIC: u8 = 4;

#[derive(Clone, PartialEq, Eq)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INVALID_INPUT, message)
    }

    pub fn contract(message: impl Into<String>) -> Self {
        Self::new(EXIT_CONTRACT, message)
    }

    pub fn numeric(message: impl Into<String>) -> Self {
        Self::new(EXIT_NUMERIC, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the error reports a defect in the calling harness.
    pub fn is_contract_violation(&self) -> bool {
        self.exit_code == EXIT_CONTRACT
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
