use thiserror::Error;

/// Primary error type for oslab simulator operations.
///
/// Every failure a simulator can report is a variant here: either the caller
/// handed us input that fails validation before any simulation starts, or an
/// internal invariant broke mid-run. Simulators never produce partial output;
/// they complete or they return one of these.
#[derive(Error, Debug)]
pub enum SimError {
    // === Dimension errors ===
    /// Two vectors or matrices that must align in size do not.
    #[error("operands must be of the same size (context: {context})")]
    SizeMismatch { context: String },

    // === Resource-allocation input errors ===
    /// A process index does not address a row of the supplied matrices.
    #[error("process index {index} is out of range ({num_processes} processes)")]
    ProcessOutOfRange { index: usize, num_processes: usize },

    // === Disk-scheduling input errors ===
    /// Cylinder count must be positive.
    #[error("number of cylinders must be greater than 0; it is {value}")]
    NonPositiveCylinders { value: i64 },

    /// The request queue is empty.
    #[error("reference string must not be empty")]
    EmptyReferenceString,

    /// A requested cylinder lies outside the disk.
    #[error("reference string contains out-of-range cylinder {cylinder} (disk has {num_cylinders} cylinders)")]
    CylinderOutOfRange { cylinder: u32, num_cylinders: u32 },

    /// The starting head position lies outside the disk.
    #[error("starting cylinder {cylinder} is out of range (disk has {num_cylinders} cylinders)")]
    StartingCylinderOutOfRange { cylinder: u32, num_cylinders: u32 },

    // === Page-replacement input errors ===
    /// Frame count must be positive.
    #[error("number of frames must be greater than 0; it is {value}")]
    NonPositiveFrames { value: i64 },

    /// A batch run was asked for a descending frame-count range.
    #[error("invalid range of number of frames: {start} to {end}")]
    InvalidFrameRange { start: usize, end: usize },

    // === Calculator input errors ===
    /// Frame sizes must be a whole power-of-two number of bytes so that the
    /// offset occupies a whole number of address bits.
    #[error("frame size must be a power-of-two number of bytes; it is {bytes} B")]
    FrameSizeNotPowerOfTwo { bytes: String },

    /// A size or count that must be positive is not.
    #[error("{what} must be greater than 0")]
    NonPositive { what: &'static str },

    // === Parse errors ===
    /// A memory-size string used a unit outside the fixed scale.
    #[error("invalid memory size unit: {unit}")]
    UnknownUnit { unit: String },

    /// A memory-size amount failed to parse as a decimal number.
    #[error("invalid memory size amount: {amount}")]
    InvalidAmount { amount: String },

    /// A reference-string token failed to parse as a number.
    #[error("invalid reference string token: {token}")]
    InvalidToken { token: String },

    /// An unrecognized separator identifier.
    #[error("unknown reference string separator: {id}")]
    UnknownSeparator { id: String },

    /// An unrecognized algorithm identifier.
    #[error("unknown algorithm: {id}")]
    UnknownAlgorithm { id: String },

    // === Internal errors ===
    /// An invariant the simulator itself must uphold was violated. This is a
    /// defect in the simulator, not in the input.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Coarse error category, used for exit codes and display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Mismatched vector/matrix dimensions.
    Dimension,
    /// Input rejected by fail-fast validation.
    InvalidInput,
    /// Raw text that could not be parsed.
    Parse,
    /// A broken internal invariant (simulator defect).
    Internal,
}

impl SimError {
    /// Map this error to its category.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::SizeMismatch { .. } => ErrorCategory::Dimension,
            Self::ProcessOutOfRange { .. }
            | Self::NonPositiveCylinders { .. }
            | Self::EmptyReferenceString
            | Self::CylinderOutOfRange { .. }
            | Self::StartingCylinderOutOfRange { .. }
            | Self::NonPositiveFrames { .. }
            | Self::InvalidFrameRange { .. }
            | Self::FrameSizeNotPowerOfTwo { .. }
            | Self::NonPositive { .. } => ErrorCategory::InvalidInput,
            Self::UnknownUnit { .. }
            | Self::InvalidAmount { .. }
            | Self::InvalidToken { .. }
            | Self::UnknownSeparator { .. }
            | Self::UnknownAlgorithm { .. } => ErrorCategory::Parse,
            Self::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// Whether the caller can fix this by correcting the input.
    pub const fn is_user_fixable(&self) -> bool {
        !matches!(self.category(), ErrorCategory::Internal)
    }

    /// Process exit code for CLI use (sysexits-style).
    pub const fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Dimension | ErrorCategory::InvalidInput | ErrorCategory::Parse => 65,
            ErrorCategory::Internal => 70,
        }
    }

    /// Create a size-mismatch error with the given operand context.
    pub fn size_mismatch(context: impl Into<String>) -> Self {
        Self::SizeMismatch {
            context: context.into(),
        }
    }

    /// Create an internal-consistency error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias using `SimError`.
pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mismatch_display() {
        let err = SimError::size_mismatch("Need[n][m] vs Work[m]");
        assert_eq!(
            err.to_string(),
            "operands must be of the same size (context: Need[n][m] vs Work[m])"
        );
        assert_eq!(err.category(), ErrorCategory::Dimension);
    }

    #[test]
    fn out_of_range_display() {
        let err = SimError::CylinderOutOfRange {
            cylinder: 250,
            num_cylinders: 200,
        };
        assert_eq!(
            err.to_string(),
            "reference string contains out-of-range cylinder 250 (disk has 200 cylinders)"
        );
    }

    #[test]
    fn categories() {
        assert_eq!(
            SimError::EmptyReferenceString.category(),
            ErrorCategory::InvalidInput
        );
        assert_eq!(
            SimError::UnknownUnit { unit: "XB".into() }.category(),
            ErrorCategory::Parse
        );
        assert_eq!(
            SimError::internal("no victim frame").category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn user_fixable() {
        assert!(SimError::NonPositiveFrames { value: 0 }.is_user_fixable());
        assert!(SimError::UnknownAlgorithm { id: "scam".into() }.is_user_fixable());
        assert!(!SimError::internal("bug").is_user_fixable());
    }

    #[test]
    fn exit_codes() {
        assert_eq!(SimError::EmptyReferenceString.exit_code(), 65);
        assert_eq!(SimError::size_mismatch("a vs b").exit_code(), 65);
        assert_eq!(SimError::internal("bug").exit_code(), 70);
    }
}
