use thiserror::Error;

/// Errors surfaced by the checked (`safe_*`) operations and by fallible
/// conversions. The plain operators never produce one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ArithError {
    /// The divisor of a division or remainder was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The true result is above the representable range.
    #[error("arithmetic overflow")]
    Overflow,
    /// The true result is below the representable range.
    #[error("arithmetic underflow")]
    Underflow,
    /// Negating the signed minimum, or a nonzero unsigned value.
    #[error("negation overflow")]
    NegationOverflow,
    /// A shift amount of 128 or more was passed to a checked shift.
    #[error("shift amount {0} out of range for a 128-bit value")]
    ShiftOutOfRange(u32),
    /// Square root of a negative signed value.
    #[error("square root of a negative value")]
    NegativeSqrt,
}

/// Result of a checked operation.
pub type SafeResult<T> = Result<T, ArithError>;
