//! Arithmetic core
//!
//! Pure validation and dispatch logic for the four supported operations.
//! No I/O happens here; callers are responsible for logging and HTTP mapping.

use thiserror::Error;

/// Raised when either raw query value does not parse as a finite number.
///
/// Carries both raw inputs so the caller can log a diagnostic that echoes
/// them; the HTTP-facing message is the fixed `Display` string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid parameters. Both num1 and num2 must be numbers.")]
    NotANumber { num1: String, num2: String },
}

/// Domain errors from applying an operator to validated operands.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    #[error("Division by zero is not allowed.")]
    DivisionByZero,
}

/// The four supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Wire name used in the JSON `operation` field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
        }
    }

    /// Symbol used in log entries (`3 + 4 = 7`).
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator to two validated operands.
    ///
    /// Standard f64 semantics throughout; the only special case is the exact
    /// zero check on the divisor. Near-zero divisors that parsed to a nonzero
    /// value are divided normally.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, OperationError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    Err(OperationError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

/// Parse both raw operands as finite decimal numbers.
///
/// Accepts anything `f64::from_str` accepts except the non-finite spellings
/// (`inf`, `NaN`, ...). Surrounding whitespace is tolerated.
pub fn validate(raw1: &str, raw2: &str) -> Result<(f64, f64), ValidationError> {
    match (parse_finite(raw1), parse_finite(raw2)) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(ValidationError::NotANumber {
            num1: raw1.to_string(),
            num2: raw2.to_string(),
        }),
    }
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
