use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::{Pow, Signed, ToPrimitive, Zero};

use crate::error::RuntimeError;

/// Represents a numeric value: either an arbitrary-precision integer or an
/// IEEE 754 double.
///
/// Integer numbers always carry a float rendition computed at construction,
/// so mixed arithmetic never has to re-derive it. The float rendition of an
/// integer too large for `f64` saturates to infinity, mirroring the usual
/// big-integer behavior.
///
/// Arithmetic stays in the integer domain whenever both operands are
/// integers; any float operand makes the result a float. A value that was
/// parsed with a decimal point is a float and stays one, so `3.0` renders as
/// `3.0`, never `3`. The one place a result moves back into the integer
/// domain is exact integer division.
#[derive(Debug, Clone)]
pub enum Number {
    /// An unbounded integer together with its cached float rendition.
    Integer {
        /// The integer itself.
        value: BigInt,
        /// The nearest `f64`, saturating to infinity.
        float: f64,
    },
    /// A double-precision floating point number.
    Float(f64),
}

impl Number {
    /// Creates an integer number from a big integer, caching its float
    /// rendition.
    #[must_use]
    pub fn from_bigint(value: BigInt) -> Self {
        let float = value.to_f64().unwrap_or_else(|| {
                                      if value.is_negative() {
                                          f64::NEG_INFINITY
                                      } else {
                                          f64::INFINITY
                                      }
                                  });
        Self::Integer { value, float }
    }

    /// Creates an integer number from a machine integer.
    #[must_use]
    pub fn from_int(value: i64) -> Self {
        Self::from_bigint(BigInt::from(value))
    }

    /// Creates a float number. The value stays float-kind even when it has no
    /// fractional part.
    #[must_use]
    pub const fn from_float(value: f64) -> Self {
        Self::Float(value)
    }

    /// Parses a string as a number.
    ///
    /// A string containing a `.` is parsed as a float; anything else is
    /// parsed as an arbitrary-precision integer, so integers of any magnitude
    /// round-trip exactly.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidNumber` for a malformed float and
    /// `RuntimeError::InvalidInteger` for a malformed integer.
    pub fn parse(text: &str) -> Result<Self, RuntimeError> {
        if text.contains('.') {
            return text.parse::<f64>()
                       .map(Self::from_float)
                       .map_err(|_| RuntimeError::InvalidNumber { text: text.to_string() });
        }
        text.parse::<BigInt>()
            .map(Self::from_bigint)
            .map_err(|_| RuntimeError::InvalidInteger { text: text.to_string() })
    }

    /// Returns the float rendition of the number. Every number has one.
    #[must_use]
    pub const fn float(&self) -> f64 {
        match self {
            Self::Integer { float, .. } => *float,
            Self::Float(value) => *value,
        }
    }

    /// Returns the integer rendition of the number, if it is integer-kind.
    #[must_use]
    pub const fn integer(&self) -> Option<&BigInt> {
        match self {
            Self::Integer { value, .. } => Some(value),
            Self::Float(_) => None,
        }
    }

    /// Returns `true` if the number is integer-kind.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer { .. })
    }

    /// Returns `true` if the number is zero, using kind-specific comparison.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer { value, .. } => value.is_zero(),
            Self::Float(value) => *value == 0.0,
        }
    }

    /// Adds two numbers. The sum is an integer iff both operands are.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        match (self.integer(), other.integer()) {
            (Some(left), Some(right)) => Self::from_bigint(left + right),
            _ => Self::Float(self.float() + other.float()),
        }
    }

    /// Subtracts `other` from `self`. The difference is an integer iff both
    /// operands are.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        match (self.integer(), other.integer()) {
            (Some(left), Some(right)) => Self::from_bigint(left - right),
            _ => Self::Float(self.float() - other.float()),
        }
    }

    /// Multiplies two numbers. The product is an integer iff both operands
    /// are.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        match (self.integer(), other.integer()) {
            (Some(left), Some(right)) => Self::from_bigint(left * right),
            _ => Self::Float(self.float() * other.float()),
        }
    }

    /// Divides `self` by `other`.
    ///
    /// When both operands are integers and the divisor divides the dividend,
    /// the quotient is an integer; any inexact division produces a float.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` when `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self, RuntimeError> {
        if other.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }
        if let (Some(left), Some(right)) = (self.integer(), other.integer()) {
            if (left % right).is_zero() {
                return Ok(Self::from_bigint(left / right));
            }
        }
        Ok(Self::Float(self.float() / other.float()))
    }

    /// Returns the remainder of dividing `self` by `other`. The remainder is
    /// an integer iff both operands are.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` when `other` is zero.
    pub fn modulo(&self, other: &Self) -> Result<Self, RuntimeError> {
        if other.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }
        match (self.integer(), other.integer()) {
            (Some(left), Some(right)) => Ok(Self::from_bigint(left % right)),
            _ => Ok(Self::Float(self.float() % other.float())),
        }
    }

    /// Raises `self` to the power of `other`.
    ///
    /// Integer base and non-negative integer exponent stay in the integer
    /// domain; every other combination goes through `f64::powf`.
    #[must_use]
    pub fn pow(&self, other: &Self) -> Self {
        if let (Some(base), Some(exponent)) = (self.integer(), other.integer())
           && !exponent.is_negative()
           && let Some(exponent) = exponent.to_u32()
        {
            return Self::from_bigint(Pow::pow(base, exponent));
        }
        Self::Float(self.float().powf(other.float()))
    }

    /// Compares two numbers, using big-integer comparison when both sides
    /// are integers and float comparison otherwise.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        if let (Some(left), Some(right)) = (self.integer(), other.integer()) {
            return left.cmp(right);
        }

        let (left, right) = (self.float(), other.float());
        if left < right {
            Ordering::Less
        } else if left > right {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl std::fmt::Display for Number {
    /// Integers render with no decimal point. Floats render in the shortest
    /// form that reads back as the same float, keeping a trailing `.0` for
    /// whole values so the kind stays visible.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer { value, .. } => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
        }
    }
}
