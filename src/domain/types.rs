//! Strongly-typed value objects used by the scheduling domain.
//!
//! These wrappers enforce basic invariants (finite, non-negative durations and
//! energy rates) so that once a value reaches the domain layer it can be
//! treated as trusted.
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided number was NaN or infinite.
    #[error("value must be a finite number")]
    NonFinite,
    /// Provided number was below zero.
    #[error("value must not be negative")]
    Negative,
}

/// Macro to generate lightweight newtypes for finite, non-negative quantities.
macro_rules! non_negative_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
        pub struct $name(f64);

        impl $name {
            /// Creates a new value ensuring it is finite and not negative.
            pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
                if !value.is_finite() {
                    Err(TypeConstraintError::NonFinite)
                } else if value < 0.0 {
                    Err(TypeConstraintError::Negative)
                } else {
                    Ok(Self(value))
                }
            }

            /// Returns the raw `f64` backing this value.
            pub const fn get(self) -> f64 {
                self.0
            }
        }
    };
}

non_negative_newtype!(ExecutionTime, "Time a single task occupies its core.");
non_negative_newtype!(EnergyRate, "Energy consumed per unit of time.");

/// Zero-based index of a processor core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoreId(usize);

impl CoreId {
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Returns the raw index backing this identifier.
    pub const fn get(self) -> usize {
        self.0
    }
}
