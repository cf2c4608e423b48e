use std::error::Error;
use std::fmt::{self, Display};
use std::num::ParseIntError;

/// The argument given to the factorial could not be accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The value parsed, but it is below zero.
    Negative(i64),
    /// The text is not a base-10 integer that fits in an `i64`.
    NotAnInteger {
        input: String,
        reason: ParseIntError,
    },
    /// The value is above the ceiling configured on the calculator.
    AboveLimit { n: u64, limit: u64 },
}

impl Error for InvalidArgument {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InvalidArgument::NotAnInteger { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidArgument::Negative(_) => {
                write!(f, "Factorial is only defined for non-negative integers.")
            }
            InvalidArgument::NotAnInteger { input, reason } => {
                write!(f, "`{}` is not an integer: {}", input, reason)
            }
            InvalidArgument::AboveLimit { n, limit } => {
                write!(f, "{}! is above the configured limit of {}", n, limit)
            }
        }
    }
}

impl InvalidArgument {
    pub(crate) fn not_an_integer(input: &str, reason: ParseIntError) -> Self {
        InvalidArgument::NotAnInteger {
            input: input.to_owned(),
            reason,
        }
    }
}
