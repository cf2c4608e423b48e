use crate::error::InvalidArgument;
use num_bigint::BigUint;

/// Parse one line of user input into an integer.
///
/// Surrounding whitespace is ignored and a leading `+` or `-` is accepted.
/// Fractions, exponents and anything that is not base-10 digits are rejected.
pub fn parse_input(text: &str) -> Result<i64, InvalidArgument> {
    let text = text.trim();
    text.parse::<i64>()
        .map_err(|e| InvalidArgument::not_an_integer(text, e))
}

/// `n!` with no ceiling on `n`.
///
/// ```
/// use factorial::factorial;
/// use num_bigint::BigUint;
///
/// assert_eq!(factorial(5).unwrap(), BigUint::from(120u32));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<BigUint, InvalidArgument> {
    Calculator::new().compute(n)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    limit: Option<u64>,
}

impl Calculator {
    pub fn new() -> Self {
        Self { limit: None }
    }

    /// Reject every `n` above `limit`. `None` removes the ceiling.
    pub fn limit(mut self, limit: Option<u64>) -> Self {
        self.limit = limit;
        self
    }

    pub fn compute(&self, n: i64) -> Result<BigUint, InvalidArgument> {
        if n < 0 {
            return Err(InvalidArgument::Negative(n));
        }
        let n = n as u64;
        if let Some(limit) = self.limit {
            if n > limit {
                return Err(InvalidArgument::AboveLimit { n, limit });
            }
        }

        debug!("computing {}!", n);
        let mut result = BigUint::from(1u32);
        if n == 0 || n == 1 {
            return Ok(result);
        }
        for i in 2..=n {
            result *= i;
        }
        debug!("{}! has {} bits", n, result.bits());

        Ok(result)
    }

    /// Parse `text` and compute its factorial, returning the parsed value too.
    pub fn compute_str(&self, text: &str) -> Result<(i64, BigUint), InvalidArgument> {
        let n = parse_input(text)?;
        Ok((n, self.compute(n)?))
    }
}
