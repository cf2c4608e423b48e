//! The read-eval-print step: one line in, one line out.
use crate::error::InvalidArgument;
use crate::factorial::Calculator;
use num_bigint::BigUint;
use std::io::{self, BufRead, Write};

pub const DEFAULT_PROMPT: &str = "Enter a non-negative integer: ";

/// What happened to the line that was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Computed { n: i64, value: BigUint },
    Rejected(InvalidArgument),
}

#[derive(Debug, Clone)]
pub struct Repl {
    prompt: String,
    calculator: Calculator,
    digits_only: bool,
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

impl Repl {
    pub fn new() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_owned(),
            calculator: Calculator::new(),
            digits_only: false,
        }
    }

    pub fn prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn calculator(mut self, calculator: Calculator) -> Self {
        self.calculator = calculator;
        self
    }

    /// Print the number of decimal digits instead of the value itself.
    pub fn digits_only(mut self, digits_only: bool) -> Self {
        self.digits_only = digits_only;
        self
    }

    /// Prompt on `output`, read one line from `input` and answer it.
    ///
    /// End of input counts as an empty line and bytes that are not UTF-8 are
    /// replaced before parsing. Only I/O failures are returned as `Err`; a bad
    /// argument is printed and reported as `Outcome::Rejected`.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<Outcome> {
        write!(output, "{}", self.prompt)?;
        output.flush()?;

        let mut line = Vec::new();
        input.read_until(b'\n', &mut line)?;

        self.eval(&String::from_utf8_lossy(&line), output)
    }

    /// Answer `line` without prompting.
    pub fn eval<W: Write>(&self, line: &str, mut output: W) -> io::Result<Outcome> {
        let outcome = match self.calculator.compute_str(line) {
            Ok((n, value)) => Outcome::Computed { n, value },
            Err(e) => {
                info!("rejected input {:?}: {}", line.trim(), e);
                Outcome::Rejected(e)
            }
        };

        match &outcome {
            Outcome::Computed { n, value } if self.digits_only => {
                writeln!(output, "{}! has {} digits", n, value.to_string().len())?
            }
            Outcome::Computed { n, value } => writeln!(output, "{}! = {}", n, value)?,
            Outcome::Rejected(e) => writeln!(output, "{}", e)?,
        }
        output.flush()?;

        Ok(outcome)
    }
}
