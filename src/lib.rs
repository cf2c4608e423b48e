//! `factorial` computes exact factorials of non-negative integers.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use factorial::factorial::Calculator;
//! use factorial::repl::Repl;
//!
//! let value = Calculator::new().limit(Some(1000)).compute(20).unwrap();
//! assert_eq!(value.to_string(), "2432902008176640000");
//!
//! let mut output = Vec::new();
//! Repl::new().prompt("").run(Cursor::new("5\n"), &mut output).unwrap();
//! assert_eq!(output, b"5! = 120\n");
//! ```
#[macro_use]
extern crate log;

pub mod directories;
pub mod error;
pub mod factorial;
pub mod repl;

pub use crate::error::InvalidArgument;
pub use crate::factorial::factorial;
