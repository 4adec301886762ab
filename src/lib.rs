//! Evaluates arithmetic expressions over `+ - * /`, parentheses and decimal
//! literals, parsing and computing in a single recursive-descent pass.
//!
//! ```
//! assert_eq!(calc_rs::evaluate("2 + 3 * 4").unwrap(), 14.0);
//! assert!(calc_rs::evaluate("5 / 0").is_err());
//! ```

pub mod error_handling;
pub mod evaluating;
pub mod parsing;
pub mod scanning;

pub use error_handling::{CalcError, Result};
pub use evaluating::{evaluate, Evaluator, EvaluatorConfig, DEFAULT_MAX_DEPTH};
