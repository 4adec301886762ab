use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("expression ended abruptly at position {position}")]
    UnexpectedEnd { position: usize },

    #[error("unexpected character, '{character}', at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("expected ')' at position {position}{}", describe_found(.found))]
    ExpectedCloseParen { found: Option<char>, position: usize },

    #[error("division by zero at position {position}")]
    DivisionByZero { position: usize },

    #[error("'{literal}' is not a valid number")]
    MalformedNumber {
        literal: String,
        position: usize,
        #[source]
        source: ParseFloatError,
    },

    #[error("did not expect '{character}' at position {position} after a complete expression")]
    TrailingInput { character: char, position: usize },

    #[error("parentheses nested deeper than {limit} levels at position {position}")]
    TooDeeplyNested { limit: usize, position: usize },
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(character) => format!(", found '{character}'"),
        None => ", found end of input".into(),
    }
}

impl CalcError {
    /// Byte offset into the input where the failure was detected.
    pub fn position(&self) -> usize {
        use CalcError::*;
        match self {
            UnexpectedEnd { position }
            | UnexpectedCharacter { position, .. }
            | ExpectedCloseParen { position, .. }
            | DivisionByZero { position }
            | MalformedNumber { position, .. }
            | TrailingInput { position, .. }
            | TooDeeplyNested { position, .. } => *position,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
