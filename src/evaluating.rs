use crate::error_handling::*;
use crate::parsing::*;
use tracing::debug;

/// Parenthesis nesting allowed before evaluation gives up.
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorConfig {
    pub max_depth: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Evaluates arithmetic expressions.
///
/// Holds configuration only; every call owns its own parser, so one evaluator
/// can be reused and shared freely.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    pub fn evaluate(&self, expression: &str) -> Result<f64> {
        debug!(expression, "evaluating");
        let mut parser = Parser::new(expression, self.config.max_depth);
        let outcome = parser.expression().and_then(|value| finish(&parser, value));
        match &outcome {
            Ok(value) => debug!(value, "evaluated"),
            Err(error) => debug!(%error, "evaluation failed"),
        }
        outcome
    }
}

/// Rejects anything left over after a complete expression.
fn finish(parser: &Parser, value: f64) -> Result<f64> {
    let cursor = parser.cursor();
    match cursor.peek() {
        Some(character) => Err(CalcError::TrailingInput {
            character,
            position: cursor.position(),
        }),
        None => Ok(value),
    }
}

/// Evaluates `expression` with the default configuration.
pub fn evaluate(expression: &str) -> Result<f64> {
    Evaluator::default().evaluate(expression)
}
