use crate::error_handling::*;
use crate::scanning::*;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

impl BinaryOperator {
    pub fn from_char(character: char) -> Option<Self> {
        use BinaryOperator::*;
        match character {
            '+' => Some(Addition),
            '-' => Some(Subtraction),
            '*' => Some(Multiplication),
            '/' => Some(Division),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        use BinaryOperator::*;
        match self {
            Addition => '+',
            Subtraction => '-',
            Multiplication => '*',
            Division => '/',
        }
    }

    pub fn is_additive(self) -> bool {
        matches!(self, Self::Addition | Self::Subtraction)
    }

    pub fn is_multiplicative(self) -> bool {
        matches!(self, Self::Multiplication | Self::Division)
    }

    /// Plain IEEE-754 arithmetic; a zero divisor is rejected by the term rule before this runs.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        use BinaryOperator::*;
        match self {
            Addition => left + right,
            Subtraction => left - right,
            Multiplication => left * right,
            Division => left / right,
        }
    }
}

/// Recursive-descent parser that evaluates while it parses.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := number | '(' expression ')'
/// number     := [0-9.]+
/// ```
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, max_depth: usize) -> Self {
        Self {
            cursor: Cursor::new(input),
            depth: 0,
            max_depth,
        }
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Consumes the next operator if `accepts` allows it, returning it with its position.
    fn next_operator(&mut self, accepts: fn(BinaryOperator) -> bool) -> Option<(BinaryOperator, usize)> {
        self.cursor.skip_whitespace();
        let position = self.cursor.position();
        let operator = self
            .cursor
            .peek()
            .and_then(BinaryOperator::from_char)
            .filter(|operator| accepts(*operator))?;
        self.cursor.bump();
        Some((operator, position))
    }

    pub fn expression(&mut self) -> Result<f64> {
        let mut result = self.term()?;
        while let Some((operator, _)) = self.next_operator(BinaryOperator::is_additive) {
            let right = self.term()?;
            trace!(left = result, right, operator = %operator.symbol(), "applying");
            result = operator.apply(result, right);
        }
        Ok(result)
    }

    pub fn term(&mut self) -> Result<f64> {
        let mut result = self.factor()?;
        while let Some((operator, position)) = self.next_operator(BinaryOperator::is_multiplicative) {
            let right = self.factor()?;
            if operator == BinaryOperator::Division && right == 0.0 {
                return Err(CalcError::DivisionByZero { position });
            }
            trace!(left = result, right, operator = %operator.symbol(), "applying");
            result = operator.apply(result, right);
        }
        Ok(result)
    }

    pub fn factor(&mut self) -> Result<f64> {
        self.cursor.skip_whitespace();
        let position = self.cursor.position();
        match self.cursor.peek() {
            None => Err(CalcError::UnexpectedEnd { position }),
            Some('(') => self.parenthesized(),
            Some(character) if is_digit_or_dot(character) => self.number(),
            Some(character) => Err(CalcError::UnexpectedCharacter { character, position }),
        }
    }

    fn parenthesized(&mut self) -> Result<f64> {
        let position = self.cursor.position();
        if self.depth >= self.max_depth {
            return Err(CalcError::TooDeeplyNested {
                limit: self.max_depth,
                position,
            });
        }
        self.cursor.bump();

        self.depth += 1;
        let value = self.expression();
        self.depth -= 1;
        let value = value?;

        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            Some(')') => {
                self.cursor.bump();
                Ok(value)
            }
            found => Err(CalcError::ExpectedCloseParen {
                found,
                position: self.cursor.position(),
            }),
        }
    }

    pub fn number(&mut self) -> Result<f64> {
        self.cursor.skip_whitespace();
        let position = self.cursor.position();
        let literal = self.cursor.take_while(is_digit_or_dot);
        literal.parse().map_err(|source| CalcError::MalformedNumber {
            literal: literal.into(),
            position,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_expression(input: &str) -> Result<f64> {
        Parser::new(input, 8).expression()
    }

    #[test]
    fn operators_are_recognised_by_symbol() {
        for operator in [
            BinaryOperator::Addition,
            BinaryOperator::Subtraction,
            BinaryOperator::Multiplication,
            BinaryOperator::Division,
        ] {
            assert_eq!(BinaryOperator::from_char(operator.symbol()), Some(operator));
        }
        assert_eq!(BinaryOperator::from_char('^'), None);
        assert_eq!(BinaryOperator::from_char('('), None);
    }

    #[test]
    fn operator_classes_do_not_overlap() {
        assert!(BinaryOperator::Addition.is_additive());
        assert!(!BinaryOperator::Addition.is_multiplicative());
        assert!(BinaryOperator::Division.is_multiplicative());
        assert!(!BinaryOperator::Division.is_additive());
    }

    #[test]
    fn expression_stops_before_unconsumed_input() {
        let mut parser = Parser::new("1 + 2 )", 8);
        assert_eq!(parser.expression(), Ok(3.0));
        assert_eq!(parser.cursor().peek(), Some(')'));
        assert_eq!(parser.cursor().position(), 6);
    }

    #[test]
    fn number_consumes_the_whole_literal() {
        let mut parser = Parser::new("  12.5+1", 8);
        assert_eq!(parser.number(), Ok(12.5));
        assert_eq!(parser.cursor().position(), 6);
    }

    #[test]
    fn number_rejects_repeated_dots_as_one_literal() {
        let mut parser = Parser::new("1.2.3", 8);
        match parser.number() {
            Err(CalcError::MalformedNumber { literal, position, .. }) => {
                assert_eq!(literal, "1.2.3");
                assert_eq!(position, 0);
            }
            other => panic!("expected a malformed number, got {other:?}"),
        }
    }

    #[test]
    fn factor_accepts_partial_decimals() {
        assert_eq!(parse_expression(".5"), Ok(0.5));
        assert_eq!(parse_expression("2."), Ok(2.0));
    }

    #[test]
    fn division_by_zero_reports_the_operator_position() {
        assert_eq!(
            parse_expression("4 / (1 - 1)"),
            Err(CalcError::DivisionByZero { position: 2 })
        );
    }

    #[test]
    fn zero_dividend_is_allowed() {
        assert_eq!(parse_expression("0 / 4"), Ok(0.0));
    }

    #[test]
    fn nesting_up_to_the_limit_is_accepted() {
        let input = format!("{}1{}", "(".repeat(8), ")".repeat(8));
        assert_eq!(parse_expression(&input), Ok(1.0));
    }

    #[test]
    fn nesting_past_the_limit_is_rejected() {
        let input = format!("{}1{}", "(".repeat(9), ")".repeat(9));
        assert_eq!(
            parse_expression(&input),
            Err(CalcError::TooDeeplyNested { limit: 8, position: 8 })
        );
    }

    #[test]
    fn depth_is_restored_between_sibling_groups() {
        let group = format!("{}1{}", "(".repeat(8), ")".repeat(8));
        let input = format!("{group} + {group} * {group}");
        assert_eq!(parse_expression(&input), Ok(2.0));
    }

    #[test]
    fn missing_close_paren_reports_what_was_found() {
        assert_eq!(
            parse_expression("(1 + 2"),
            Err(CalcError::ExpectedCloseParen { found: None, position: 6 })
        );
        assert_eq!(
            parse_expression("(1 + 2 x"),
            Err(CalcError::ExpectedCloseParen { found: Some('x'), position: 7 })
        );
    }
}
