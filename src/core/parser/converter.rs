//! Shunting-yard implementation
//! One pass over the infix sequence with a token stack for operators,
//! functions, and open parens.

use super::ParseError;
use crate::core::lexer::Token;
use crate::core::registry;

/// Infix-to-postfix converter. Consumes the input read-only and owns its
/// output until handed to the evaluator.
pub struct Converter<'a> {
    input: &'a [Token],
    stack: Vec<Token>,
    output: Vec<Token>,
}

fn precedence_of(symbol: char) -> u8 {
    registry::operator_spec(symbol)
        .map(|spec| spec.precedence)
        .unwrap_or(0)
}

fn right_associative(symbol: char) -> bool {
    registry::operator_spec(symbol).is_some_and(|spec| spec.right_associative)
}

impl<'a> Converter<'a> {
    /// Create a converter over the given token sequence
    pub fn new(input: &'a [Token]) -> Self {
        Self {
            input,
            stack: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Run the conversion, producing the postfix sequence.
    pub fn run(mut self) -> Result<Vec<Token>, ParseError> {
        for index in 0..self.input.len() {
            let token = self.input[index].clone();
            match token {
                Token::Number(_) | Token::Constant(_) => self.output.push(token),
                Token::Function(_) => self.stack.push(token),
                Token::Comma => self.drain_argument()?,
                Token::Operator(symbol) => {
                    if self.is_unary(index) {
                        let name = if symbol == '+' { "uplus" } else { "uminus" };
                        self.stack.push(Token::Function(name.to_string()));
                    } else {
                        self.push_operator(symbol);
                    }
                }
                Token::LeftParen => self.stack.push(token),
                Token::RightParen => self.close_group()?,
            }
        }
        self.finish()
    }

    /// `+`/`-` is unary at expression start, or right after an operator,
    /// an opening paren, a comma, or a function name.
    fn is_unary(&self, index: usize) -> bool {
        let Token::Operator(symbol) = &self.input[index] else {
            return false;
        };
        if !matches!(*symbol, '+' | '-') {
            return false;
        }
        if index == 0 {
            return true;
        }
        matches!(
            self.input[index - 1],
            Token::Operator(_) | Token::LeftParen | Token::Comma | Token::Function(_)
        )
    }

    /// Pop stacked operators to output until the enclosing `(`, which is
    /// left in place for the closing paren to consume.
    fn drain_argument(&mut self) -> Result<(), ParseError> {
        while let Some(top) = self.stack.pop() {
            if matches!(top, Token::LeftParen) {
                self.stack.push(top);
                return Ok(());
            }
            self.output.push(top);
        }
        Err(ParseError::MisplacedComma)
    }

    /// Pop everything that outranks the incoming binary operator, then
    /// push it. Functions on the stack always outrank an operator.
    fn push_operator(&mut self, symbol: char) {
        let precedence = precedence_of(symbol);
        let right_assoc = right_associative(symbol);

        while let Some(top) = self.stack.pop() {
            let outranked = match &top {
                Token::Operator(top_symbol) => {
                    let top_precedence = precedence_of(*top_symbol);
                    if right_assoc {
                        precedence < top_precedence
                    } else {
                        precedence <= top_precedence
                    }
                }
                Token::Function(_) => true,
                _ => false,
            };
            if outranked {
                self.output.push(top);
            } else {
                self.stack.push(top);
                break;
            }
        }
        self.stack.push(Token::Operator(symbol));
    }

    /// Pop to output until the matching `(`; then a function sitting
    /// directly below it closes its argument list.
    fn close_group(&mut self) -> Result<(), ParseError> {
        loop {
            match self.stack.pop() {
                Some(Token::LeftParen) => break,
                Some(token) => self.output.push(token),
                None => return Err(ParseError::MismatchedParens),
            }
        }
        if matches!(self.stack.last(), Some(Token::Function(_))) {
            if let Some(function) = self.stack.pop() {
                self.output.push(function);
            }
        }
        Ok(())
    }

    /// Drain the remaining stack; any leftover paren is a grouping error.
    fn finish(mut self) -> Result<Vec<Token>, ParseError> {
        while let Some(top) = self.stack.pop() {
            if matches!(top, Token::LeftParen | Token::RightParen) {
                return Err(ParseError::MismatchedParens);
            }
            self.output.push(top);
        }
        Ok(self.output)
    }
}
