use crate::translator::maybe::Maybe;
use crate::translator::operator::BinaryOperator;
use std::fmt;
use std::fmt::Formatter;

/// A single-character token of an expression.
pub type Symbol = char;

pub const OPEN_PARENTHESIS: Symbol = '(';
pub const CLOSE_PARENTHESIS: Symbol = ')';

/// The role a symbol plays in an expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    Operand,
    Operator(BinaryOperator),
    OpenParenthesis,
    CloseParenthesis,
}

impl SymbolClass {
    /// Classifies `symbol`, checking operand, operator, open and close parenthesis in that order.
    /// Symbols outside the alphabet are not classified.
    pub fn of(symbol: Symbol) -> Maybe<SymbolClass> {
        if symbol.is_ascii_digit() {
            return Maybe::present(SymbolClass::Operand);
        }
        BinaryOperator::from_symbol(symbol)
            .map(SymbolClass::Operator)
            .evaluate(
                || match symbol {
                    OPEN_PARENTHESIS => Maybe::present(SymbolClass::OpenParenthesis),
                    CLOSE_PARENTHESIS => Maybe::present(SymbolClass::CloseParenthesis),
                    _ => Maybe::empty(),
                },
                Maybe::present,
            )
    }

    pub fn is_parenthesis(&self) -> bool {
        matches!(
            self,
            SymbolClass::OpenParenthesis | SymbolClass::CloseParenthesis
        )
    }
}

impl fmt::Display for SymbolClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SymbolClass::Operand => write!(f, "operand"),
            SymbolClass::Operator(operator) => write!(f, "operator {}", operator),
            SymbolClass::OpenParenthesis => write!(f, "open parenthesis"),
            SymbolClass::CloseParenthesis => write!(f, "close parenthesis"),
        }
    }
}
