use crate::translator::maybe::Maybe;
use crate::translator::symbol::Symbol;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// One row of the [`OPERATOR_TABLE`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OperatorEntry {
    pub operator: BinaryOperator,
    pub symbol: Symbol,
    pub precedence: u8,
    pub associativity: Associativity,
}

/// Every operator the translator knows, keyed by its symbol.
pub const OPERATOR_TABLE: [OperatorEntry; 4] = [
    OperatorEntry {
        operator: BinaryOperator::Add,
        symbol: '+',
        precedence: 1,
        associativity: Associativity::Left,
    },
    OperatorEntry {
        operator: BinaryOperator::Subtract,
        symbol: '-',
        precedence: 1,
        associativity: Associativity::Left,
    },
    OperatorEntry {
        operator: BinaryOperator::Multiply,
        symbol: '*',
        precedence: 2,
        associativity: Associativity::Left,
    },
    OperatorEntry {
        operator: BinaryOperator::Divide,
        symbol: '/',
        precedence: 2,
        associativity: Associativity::Left,
    },
];

impl BinaryOperator {
    /// Looks up the operator written as `symbol`.
    pub fn from_symbol(symbol: Symbol) -> Maybe<BinaryOperator> {
        OPERATOR_TABLE
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.operator)
            .into()
    }

    fn entry(&self) -> OperatorEntry {
        match self {
            BinaryOperator::Add => OPERATOR_TABLE[0],
            BinaryOperator::Subtract => OPERATOR_TABLE[1],
            BinaryOperator::Multiply => OPERATOR_TABLE[2],
            BinaryOperator::Divide => OPERATOR_TABLE[3],
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.entry().symbol
    }

    pub fn precedence(&self) -> u8 {
        self.entry().precedence
    }

    pub fn associativity(&self) -> Associativity {
        self.entry().associativity
    }

    pub fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    pub fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Whether this operator, already on the operator stack, has to be moved to
    /// the output before `incoming` can be stacked.
    pub fn yields_to(&self, incoming: &Self) -> bool {
        self.precedence_gt(incoming)
            || (self.precedence_eq(incoming) && incoming.associativity() == Associativity::Left)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
