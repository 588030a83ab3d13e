use crate::translator::operator::BinaryOperator;
use crate::translator::stack::StackExt;
use crate::translator::symbol::{Symbol, SymbolClass, OPEN_PARENTHESIS};

/// The state of an infix-to-postfix translation in progress.
///
/// Symbols are fed one at a time through [`PostfixContext::process_symbol`], and the
/// finished postfix sequence is taken out with [`PostfixContext::extract_result`].
///
/// Malformed input is not rejected. An unmatched closing parenthesis flushes the
/// whole operator stack, and an unmatched opening parenthesis ends up in the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostfixContext {
    output: Vec<Symbol>,
    operator_stack: Vec<Symbol>,
}

impl PostfixContext {
    pub fn new() -> PostfixContext {
        Self::default()
    }

    /// Resumes a translation from already accumulated sequences.
    /// The top of `operator_stack` is its last element.
    pub fn from_parts(output: Vec<Symbol>, operator_stack: Vec<Symbol>) -> PostfixContext {
        PostfixContext {
            output,
            operator_stack,
        }
    }

    pub fn output(&self) -> &[Symbol] {
        &self.output
    }

    pub fn operator_stack(&self) -> &[Symbol] {
        &self.operator_stack
    }

    /// Moves the next symbol of the infix expression into the context.
    ///
    /// # Arguments
    ///
    /// * `symbol`: The symbol to process. Symbols that are neither digits, operators
    ///   nor parentheses are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use postfix_translator::translator::context::PostfixContext;
    ///
    /// let mut context = PostfixContext::new();
    /// for symbol in "1+2".chars() {
    ///     context.process_symbol(symbol);
    /// }
    /// assert_eq!(context.extract_result(), vec!['1', '2', '+']);
    /// ```
    pub fn process_symbol(&mut self, symbol: Symbol) {
        SymbolClass::of(symbol).evaluate(
            || log::trace!("Ignoring unrecognized symbol {:?}", symbol),
            |class| {
                match class {
                    SymbolClass::Operand => self.output.push(symbol),
                    SymbolClass::Operator(operator) => self.stack_operator(symbol, operator),
                    SymbolClass::OpenParenthesis => self.operator_stack.push(symbol),
                    SymbolClass::CloseParenthesis => self.close_parenthesis(),
                }
                log::trace!(
                    "{:?} as {}: output {:?}, operators {:?}",
                    symbol,
                    class,
                    self.output,
                    self.operator_stack
                );
            },
        )
    }

    fn stack_operator(&mut self, symbol: Symbol, incoming: BinaryOperator) {
        self.drain_while(|top| {
            BinaryOperator::from_symbol(*top)
                .map(|stacked| stacked.yields_to(&incoming))
                .get_or_else(false)
        });
        self.operator_stack.push(symbol);
    }

    fn close_parenthesis(&mut self) {
        self.drain_while(|top| *top != OPEN_PARENTHESIS);
        // Discard the open parenthesis.
        self.operator_stack.pop();
    }

    /// Moves symbols from the top of the operator stack to the output for as long as
    /// `predicate` holds for the top symbol. Draining an empty stack does nothing.
    pub fn drain_while(&mut self, predicate: impl FnMut(&Symbol) -> bool) {
        self.operator_stack
            .move_items_to_while(&mut self.output, predicate);
    }

    /// Finishes the translation, moving the remaining operators to the output in the
    /// order they are popped off the stack.
    pub fn extract_result(mut self) -> Vec<Symbol> {
        self.drain_while(|_| true);
        self.output
    }
}
