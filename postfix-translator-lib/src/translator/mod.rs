pub mod context;
pub mod maybe;
pub mod operator;
pub mod stack;
pub mod symbol;
pub mod validator;

use crate::translator::context::PostfixContext;
use crate::translator::symbol::Symbol;
use anyhow::{Context, Result};
use string_builder::Builder;

pub use validator::{translate_checked, translate_text_checked, validate};

/// Translates an infix expression into postfix (reverse Polish) notation.
///
/// # Arguments
///
/// * `infix_symbols`: The symbols of the expression, in infix order. Every digit is
///   its own operand.
///
/// returns: The same symbols in postfix order, without parentheses.
///
/// # Examples
///
/// ```
/// use postfix_translator::translator::translate;
///
/// let postfix = translate("1+2*3".chars());
/// assert_eq!(postfix, vec!['1', '2', '3', '*', '+']);
/// ```
pub fn translate(infix_symbols: impl IntoIterator<Item = Symbol>) -> Vec<Symbol> {
    let context = infix_symbols
        .into_iter()
        .fold(PostfixContext::new(), |mut context, symbol| {
            context.process_symbol(symbol);
            context
        });
    let postfix_symbols = context.extract_result();
    log::debug!("Translated to {:?}", postfix_symbols);
    postfix_symbols
}

/// Translates an infix expression written as text, one symbol per character.
///
/// # Examples
///
/// ```
/// use postfix_translator::translator::translate_text;
///
/// assert_eq!(translate_text("1*(2+3)"), "123+*");
/// ```
pub fn translate_text(text: &str) -> String {
    symbols_to_string(translate(text.chars()))
}

/// Joins symbols into text, one character per symbol.
pub fn symbols_to_string(symbols: Vec<Symbol>) -> String {
    symbols.into_iter().collect()
}

/// Joins symbols into text, with `separator` between each pair of symbols.
///
/// # Examples
///
/// ```
/// use postfix_translator::translator::symbols_to_string_separated;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let text = symbols_to_string_separated(vec!['1', '2', '+'], " ")?;
/// assert_eq!(text, "1 2 +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn symbols_to_string_separated(symbols: Vec<Symbol>, separator: &str) -> Result<String> {
    let mut builder = Builder::new(symbols.len() * (1 + separator.len()));

    for (index, symbol) in symbols.into_iter().enumerate() {
        if index > 0 {
            builder.append(separator);
        }
        builder.append(symbol);
    }

    builder.string().context("Failed to build symbol string")
}

#[cfg(test)]
mod translator_tests {
    use super::*;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn empty_expression_translates_to_nothing() {
        assert_eq!(translate(Vec::new()), Vec::<Symbol>::new());
    }

    #[test]
    fn single_operand_translates_to_itself() {
        assert_eq!(translate(vec!['1']), vec!['1']);
    }

    #[parameterized(operands = { "0", "42", "0123456789", "999" })]
    fn operands_without_operators_translate_to_themselves(operands: &str) {
        use pretty_assertions::assert_eq;
        assert_eq!(translate_text(operands), operands);
    }

    #[test]
    fn higher_precedence_operator_is_applied_first() {
        init_logger();
        assert_eq!(
            translate(vec!['1', '+', '2', '*', '3']),
            vec!['1', '2', '3', '*', '+']
        );
    }

    #[test]
    fn operators_are_applied_left_to_right() {
        assert_eq!(
            translate(vec!['2', '*', '3', '+', '1']),
            vec!['2', '3', '*', '1', '+']
        );
    }

    #[test]
    fn parentheses_group_sub_expressions() {
        assert_eq!(
            translate(vec!['1', '*', '(', '2', '+', '3', ')']),
            vec!['1', '2', '3', '+', '*']
        );
    }

    #[parameterized(
    infix = {
    "1+2*3",
    "2*3+1",
    "1-2-3",
    "8/4/2",
    "1+2*3-4",
    "1*(2+3)",
    "(1+2)*(3-4)",
    "1+((2+3)*4)",
    "((1))",
    "1+2*3/(4-5)",
    },
    expected_postfix = {
    "123*+",
    "23*1+",
    "12-3-",
    "84/2/",
    "123*+4-",
    "123+*",
    "12+34-*",
    "123+4*+",
    "1",
    "123*45-/+",
    }
    )]
    fn translate_text_returns_correct_postfix(infix: &str, expected_postfix: &str) {
        use pretty_assertions::assert_eq;
        init_logger();
        assert_eq!(translate_text(infix), expected_postfix);
    }

    #[test]
    fn unrecognized_symbols_are_ignored() {
        assert_eq!(translate_text("1 + 2 * x3"), "123*+");
    }

    #[test]
    fn unmatched_close_parenthesis_does_not_fail() {
        assert_eq!(translate_text("1+2)*3"), "12+3*");
    }

    #[test]
    fn unmatched_open_parenthesis_is_left_in_output() {
        assert_eq!(translate_text("(1+2"), "12+(");
    }

    #[test]
    fn each_translation_starts_from_a_fresh_context() {
        let first = translate_text("1+(2");
        let second = translate_text("3*4");

        assert_eq!(first, "12(+");
        assert_eq!(second, "34*");
    }

    #[test]
    fn symbols_are_joined_with_separator() {
        let text = symbols_to_string_separated(vec!['1', '2', '3', '*', '+'], " ").unwrap();
        assert_eq!(text, "1 2 3 * +");
    }

    #[test]
    fn joining_no_symbols_gives_empty_text() {
        assert_eq!(symbols_to_string(Vec::new()), "");
        assert_eq!(symbols_to_string_separated(Vec::new(), ", ").unwrap(), "");
    }
}
