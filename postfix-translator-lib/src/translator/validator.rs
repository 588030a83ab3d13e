use crate::translator::symbol::{Symbol, SymbolClass};
use crate::translator::translate;
use anyhow::{bail, Context, Result};

/// Checks that the symbols form a well-formed infix expression.
///
/// Every symbol has to be a digit, an operator or a parenthesis, parentheses have to
/// be balanced, and operands and operators have to alternate. An empty expression is
/// well-formed.
pub fn validate(infix_symbols: &[Symbol]) -> Result<()> {
    let mut expects_operand = true;
    let mut open_parentheses = 0usize;

    for (position, &symbol) in infix_symbols.iter().enumerate() {
        let class = Option::<SymbolClass>::from(SymbolClass::of(symbol))
            .with_context(|| format!("Unrecognized symbol {:?} at position {}", symbol, position))?;
        match class {
            SymbolClass::Operand => {
                if !expects_operand {
                    bail!("Unexpected operand {:?} at position {}", symbol, position);
                }
                expects_operand = false;
            }
            SymbolClass::Operator(_) => {
                if expects_operand {
                    bail!("Unexpected operator {:?} at position {}", symbol, position);
                }
                expects_operand = true;
            }
            SymbolClass::OpenParenthesis => {
                if !expects_operand {
                    bail!("Unexpected open parenthesis at position {}", position);
                }
                open_parentheses += 1;
            }
            SymbolClass::CloseParenthesis => {
                if open_parentheses == 0 {
                    bail!("Mismatched parenthesis at position {}", position);
                }
                if expects_operand {
                    bail!("Unexpected close parenthesis at position {}", position);
                }
                open_parentheses -= 1;
            }
        }
    }

    if open_parentheses > 0 {
        bail!("Mismatched parenthesis: {} unclosed", open_parentheses);
    }
    if expects_operand && !infix_symbols.is_empty() {
        bail!("Expression ends with an operator");
    }
    Ok(())
}

/// Translates the symbols to postfix notation, but only if they form a well-formed
/// infix expression.
pub fn translate_checked(infix_symbols: Vec<Symbol>) -> Result<Vec<Symbol>> {
    validate(&infix_symbols).context("Invalid infix expression")?;
    Ok(translate(infix_symbols))
}

/// Text version of [`translate_checked`].
///
/// # Examples
///
/// ```
/// use postfix_translator::translator::translate_text_checked;
///
/// assert_eq!(translate_text_checked("1+2*3").unwrap(), "123*+");
/// assert!(translate_text_checked("(1+2").is_err());
/// ```
pub fn translate_text_checked(text: &str) -> Result<String> {
    let postfix_symbols = translate_checked(text.chars().collect())
        .with_context(|| format!("Could not translate {:?}", text))?;
    Ok(postfix_symbols.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translator::translate_text;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    fn symbols(text: &str) -> Vec<Symbol> {
        text.chars().collect()
    }

    #[parameterized(infix = { "", "1", "1+2", "1*(2+3)", "((1))", "(1+2)*(3-4)/5" })]
    fn well_formed_expressions_are_accepted(infix: &str) {
        validate(&symbols(infix)).unwrap();
    }

    #[parameterized(
    infix = { "1+x", "(1+2", "1+2)", "1)+(2", "12", "1++2", "+1", "1+", "()", "1(2)", "(+1)" },
    expected_message = {
    "Unrecognized symbol 'x' at position 2",
    "Mismatched parenthesis: 1 unclosed",
    "Mismatched parenthesis at position 3",
    "Mismatched parenthesis at position 1",
    "Unexpected operand '2' at position 1",
    "Unexpected operator '+' at position 2",
    "Unexpected operator '+' at position 0",
    "Expression ends with an operator",
    "Unexpected close parenthesis at position 1",
    "Unexpected open parenthesis at position 1",
    "Unexpected operator '+' at position 1",
    }
    )]
    fn malformed_expressions_are_rejected(infix: &str, expected_message: &str) {
        use pretty_assertions::assert_eq;
        let error = validate(&symbols(infix)).expect_err("Should return Err");
        assert_eq!(error.to_string(), expected_message);
    }

    #[parameterized(infix = { "1+2*3", "2*3+1", "1*(2+3)", "1+((2+3)*4)", "8/4/2" })]
    fn checked_translation_agrees_with_translation(infix: &str) {
        use pretty_assertions::assert_eq;
        assert_eq!(translate_text_checked(infix).unwrap(), translate_text(infix));
    }

    #[test]
    fn checked_translation_reports_the_expression() {
        let error = translate_text_checked("1+2)").expect_err("Should return Err");

        assert_eq!(error.to_string(), "Could not translate \"1+2)\"");
        assert_eq!(
            error.root_cause().to_string(),
            "Mismatched parenthesis at position 3"
        );
    }

    #[test]
    fn checked_translation_of_empty_expression_is_empty() {
        assert_eq!(translate_checked(Vec::new()).unwrap(), Vec::<Symbol>::new());
    }
}
