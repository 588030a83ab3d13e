use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use postfix_translator::translator::{symbols_to_string_separated, translate, translate_checked};

/// Translates an infix arithmetic expression to postfix (reverse Polish) notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to translate, e.g. "1+2*(3-4)"
    expression: String,

    /// Reject malformed expressions instead of translating them as well as possible
    #[clap(long)]
    strict: bool,

    /// Text to print between the symbols of the translated expression
    #[clap(long, default_value = "")]
    separator: String,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    log::info!("Translating {:?}", args.expression);
    let infix_symbols: Vec<char> = args.expression.chars().collect();
    let postfix_symbols = if args.strict {
        translate_checked(infix_symbols)
            .with_context(|| format!("Could not translate {:?}", args.expression))?
    } else {
        translate(infix_symbols)
    };

    println!(
        "{}",
        symbols_to_string_separated(postfix_symbols, &args.separator)?
    );
    Ok(())
}
