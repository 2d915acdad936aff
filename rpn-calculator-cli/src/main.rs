use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::info;
use rpn_calculator::interpreter::{calc, convert, tokens_to_string};

/// Calculates the value of the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to calculate, e.g. "(10 + 5) * 2"
    expression: String,

    /// Print the expression in postfix notation instead of calculating it
    #[clap(long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if args.postfix {
        let postfix_tokens = convert(&args.expression)
            .with_context(|| format!("could not convert expression {:?}", args.expression))?;
        println!("{}", tokens_to_string(&postfix_tokens)?);
        return Ok(());
    }

    info!("calculating {:?}", args.expression);
    let value = calc(&args.expression)
        .with_context(|| format!("could not calculate expression {:?}", args.expression))?;
    println!("{}", value);
    Ok(())
}
