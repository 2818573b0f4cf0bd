use std::fs;

use clap::Parser;
use reckon::{EvalConfig, evaluate_with_config, interpreter::tokenizer::tokenize};

/// reckon evaluates integer arithmetic expressions with `+`, `-`, `*`, `/`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints every token of the expression before the result.
    #[arg(short, long)]
    tokens: bool,

    /// Maximum nesting depth of parentheses.
    #[arg(long, default_value_t = reckon::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    contents: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };
    let expression = strip_line_ending(&expression);

    if args.tokens {
        match tokenize(expression) {
            Ok(tokens) => {
                for spanned in tokens {
                    println!("{:>4}  {}", spanned.offset, spanned.token);
                }
            },
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    }

    match evaluate_with_config(expression, EvalConfig { max_depth: args.max_depth }) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Removes a single trailing `\n` or `\r\n`, as left by most editors.
fn strip_line_ending(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
