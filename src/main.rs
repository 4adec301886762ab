use calc_rs::{Evaluator, EvaluatorConfig, DEFAULT_MAX_DEPTH};
use clap::Parser;
use std::io::{BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Evaluates arithmetic expressions built from numbers, + - * / and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Expression to evaluate once; starts an interactive prompt when omitted
    expression: Option<String>,

    /// Deepest parenthesis nesting accepted
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the outcome and reports whether it was a success.
fn report(evaluator: &Evaluator, expression: &str) -> bool {
    match evaluator.evaluate(expression) {
        Ok(value) => {
            println!("Result: {value}");
            true
        }
        Err(e) => {
            println!("Error: {e}");
            false
        }
    }
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}

fn repl(evaluator: &Evaluator) -> std::io::Result<()> {
    prompt()?;
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        report(evaluator, &line);
        prompt()?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "starting");

    let evaluator = Evaluator::new(EvaluatorConfig {
        max_depth: cli.max_depth,
    });

    match cli.expression {
        Some(expression) => {
            if !report(&evaluator, &expression) {
                std::process::exit(1);
            }
        }
        None => {
            if let Err(e) = repl(&evaluator) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
