use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use ember::{
    interpreter::{lexer::tokenize, parser::core::parse_program, scope::Scope},
    repl::run_repl,
    run_source,
};
use tracing::Level;

/// ember is an interpreter for a small, dynamically typed expression
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run. Starts the interactive prompt when omitted.
    script: Option<PathBuf>,

    /// Prints the token stream of the script as JSON before running it.
    #[arg(long, requires = "script")]
    dump_tokens: bool,

    /// Prints the parsed program of the script as JSON before running it.
    #[arg(long, requires = "script")]
    dump_ast: bool,

    /// Does not print the `>>> ` prompt in interactive mode.
    #[arg(long)]
    no_prompt: bool,

    /// Increases log verbosity; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .init();

    let Some(path) = args.script.as_deref() else {
        let stdin = io::stdin();
        return match run_repl(stdin.lock(), io::stdout(), io::stderr(), !args.no_prompt) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("I/O error: {e}");
                ExitCode::FAILURE
            },
        };
    };

    let Ok(script) = fs::read_to_string(path) else {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        return ExitCode::FAILURE;
    };

    if args.dump_tokens || args.dump_ast {
        dump(&script, args.dump_tokens, args.dump_ast);
    }

    match run_source(&script, &mut Scope::global()) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Prints the requested intermediate forms of `script`.
///
/// Stage errors are left for the run that follows to report.
fn dump(script: &str, tokens: bool, ast: bool) {
    let Ok(token_list) = tokenize(script) else {
        return;
    };
    if tokens {
        print_json(&token_list);
    }

    if ast && let Ok(program) = parse_program(&token_list) {
        print_json(&program);
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => tracing::warn!(error = %e, "could not serialize dump"),
    }
}
