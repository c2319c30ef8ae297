use std::{
    fs,
    io::{self, Read},
    process::ExitCode,
};

use arrinit::{Mode, config::ParserConfig, parse_with};
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// arrinit parses C-style array initializers such as
/// `{22, [6...8] = 33, [4] = {99}}` and prints the result as JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What to print: the materialized array, the syntax tree or the tokens.
    #[arg(short, long, value_parser = str::parse::<Mode>, default_value_t = Mode::Array)]
    mode: Mode,

    /// Tells arrinit to treat CONTENTS as a file path instead of a program.
    #[arg(short, long)]
    file: bool,

    /// Pretty-print the JSON output.
    #[arg(short, long)]
    pretty: bool,

    /// Largest number of values the materialized array may hold.
    #[arg(long, default_value_t = ParserConfig::default().max_array_len)]
    max_len: usize,

    /// How deeply brace groups may nest.
    #[arg(long, default_value_t = ParserConfig::default().max_depth)]
    max_depth: usize,

    /// Increase logging verbosity (-v, -vv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The program to parse. Read from stdin when omitted.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                     EnvFilter::new(directive_for_verbosity(args.verbose))
                 });
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    let source = match read_source(&args) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input: {e}");
            return ExitCode::FAILURE;
        },
    };

    if source.trim().is_empty() {
        debug!("empty input, nothing to print");
        return ExitCode::SUCCESS;
    }

    let config = ParserConfig::with_max_array_len(args.max_len).with_max_depth(args.max_depth);
    let output = match parse_with(&source, args.mode, &config) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };

    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Failed to render the result: {e}");
            ExitCode::FAILURE
        },
    }
}

fn read_source(args: &Args) -> io::Result<String> {
    match &args.contents {
        Some(path) if args.file => fs::read_to_string(path),
        Some(program) => Ok(program.clone()),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        },
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "arrinit=warn",
        1 => "arrinit=debug",
        _ => "arrinit=trace",
    }
}
