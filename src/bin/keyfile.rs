use std::path::PathBuf;
use std::process;

use clap::Parser;
use keyfile::report::{InvalidLines, Summary};
use keyfile::{ConfigLoader, DEFAULT_COMMENT_MARKER, DEFAULT_SEPARATOR, ParseResult};
use tracing_subscriber::EnvFilter;

const EXIT_LOAD_ISSUE: i32 = 1;
const EXIT_INVALID_LINES: i32 = 2;

/// Parse a `key = value` config file and report what was found.
#[derive(Debug, Parser)]
#[command(name = "keyfile", version)]
struct Cli {
    /// Config file to parse.
    path: PathBuf,

    /// Trace every entry and list invalid lines.
    #[arg(short, long)]
    debug: bool,

    /// Character that starts a comment line.
    #[arg(long, default_value_t = DEFAULT_COMMENT_MARKER)]
    comment_marker: char,

    /// Character between key and value.
    #[arg(long, default_value_t = DEFAULT_SEPARATOR)]
    separator: char,

    /// Print the parsed entries, sorted by key.
    #[arg(short, long)]
    print: bool,

    /// Exit with status 2 when any line is invalid.
    #[arg(long)]
    deny_invalid: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    process::exit(run(&cli));
}

fn default_log_level(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

fn init_tracing(debug: bool) {
    let default_level = default_log_level(debug);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> i32 {
    let loader = ConfigLoader::new(&cli.path)
        .debug(cli.debug)
        .comment_marker(cli.comment_marker)
        .separator(cli.separator);
    let result = loader.parse();

    if let Some(issue) = &result.issue {
        eprintln!("keyfile: {issue}");
        return EXIT_LOAD_ISSUE;
    }

    print!("{}", render(&result, cli));

    if cli.deny_invalid && result.has_invalid_lines() {
        return EXIT_INVALID_LINES;
    }
    0
}

fn render(result: &ParseResult, cli: &Cli) -> String {
    let mut out = format!(
        "Parsing config file [ {} ], size: {} bytes\n\n{}\n",
        cli.path.display(),
        result.size_bytes,
        Summary::new(result)
    );

    if cli.debug && result.has_invalid_lines() {
        out.push('\n');
        out.push_str(&InvalidLines::new(result).to_string());
        out.push('\n');
    }

    if cli.print {
        out.push('\n');
        for (key, value) in result.sorted_entries() {
            out.push_str(&format!("{key} = {value}\n"));
        }
    }

    out
}
