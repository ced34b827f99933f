use std::fmt;
use std::io;
use std::path::PathBuf;

use services::{LoadState, QuizWorkflow, SourceConfig};
use tracing_subscriber::EnvFilter;

mod render;
mod shell;

use render::Style;
use shell::Shell;

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} value must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--file <path> | --url <base_url> | --sample]");
    eprintln!();
    eprintln!("Without flags the built-in sample quiz is played.");
    eprintln!("--url fetches the document from <base_url>/quiz.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_USE_SAMPLE, QUIZ_FILE, QUIZ_API_URL, RUST_LOG");
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    source: SourceConfig,
    help: bool,
}

impl Args {
    /// Flags override `fallback`, which normally comes from the environment.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        fallback: SourceConfig,
    ) -> Result<Self, ArgsError> {
        let mut source = fallback;
        let mut help = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" => {
                    source = SourceConfig::File(PathBuf::from(require_value(args, "--file")?));
                }
                "--url" => {
                    source = SourceConfig::Http {
                        base_url: require_value(args, "--url")?,
                    };
                }
                "--sample" => source = SourceConfig::Sample,
                "--help" | "-h" => help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { source, help })
    }
}

fn init_tracing() {
    // Logs go to stderr so they never interleave with prompts on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv, SourceConfig::from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    if args.help {
        print_usage();
        return Ok(());
    }

    init_tracing();

    let source = args.source.into_source();
    tracing::info!(source = %source.describe(), "loading quiz");

    let mut workflow = QuizWorkflow::new();
    if let LoadState::Failed(failure) = workflow.load(source.as_ref()).await {
        return Err(failure.clone().into());
    }
    let play = workflow
        .play_mut()
        .ok_or("quiz finished loading without a play session")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), Style::detect()).run(play)?;
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // Binary glue: the error is reported once, here.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
