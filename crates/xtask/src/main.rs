// Developer tasks for playwright-recorder
//
// Usage:
//   cargo xtask translate recording.json
//   cargo xtask translate --expect-timeout 10000 - < recording.json
//
// The input is either a JSON array of recorded actions or one recorded
// action per line (JSON lines). Each protocol call is printed as one JSON line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use playwright_recorder::{ActionInContext, TranslateOptions, Translator};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for playwright-recorder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate recorded actions into protocol calls
    Translate {
        /// Recording file (`-` for stdin)
        input: PathBuf,

        /// Timeout for assertion calls in milliseconds
        #[arg(long)]
        expect_timeout: Option<u64>,

        /// Pretty-print each call instead of one JSON line per call
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Translate {
            input,
            expect_timeout,
            pretty,
        } => translate(&input, expect_timeout, pretty),
    }
}

fn translate(input: &Path, expect_timeout: Option<u64>, pretty: bool) -> Result<()> {
    let source = read_input(input)?;
    let recorded = parse_recording(&source)
        .with_context(|| format!("Failed to parse recording {}", input.display()))?;
    tracing::info!(actions = recorded.len(), "Loaded recording");

    let mut options = TranslateOptions::builder();
    if let Some(timeout) = expect_timeout {
        options = options.expect_timeout(timeout);
    }
    let translator = Translator::new(options.build());

    let calls = translator
        .translate_all(&recorded)
        .context("Failed to translate recording")?;

    for call in calls {
        let json = call.to_json();
        if pretty {
            println!("{}", serde_json::to_string_pretty(&json)?);
        } else {
            println!("{}", json);
        }
    }
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        Ok(source)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))
    }
}

fn parse_recording(source: &str) -> Result<Vec<ActionInContext>> {
    if source.trim_start().starts_with('[') {
        return Ok(ActionInContext::list_from_json(source)?);
    }

    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            ActionInContext::from_json(line)
                .with_context(|| format!("Invalid recorded action on line {}", index + 1))
        })
        .collect()
}
