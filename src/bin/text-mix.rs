//! text-mix -- blend two strings from the command line.
//!
//! Usage:
//!   text-mix [--config <file>] [--json] traverse <text1> <text2> <iterations>
//!   text-mix [--config <file>] [--json] mix <text1> <text2> <ratio>
//!   text-mix [--config <file>] [--json] distance <text1> <text2>

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use text_mix::{MixerConfig, TextMixer};
use tracing::info;

const USAGE: &str = "usage: text-mix [--config <file>] [--json] \
    <traverse <text1> <text2> <iterations> | mix <text1> <text2> <ratio> | distance <text1> <text2>>";

#[derive(Debug, Serialize)]
struct Output<T: Serialize> {
    result: T,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the result.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config_path: Option<PathBuf> = None;
    let mut json = false;
    let mut positional = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config requires a file path")?;
                config_path = Some(PathBuf::from(path));
            }
            "--json" => json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ => positional.push(arg),
        }
    }

    let config = match &config_path {
        Some(path) => MixerConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => MixerConfig::default(),
    };
    info!(?config, "text-mix starting");
    let mixer = TextMixer::new(config);

    match positional.as_slice() {
        [cmd, text1, text2, iterations] if cmd == "traverse" => {
            let iterations: usize = iterations
                .parse()
                .with_context(|| format!("invalid iteration count: {iterations}"))?;
            let result = mixer.traverse(text1, text2, iterations)?;
            emit(&result, json)
        }
        [cmd, text1, text2, ratio] if cmd == "mix" => {
            let ratio: f64 = ratio
                .parse()
                .with_context(|| format!("invalid ratio: {ratio}"))?;
            let result = mixer.text_mix(text1, text2, ratio);
            emit(&result, json)
        }
        [cmd, text1, text2] if cmd == "distance" => {
            let result = mixer.distance(text1, text2)?;
            emit(&result, json)
        }
        _ => bail!("{USAGE}"),
    }
}

fn emit<T: Serialize + std::fmt::Display>(result: &T, json: bool) -> Result<()> {
    if json {
        let line = serde_json::to_string(&Output { result }).context("failed to serialize result")?;
        println!("{line}");
    } else {
        println!("{result}");
    }
    Ok(())
}
