use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use grc_vocab_lib::output::{format_entry, render};
use grc_vocab_lib::{
    BetaCode, Cruncher, DefinitionLookup, Definitions, InteractiveResolver, NoDefinitions,
    PipelineConfig, VocabularyBuilder,
};
use log::{info, warn};

#[derive(Parser)]
#[command(name = "grc-vocab", about = "Ancient Greek vocabulary list builder")]
struct Cli {
    /// Greek text to process. If omitted, reads all of stdin (batch mode).
    input: Option<String>,

    /// Path to the Morpheus cruncher executable.
    #[arg(long, env = "MORPHEUS_CRUNCHER", default_value = "cruncher")]
    cruncher: PathBuf,

    /// Morpheus stem library directory.
    #[arg(long, env = "MORPHLIB", default_value = "stemlib")]
    stemlib: PathBuf,

    /// Tab-separated short definitions (Beta Code headwords).
    #[arg(long, env = "GRC_VOCAB_DEFINITIONS")]
    definitions: Option<PathBuf>,

    /// Keep every reading of ambiguous words instead of prompting.
    #[arg(long)]
    batch: bool,

    /// Output the report as JSON.
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Disable the case, accent, elision, preverb and proper-name fallbacks.
    #[arg(long)]
    no_fallbacks: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let from_stdin = cli.input.is_none();
    let text = match cli.input {
        Some(ref text) => text.clone(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let definitions: Box<dyn DefinitionLookup> = match cli.definitions {
        Some(ref path) => {
            let defs = Definitions::from_path(path, &BetaCode)?;
            info!("loaded {} definitions from {}", defs.len(), path.display());
            Box::new(defs)
        }
        None => Box::new(NoDefinitions),
    };

    let mut config = if cli.no_fallbacks {
        PipelineConfig::without_fallbacks()
    } else {
        PipelineConfig::default()
    };
    // Prompts read stdin, so text from stdin forces batch mode.
    config.interactive = !cli.batch && !from_stdin;

    let cruncher = Cruncher::new(&cli.cruncher, &cli.stemlib);
    let builder =
        VocabularyBuilder::new(&cruncher, &BetaCode, definitions.as_ref()).with_config(config);
    let mut resolver = InteractiveResolver::new(io::stdin().lock(), io::stderr());
    let report = builder.build(&text, &mut resolver);

    if cli.json {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        println!("{}", json.context("JSON serialization failed")?);
    } else {
        render(&report.entries, |entry| println!("{}", format_entry(entry)));
    }

    for token in &report.unparsed {
        warn!("could not parse {token:?}");
    }
    Ok(())
}
