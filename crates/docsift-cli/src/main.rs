//! Docsift CLI - batch document processing over NDJSON events.
//!
//! Reads one JSON event object per line, runs each through the document
//! pipeline, and writes the surviving events back out as NDJSON. Events the
//! pipeline removes (no ruleset configured for their identity) are simply
//! absent from the output.

use anyhow::Context;
use clap::Parser;
use docsift_domain::MapDocument;
use docsift_pipeline::{DocumentPipeline, PipelineConfig};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Resolve document identities and extract fields per identity ruleset.
#[derive(Debug, Parser)]
#[command(name = "docsift", version, about)]
struct Cli {
    /// TOML pipeline configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base properties file (overrides the config file).
    #[arg(long)]
    properties: Option<PathBuf>,

    /// Event field holding the raw document text.
    #[arg(long)]
    document_field: Option<String>,

    /// Event field holding the kind discriminator.
    #[arg(long)]
    type_field: Option<String>,

    /// LRU bound for the ruleset cache; unbounded when omitted.
    #[arg(long)]
    cache_size: Option<usize>,

    /// Enable multi-path identity resolution.
    #[arg(long)]
    multipath: bool,

    /// NDJSON input file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    input: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let pipeline = DocumentPipeline::new(config)?;

    let batch = read_batch(&cli.input)?;
    let survivors = pipeline.process_batch(batch).await;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for event in survivors {
        serde_json::to_writer(&mut out, &event.into_value())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<PipelineConfig> {
    let mut config = match (&cli.config, &cli.properties) {
        (Some(path), _) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            PipelineConfig::from_toml(&text)?
        }
        (None, Some(properties)) => PipelineConfig::new(properties),
        (None, None) => anyhow::bail!("either --config or --properties is required"),
    };

    if let Some(properties) = &cli.properties {
        config.properties_path = properties.clone();
    }
    if let Some(field) = &cli.document_field {
        config.document_field = field.clone();
    }
    if let Some(field) = &cli.type_field {
        config.type_field = field.clone();
    }
    if let Some(capacity) = cli.cache_size {
        config.cache_capacity = Some(capacity);
    }
    if cli.multipath {
        config.multipath_identity = true;
    }
    Ok(config)
}

fn read_batch(input: &str) -> anyhow::Result<Vec<MapDocument>> {
    let reader: Box<dyn BufRead> = if input == "-" {
        Box::new(io::stdin().lock())
    } else {
        let file = fs::File::open(input)
            .with_context(|| format!("failed to open input file {input}"))?;
        Box::new(io::BufReader::new(file))
    };

    let mut batch = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input line")?;
        if line.trim().is_empty() {
            continue;
        }
        let value: serde_json::Value = match serde_json::from_str(&line) {
            Ok(value) => value,
            Err(e) => {
                warn!(line = idx + 1, error = %e, "skipping unparseable input line");
                continue;
            }
        };
        match MapDocument::from_value(value) {
            Some(event) => batch.push(event),
            None => warn!(line = idx + 1, "skipping non-object input line"),
        }
    }
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("docsift").chain(args.iter().copied()))
    }

    #[test]
    fn test_properties_flag_builds_config() {
        let cli = parse(&["--properties", "/etc/docsift/base.properties"]);
        let config = build_config(&cli).unwrap();

        assert_eq!(
            config.properties_path,
            PathBuf::from("/etc/docsift/base.properties")
        );
        assert_eq!(config.document_field, "message");
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("docsift.toml");
        std::fs::write(
            &config_path,
            "properties_path = \"/etc/docsift/base.properties\"\ncache_capacity = 8\n",
        )
        .unwrap();

        let cli = parse(&[
            "--config",
            config_path.to_str().unwrap(),
            "--cache-size",
            "64",
            "--type-field",
            "doc_type",
            "--multipath",
        ]);
        let config = build_config(&cli).unwrap();

        assert_eq!(config.cache_capacity, Some(64));
        assert_eq!(config.type_field, "doc_type");
        assert!(config.multipath_identity);
    }

    #[test]
    fn test_missing_config_and_properties_fails() {
        let cli = parse(&[]);
        assert!(build_config(&cli).is_err());
    }
}
