use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use geomdiff_diff::{diff_with_config, ApplyInPlace, ApplyOptions, EngineConfig, GeomDiff};
use geomdiff_types::Element;
use tracing::debug;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Command::Diff(args) => cmd_diff(args, &config, cli.format),
        Command::Apply(args) => cmd_apply(args, &config, cli.format),
    }
}

fn cmd_diff(args: DiffArgs, config: &EngineConfig, format: OutputFormat) -> anyhow::Result<()> {
    let d = compute(&args.from, &args.to, config)?;
    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "empty": d.is_empty(),
                "only_deletes": d.only_deletes(),
                "rendering": d.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("{} {}", d.kind().to_string().cyan().bold(), d);
            println!("  Empty: {}", yes_no(d.is_empty()));
            println!("  Only deletes: {}", yes_no(d.only_deletes()));
        }
    }
    Ok(())
}

fn cmd_apply(args: ApplyArgs, config: &EngineConfig, format: OutputFormat) -> anyhow::Result<()> {
    let d = compute(&args.from, &args.to, config)?;
    let options = resolve_options(config, args.only);
    let mut target = read_element(&args.target)?;

    d.apply_in_place(&mut target, &options)
        .with_context(|| format!("applying diff to {}", args.target.display()))?;

    if format == OutputFormat::Text {
        let mode = if options.is_deleted_only() { "deleted-only" } else { "full" };
        eprintln!(
            "{} Applied {} diff ({}) to {} {} v{}",
            "✓".green().bold(),
            d.kind(),
            mode.yellow(),
            target.kind(),
            target.id().to_string().bold(),
            target.version()
        );
    }
    println!("{}", serde_json::to_string_pretty(&target)?);
    Ok(())
}

fn compute(from: &Path, to: &Path, config: &EngineConfig) -> anyhow::Result<GeomDiff> {
    let a = read_element(from)?;
    let b = read_element(to)?;
    diff_with_config(&a, &b, &config.diff)
        .with_context(|| format!("diffing {} against {}", from.display(), to.display()))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    match path {
        Some(path) => {
            let config = EngineConfig::load(path)?;
            debug!(path = %path.display(), ?config, "loaded engine config");
            Ok(config)
        }
        None => Ok(EngineConfig::default()),
    }
}

fn read_element(path: &Path) -> anyhow::Result<Element> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing element from {}", path.display()))
}

/// The command line's `--only` wins over the config file.
fn resolve_options(config: &EngineConfig, only: Option<OnlyArg>) -> ApplyOptions {
    match only {
        Some(OnlyArg::Deleted) => ApplyOptions::deleted_only(),
        None => config.apply,
    }
}

fn yes_no(value: bool) -> colored::ColoredString {
    if value {
        "yes".green()
    } else {
        "no".red()
    }
}
