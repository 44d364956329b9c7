//! axt - Main Entry Point
//!
//! Reads one input document (JSON snapshot or HTML), computes the
//! accessibility tree, prints it with all findings.

use anyhow::{Context, bail};
use axt_dom::{DomTree, Snapshot};
use axt_tree::{Evaluation, ValidationConfig, evaluate};

mod render;

struct Args {
    input: std::path::PathBuf,
    config: Option<std::path::PathBuf>,
    json: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut input = None;
    let mut config = None;
    let mut json = false;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                config = Some(path.into());
            }
            "--json" => json = true,
            "--help" | "-h" => {
                eprintln!("Usage: axt <input.{{json,html}}> [--config rules.json] [--json]");
                std::process::exit(0);
            }
            _ if arg.starts_with('-') => bail!("unknown flag: {arg}; see --help"),
            _ if input.is_none() => input = Some(arg.into()),
            _ => bail!("unexpected argument: {arg}"),
        }
    }
    Ok(Args {
        input: input.context("missing input path; see --help")?,
        config,
        json,
    })
}

fn load_snapshot(path: &std::path::Path) -> anyhow::Result<Snapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let is_html = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("html") | Some("htm")
    );
    if is_html {
        Ok(axt_html::parse_snapshot(&raw)?)
    } else {
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<ValidationConfig> {
    match path {
        None => Ok(ValidationConfig::default()),
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let snapshot = load_snapshot(&args.input)?;
    let config = load_config(args.config.as_deref())?;

    let dom = DomTree::build(&snapshot)
        .with_context(|| format!("snapshot {} is not a valid tree", args.input.display()))?;
    let evaluation: Evaluation = evaluate(&dom, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        print!("{}", render::render(&evaluation));
    }

    if evaluation.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
