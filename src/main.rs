// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;

use simplejson_registry::config::{consts::DEFAULT_LOG_LEVEL, load_and_validate_config, Config, RuntimeBuilder};
use simplejson_registry::engine::{DispatchRequest, ERROR_HEADER};
use simplejson_registry::observability::init_tracing;
use simplejson_registry::traits::ProviderKind;

const USAGE: &str = "\
Usage: simplejson-registry [--config FILE] <kind> <request.json>
       simplejson-registry [--config FILE] targets

Kinds: query, search, annotation, tag_key, tag_value
Without --config the built-in dummy providers are registered.";

/// Parsed command line.
struct Args {
    config: Option<String>,
    command: Command,
}

enum Command {
    Targets,
    Dispatch { kind: ProviderKind, request: String },
}

fn parse_kind(value: &str) -> Result<ProviderKind> {
    ProviderKind::ALL
        .into_iter()
        .find(|kind| kind.as_str() == value)
        .with_context(|| format!("Unknown request kind '{}'\n\n{}", value, USAGE))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut config = None;
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                config = Some(args.next().context("--config requires a file path")?);
            }
            "--help" | "-h" => bail!("{}", USAGE),
            _ => positional.push(arg),
        }
    }

    let command = match positional.as_slice() {
        [cmd] if cmd == "targets" => Command::Targets,
        [kind, request] => Command::Dispatch {
            kind: parse_kind(kind)?,
            request: request.clone(),
        },
        _ => bail!("{}", USAGE),
    };

    Ok(Args { config, command })
}

fn load(config: Option<&str>) -> Result<Config> {
    match config {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load configuration from '{}'", path)),
        None => Ok(Config::default_demo()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let cfg = load(args.config.as_deref())?;

    let level = if cfg.log_level.is_empty() {
        DEFAULT_LOG_LEVEL
    } else {
        cfg.log_level.as_str()
    };
    init_tracing(level);
    if let Some(path) = args.config.as_deref() {
        cfg.log_loaded(path);
    }

    let (registry, dispatcher) =
        RuntimeBuilder::from_config(&cfg).context("Failed to build provider registry")?;

    match args.command {
        Command::Targets => {
            for name in registry.query_target_names() {
                println!("{}", name);
            }
        }
        Command::Dispatch { kind, request } => {
            let body = fs::read_to_string(&request)
                .with_context(|| format!("Failed to read request body from '{}'", request))?;
            let request = DispatchRequest::from_json(kind, &body)
                .with_context(|| format!("Invalid {} request body", kind))?;

            let response = dispatcher.dispatch(request).await;

            println!("{}", serde_json::to_string_pretty(&response.results_json()?)?);
            if let Some(header) = response.error_header() {
                eprintln!("{}: {}", ERROR_HEADER, header);
            }
        }
    }

    Ok(())
}
