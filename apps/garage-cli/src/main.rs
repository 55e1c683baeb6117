//! garage-cli — console driver for the garage parts inventory.
//!
//! Every run starts from a fresh in-memory garage seeded with a sample set;
//! nothing is persisted between runs.
//!
//! Run:
//! ```bash
//! # seed, list everything and look up part 2
//! cargo run -p garage-cli
//!
//! # JSON output with the ten-part sample set
//! GARAGE_SAMPLES=extended cargo run -p garage-cli -- list --format json
//! ```
//!
//! Configuration: See `config.rs` for all environment variables.

mod config;

use std::env;
use std::io::{self, Write};
use std::process;

use garage_domain::parse::{parse_part_id, parse_quantity};
use garage_domain::sample::{self, SampleSet};
use garage_domain::{Garage, Part, PartId};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Config, LogFormat, OutputFormat};

/// Part looked up by the `demo` command.
const DEMO_LOOKUP_ID: PartId = PartId::new(2);

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Demo,
    List,
    Find(PartId),
    Add {
        name: String,
        part_number: String,
        quantity: i64,
    },
    Summary,
    Help,
}

#[derive(Serialize)]
struct DemoReport<'a> {
    total: usize,
    parts: &'a [Part],
    lookup_id: PartId,
    found: Option<&'a Part>,
}

fn usage() -> String {
    format!(
        "{}\n\nUsage:\n  garage-cli [demo]\n  garage-cli list\n  garage-cli find <id>\n  garage-cli add <name> <part_number> <quantity>\n  garage-cli summary\n  garage-cli help\n\nFlags:\n  --format text|json\n  --samples basic|extended|none\n\nNotes:\n  - The garage lives in memory only; data is not persisted across runs.",
        garage_domain::about()
    )
}

/// Split flags out of `args`, apply them to `cfg` and return the command.
fn parse_args(args: Vec<String>, cfg: &mut Config) -> Result<Command, String> {
    let mut positional = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--format" => {
                let Some(val) = args.get(i + 1) else {
                    return Err("--format requires a value".into());
                };
                cfg.output = OutputFormat::parse(val)
                    .ok_or_else(|| format!("invalid --format: {}", val))?;
                i += 2;
            }
            "--samples" => {
                let Some(val) = args.get(i + 1) else {
                    return Err("--samples requires a value".into());
                };
                cfg.samples = SampleSet::parse(val).map_err(|e| e.to_string())?;
                i += 2;
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unknown argument: {}", flag));
            }
            _ => {
                positional.push(args[i].clone());
                i += 1;
            }
        }
    }

    let mut rest = positional.into_iter();
    let Some(cmd) = rest.next() else {
        return Ok(Command::Demo);
    };

    let command = match cmd.as_str() {
        "demo" => Command::Demo,
        "list" => Command::List,
        "summary" => Command::Summary,
        "help" | "-h" => Command::Help,
        "find" => {
            let Some(raw) = rest.next() else {
                return Err("missing <id> for find".into());
            };
            Command::Find(parse_part_id(&raw).map_err(|e| e.to_string())?)
        }
        "add" => {
            let (Some(name), Some(part_number), Some(raw_qty)) =
                (rest.next(), rest.next(), rest.next())
            else {
                return Err("add requires <name> <part_number> <quantity>".into());
            };
            let quantity = parse_quantity(&raw_qty).map_err(|e| e.to_string())?;
            Command::Add {
                name,
                part_number,
                quantity,
            }
        }
        unk => return Err(format!("unknown command: {}", unk)),
    };

    if let Some(extra) = rest.next() {
        return Err(format!("unexpected argument: {}", extra));
    }
    Ok(command)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("serialize failed: {}", e))
}

fn write_out<W: Write>(out: &mut W, line: &str) -> Result<(), String> {
    writeln!(out, "{}", line).map_err(|e| format!("write failed: {}", e))
}

/// Run `command` against `garage`, printing results to `out`.
fn execute<W: Write>(
    command: Command,
    garage: &mut Garage,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), String> {
    match command {
        Command::Help => write_out(out, &usage()),
        Command::Demo => {
            let found = garage.find_part(DEMO_LOOKUP_ID);
            match format {
                OutputFormat::Json => {
                    let report = DemoReport {
                        total: garage.len(),
                        parts: garage.list_parts(),
                        lookup_id: DEMO_LOOKUP_ID,
                        found,
                    };
                    write_out(out, &to_json(&report)?)
                }
                OutputFormat::Text => {
                    write_out(out, "Parts in garage:")?;
                    write_out(out, "=================")?;
                    for part in garage.list_parts() {
                        write_out(out, &part.to_string())?;
                    }
                    write_out(out, &format!("\nSearching for part with ID={}:", DEMO_LOOKUP_ID))?;
                    match found {
                        Some(part) => write_out(out, &part.to_string()),
                        None => write_out(out, "Part not found"),
                    }
                }
            }
        }
        Command::List => match format {
            OutputFormat::Json => write_out(out, &to_json(&garage.listing())?),
            OutputFormat::Text => {
                for part in garage.list_parts() {
                    write_out(out, &part.to_string())?;
                }
                write_out(out, &format!("total: {}", garage.len()))
            }
        },
        Command::Find(id) => {
            let found = garage.find_part(id);
            debug!(part_id = %id, found = found.is_some(), "find");
            match format {
                OutputFormat::Json => write_out(out, &to_json(&found)?),
                OutputFormat::Text => match found {
                    Some(part) => write_out(out, &part.to_string()),
                    None => write_out(out, "Part not found"),
                },
            }
        }
        Command::Add {
            name,
            part_number,
            quantity,
        } => {
            let part = garage.add_part(name, part_number, quantity);
            info!(part_id = %part.id(), "add ok");
            match format {
                OutputFormat::Json => write_out(out, &to_json(&part)?),
                OutputFormat::Text => write_out(out, &format!("added: {}", part)),
            }
        }
        Command::Summary => {
            let summary = garage.summary();
            match format {
                OutputFormat::Json => write_out(out, &to_json(&summary)?),
                OutputFormat::Text => write_out(
                    out,
                    &format!(
                        "status: {}\nservice: {} v{}\ntotal parts: {}",
                        summary.status, summary.service, summary.version, summary.total_parts
                    ),
                ),
            }
        }
    }
}

fn run(mut cfg: Config) -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect(); // skip program name
    let command = parse_args(args, &mut cfg)?;

    let mut garage = Garage::new();
    let seeded = sample::seed(&mut garage, cfg.samples);
    info!(samples = cfg.samples.as_str(), seeded, "garage ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(command, &mut garage, cfg.output, &mut out)
}

fn init_tracing(cfg: &Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so stdout only carries command output.
    let registry = tracing_subscriber::registry().with(env_filter);
    match cfg.log_format {
        LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(fmt::time::SystemTime)
                        .with_writer(io::stderr),
                )
                .init();
        }
        LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .init();
        }
    }
}

fn main() {
    // Load and validate config first (fail fast on misconfiguration)
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    init_tracing(&cfg);

    if let Err(msg) = run(cfg) {
        eprintln!("error: {}", msg);
        process::exit(1);
    }
}
