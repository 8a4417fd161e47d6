//! Sketchnet - netlist generator for sketched circuits
//!
//! Reads a layout document (JSON) and writes the netlist for it.
//!
//! # Usage
//!
//! ```bash
//! sketchnet layout.json -s R=1k -s V=9 > circuit.net
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use sketchnet_core::{
    error::{Result, SketchnetError},
    geometry::{Layout, Prefix},
    netlist::{report_diagnostics, validate_netlist},
    ComponentValues, NetlistConfig, NetlistGenerator, DEFAULT_GRID_SIZE, DEFAULT_SNAP_TOLERANCE,
};

/// Netlist generator for sketched circuit layouts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the layout file (.json)
    #[arg(value_name = "LAYOUT_FILE")]
    layout_file: PathBuf,

    /// Element value override, e.g. `-s R=1k` (prefixes: R, V, C, L)
    #[arg(short = 's', long = "set", value_name = "PREFIX=VALUE", value_parser = parse_value_override)]
    values: Vec<(Prefix, String)>,

    /// Manhattan radius for snapping wire endpoints onto pins
    #[arg(long, default_value_t = DEFAULT_SNAP_TOLERANCE)]
    snap_tolerance: i32,

    /// Grid pitch; points closer than this on both axes are merged
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: i32,

    /// Write the netlist to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Fail on floating nodes or a missing ground instead of warning
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_value_override(s: &str) -> std::result::Result<(Prefix, String), String> {
    let (prefix, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PREFIX=VALUE, got '{}'", s))?;
    let mut chars = prefix.trim().chars();
    match (chars.next().and_then(Prefix::from_char), chars.next()) {
        (Some(prefix), None) => Ok((prefix, value.to_string())),
        _ => Err(format!("unknown element prefix '{}' (expected R, V, C or L)", prefix)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Default level is overridden by RUST_LOG
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let config = NetlistConfig::new()
        .with_snap_tolerance(args.snap_tolerance)
        .with_grid_size(args.grid_size);
    let generator = NetlistGenerator::with_config(config)?;

    // Load the sketch
    let layout = Layout::load(&args.layout_file)?;

    // Generate
    let values = ComponentValues::from(args.values.iter().cloned().collect::<BTreeMap<_, _>>());
    let netlist = generator.generate(&layout, &values)?;
    if netlist.is_empty() {
        eprintln!("No components found to simulate.");
        return Ok(());
    }

    // Diagnose
    if args.strict {
        validate_netlist(&netlist)?;
    } else {
        report_diagnostics(&netlist);
    }

    // Emit
    match &args.output {
        Some(path) => std::fs::write(path, netlist.to_string()).map_err(|e| {
            SketchnetError::NetlistWriteError {
                path: path.display().to_string(),
                source: e,
            }
        })?,
        None => println!("{}", netlist),
    }

    Ok(())
}
