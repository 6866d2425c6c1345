#![deny(unsafe_code)]
//! CLI binary for the grid-art pattern generator.
//!
//! Subcommands:
//! - `render` — generate a rectangle-grid pattern and write a PNG
//! - `params` — print default parameters and their schema
//!
//! Logging goes to stderr through `env_logger`; set `RUST_LOG=debug` to see
//! each generation.

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use grid_art_core::{generate, CanvasSpec, PatternParams, Srgb};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "grid-art", about = "Rectangle-grid pattern generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a pattern and write a PNG snapshot.
    Render {
        /// Canvas width in pixels.
        #[arg(short = 'W', long, default_value_t = 600)]
        width: usize,

        /// Canvas height in pixels.
        #[arg(short = 'H', long, default_value_t = 400)]
        height: usize,

        #[command(flatten)]
        overrides: ParamOverrides,

        /// Base parameters as a JSON string; individual flags take precedence.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,
    },
    /// Print default parameters and the parameter schema.
    Params,
}

/// Per-parameter flags applied on top of `--params`.
#[derive(clap::Args, Default)]
struct ParamOverrides {
    /// Number of grid rows.
    #[arg(long)]
    rows: Option<usize>,

    /// Number of grid columns.
    #[arg(long)]
    cols: Option<usize>,

    /// Background color as hex ("#1a1a1a").
    #[arg(long)]
    background: Option<String>,

    /// Rectangle base color as hex ("#3380cc").
    #[arg(long)]
    rect_base: Option<String>,

    /// Color variation factor, typically in [0, 1].
    #[arg(long)]
    vary: Option<f64>,
}

fn build_params(json: &str, overrides: &ParamOverrides) -> Result<PatternParams, CliError> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
    let mut params = PatternParams::from_json(&value);
    if let Some(rows) = overrides.rows {
        params.rows = rows;
    }
    if let Some(cols) = overrides.cols {
        params.cols = cols;
    }
    if let Some(hex) = &overrides.background {
        params.background = Srgb::from_hex(hex)?;
    }
    if let Some(hex) = &overrides.rect_base {
        params.rect_base = Srgb::from_hex(hex)?;
    }
    if let Some(vary) = overrides.vary {
        params.color_vary = vary;
    }
    Ok(params)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Params => {
            let defaults = PatternParams::default().to_json();
            let schema = PatternParams::param_schema();
            if cli.json {
                let info = serde_json::json!({
                    "defaults": defaults,
                    "schema": schema,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Defaults:");
                println!("{}", serde_json::to_string_pretty(&defaults)?);
                println!("Schema:");
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
        }
        Command::Render {
            width,
            height,
            overrides,
            params,
            output,
        } => {
            let params = build_params(&params, &overrides)?;
            log::debug!("render params: {}", params.to_json());

            let canvas = CanvasSpec::new(width, height);
            let buffer = generate(canvas, &params)?;
            grid_art_snapshot::write_png(&buffer, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": width,
                    "height": height,
                    "params": params.to_json(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {}x{} grid ({width}x{height}) -> {}",
                    params.rows,
                    params.cols,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
