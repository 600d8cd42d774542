//! Configuration for the deblur demo: JSON file plus CLI overrides.
//!
//! Paths are always explicit; nothing in the pipeline hardcodes a file name.
use crate::deblur::DeblurParams;
use crate::display::DisplayOptions;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
pub struct OutputConfig {
    /// Image file overwritten with the scaled result on every recompute.
    pub image_out: PathBuf,
    /// Optional JSON trace of the last recompute.
    #[serde(default)]
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    pub output: OutputConfig,
    #[serde(default)]
    pub deblur: DeblurParams,
    #[serde(default)]
    pub display: DisplayOptions,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

/// Parsed command line: resolved runtime config plus demo-only switches.
#[derive(Clone, Debug)]
pub struct CliOptions {
    pub config: RuntimeConfig,
    /// Read parameter adjustments from stdin after the initial recompute.
    pub interactive: bool,
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--config FILE] [--input FILE] [--output FILE]\n\
         \x20                 [--radius N] [--snr N] [--scale F] [--json-out FILE]\n\
         \x20                 [--interactive]\n\
         \n\
         Without --config, --input and --output are required. Flags override\n\
         config-file values. radius is clamped to 0..=130, snr to 0..=2000."
    )
}

pub fn parse_cli(program: &str) -> Result<CliOptions, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut input_path: Option<PathBuf> = None;
    let mut image_out: Option<PathBuf> = None;
    let mut json_out: Option<PathBuf> = None;
    let mut radius: Option<u32> = None;
    let mut snr: Option<u32> = None;
    let mut scale: Option<f32> = None;
    let mut interactive = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_path = Some(PathBuf::from(next_value(&mut args, &arg)?)),
            "--input" => input_path = Some(PathBuf::from(next_value(&mut args, &arg)?)),
            "--output" => image_out = Some(PathBuf::from(next_value(&mut args, &arg)?)),
            "--json-out" => json_out = Some(PathBuf::from(next_value(&mut args, &arg)?)),
            "--radius" => radius = Some(parse_number(&next_value(&mut args, &arg)?, &arg)?),
            "--snr" => snr = Some(parse_number(&next_value(&mut args, &arg)?, &arg)?),
            "--scale" => {
                let raw = next_value(&mut args, &arg)?;
                let v: f32 = raw
                    .parse()
                    .map_err(|_| format!("Invalid value for {arg}: {raw}"))?;
                if v <= 0.0 {
                    return Err(format!("{arg} must be positive, got {raw}"));
                }
                scale = Some(v);
            }
            "--interactive" => interactive = true,
            "--help" | "-h" => {
                println!("{}", usage(program));
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {other}\n\n{}", usage(program))),
        }
    }

    let mut config = match config_path {
        Some(path) => load_config(&path)?,
        None => {
            let input_path = input_path
                .clone()
                .ok_or_else(|| format!("--input is required\n\n{}", usage(program)))?;
            let image_out = image_out
                .clone()
                .ok_or_else(|| format!("--output is required\n\n{}", usage(program)))?;
            RuntimeConfig {
                input_path,
                output: OutputConfig {
                    image_out,
                    json_out: None,
                },
                deblur: DeblurParams::default(),
                display: DisplayOptions::default(),
            }
        }
    };

    // CLI flags take precedence over config-file values.
    if let Some(path) = input_path {
        config.input_path = path;
    }
    if let Some(path) = image_out {
        config.output.image_out = path;
    }
    if let Some(path) = json_out {
        config.output.json_out = Some(path);
    }
    if let Some(v) = radius {
        config.deblur.radius = v;
    }
    if let Some(v) = snr {
        config.deblur.snr = v;
    }
    if let Some(v) = scale {
        config.display.scale = v;
    }
    config.deblur = config.deblur.clamped();

    Ok(CliOptions {
        config,
        interactive,
    })
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("Missing value for {flag}"))
}

fn parse_number(raw: &str, flag: &str) -> Result<u32, String> {
    raw.parse()
        .map_err(|_| format!("Invalid value for {flag}: {raw}"))
}
