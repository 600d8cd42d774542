use std::env;
use std::io::{self, BufRead, Write};

use wiener_deblur::config::deblur::{parse_cli, RuntimeConfig};
use wiener_deblur::diagnostics::RecomputeTrace;
use wiener_deblur::display::save_preview;
use wiener_deblur::image::io::{load_grayscale_image, write_json_file};
use wiener_deblur::{Deblurrer, RecomputeResult};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let program = env::args()
        .next()
        .unwrap_or_else(|| "deblur_demo".to_string());
    let cli = parse_cli(&program)?;
    let config = cli.config;

    let gray = load_grayscale_image(&config.input_path)?;
    let mut deblurrer = Deblurrer::new(gray.as_view(), config.deblur);

    let result = deblurrer.recompute();
    emit_result(&config, &result)?;

    if cli.interactive {
        interactive_loop(&mut deblurrer, &config)?;
    }

    Ok(())
}

fn emit_result(config: &RuntimeConfig, result: &RecomputeResult) -> Result<(), String> {
    save_preview(&result.image, &config.display, &config.output.image_out)?;
    print_summary(&result.trace);
    println!("  output: {}", config.output.image_out.display());
    if let Some(path) = &config.output.json_out {
        write_json_file(path, &result.trace)?;
        println!("  trace: {}", path.display());
    }
    Ok(())
}

fn print_summary(trace: &RecomputeTrace) {
    println!(
        "Deblurred {}x{} radius={} snr={} (filter={:.3} ms apply={:.3} ms total={:.3} ms)",
        trace.input.width,
        trace.input.height,
        trace.radius,
        trace.snr,
        trace.filter_ms,
        trace.apply_ms,
        trace.total_ms
    );
}

/// Stdin-driven parameter loop standing in for a slider UI: each adjustment
/// reruns the full pipeline and overwrites the output file.
fn interactive_loop(deblurrer: &mut Deblurrer, config: &RuntimeConfig) -> Result<(), String> {
    println!("Interactive mode. Commands: radius <0-130> | snr <0-2000> | quit");
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("Failed to read stdin: {e}"))?;
        let mut tokens = line.split_whitespace();
        let current = deblurrer.params();
        match (tokens.next(), tokens.next()) {
            (Some("quit"), _) | (Some("q"), _) => break,
            (Some("radius"), Some(raw)) => match raw.parse::<u32>() {
                Ok(v) => {
                    let result = deblurrer.update_parameters(v, current.snr);
                    emit_result(config, &result)?;
                }
                Err(_) => eprintln!("Invalid radius: {raw}"),
            },
            (Some("snr"), Some(raw)) => match raw.parse::<u32>() {
                Ok(v) => {
                    let result = deblurrer.update_parameters(current.radius, v);
                    emit_result(config, &result)?;
                }
                Err(_) => eprintln!("Invalid snr: {raw}"),
            },
            (None, _) => {}
            (Some(cmd), _) => eprintln!("Unknown command: {cmd}"),
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> Result<(), String> {
    print!("> ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))
}
