// Entry point: CLI front end over the evaluation engine.
mod cli;

use clap::Parser;
use tracing::info;

use tensura::config::AppConfig;
use tensura::core::evaluate::{evaluate, WindowResult};
use tensura::core::placement::OddBias;

/// Parse a comma-separated list like "11,7,16"
fn parse_intervals(s: &str) -> Result<Vec<u32>, String> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| format!("invalid interval: {part:?}"))
        })
        .collect()
}

fn parse_octaves(s: &str) -> Result<Vec<u32>, String> {
    let sizes: Vec<u32> = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| format!("invalid octave count: {part:?}"))
        })
        .collect::<Result<_, _>>()?;
    if sizes.iter().any(|&o| o == 0) {
        return Err("octave counts must be at least 1".into());
    }
    Ok(sizes)
}

fn parse_odd_bias(s: &str) -> Result<Vec<OddBias>, String> {
    s.split(',')
        .map(|part| match part.trim() {
            "up" => Ok(OddBias::Up),
            "down" => Ok(OddBias::Down),
            other => Err(format!("invalid odd bias: {other:?} (want up|down)")),
        })
        .collect()
}

fn print_table(res: &WindowResult, top: usize) {
    println!("window L = {} ({} orderings kept)", res.len, res.records.len());
    println!("{:<18} {:>9} {:<16} {}", "ordering", "per-pair", "prime form", "pitches");
    for r in res.records.iter().take(top) {
        println!(
            "{:<18} {:>9.4} {:<16} {:?}",
            format!("{:?}", r.perm),
            r.per_pair,
            format!("{:?}", r.prime_form),
            r.pitches
        );
    }
    println!();
}

fn run() -> Result<(), String> {
    let args = cli::Args::parse();

    let intervals = parse_intervals(&args.intervals)?;
    let octaves = parse_octaves(&args.octaves)?;
    let odd_bias = match args.odd_bias.as_deref() {
        Some(s) => parse_odd_bias(s)?,
        None => Vec::new(),
    };

    let cfg = AppConfig::load_or_default(&args.config);
    let mut params = cfg.eval_params();
    if let Some(edo) = args.edo {
        if edo == 0 {
            return Err("EDO size must be at least 1".into());
        }
        params.tension.edo = tensura::core::edo::EdoSpace::new(edo);
    }
    if let Some(mode) = args.mode.as_deref() {
        params.mode = mode.parse()?;
    }

    info!(
        ?intervals,
        ?octaves,
        mode = params.mode.name(),
        edo = params.tension.edo.steps_per_oct,
        "evaluating"
    );

    let results = evaluate(&intervals, &odd_bias, &octaves, &params).map_err(|e| e.to_string())?;

    if args.json {
        let out = serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        for res in &results {
            print_table(res, args.top);
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
