//! interactables - headless driver for pointer and contact driven world objects
//!
//! Loads a scene, plays a scripted pointer/player timeline through it, and records
//! every interaction transition.

mod config;
mod headless;
mod scene;
mod scripted_input;

use anyhow::Result;
use clap::Parser;
use config::{RunnerConfig, DEFAULT_CONFIG_PATH};
use headless::HeadlessConfig;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless interaction runner", long_about = None)]
struct Args {
    /// Scene description (JSON)
    #[arg(long, default_value = "scenes/demo_scene.json")]
    scene: PathBuf,

    /// Scripted pointer and player timeline (JSON)
    #[arg(long, default_value = "scripts/demo_input.json")]
    script: PathBuf,

    /// Runner configuration (TOML)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write every transition as newline-delimited JSON
    #[arg(long)]
    events_out: Option<PathBuf>,

    /// Write a run summary as JSON
    #[arg(long)]
    summary_out: Option<PathBuf>,

    /// Stop after this many ticks (overrides the config file)
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Write the effective configuration to --config and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    // Config warnings go out before the configured subscriber exists.
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
        .finish();
    let runner = tracing::subscriber::with_default(bootstrap, || {
        RunnerConfig::load_from_path(&args.config)
    });

    // RUST_LOG wins over the config file's filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&runner.log_filter)),
        )
        .init();

    if args.write_config {
        runner.save_to_path(&args.config)?;
        println!("Configuration written to {}", args.config.display());
        return Ok(());
    }

    info!("Starting interactables v{}", env!("CARGO_PKG_VERSION"));

    let outcome = headless::run(HeadlessConfig {
        runner,
        scene: args.scene,
        script: args.script,
        events_out: args.events_out.clone(),
        summary_out: args.summary_out.clone(),
        max_ticks: args.max_ticks,
    })?;

    let report = &outcome.report;
    println!(
        "Ran {} ticks ({:.2}s simulated): {} transitions across {} objects",
        report.ticks,
        report.simulated_seconds,
        report.events,
        report.objects.len()
    );
    for object in &report.objects {
        println!(
            "  {} {:?} [{}]: {} started, {} ended, {} by contact{}",
            object.object,
            object.display_name,
            object.mode,
            object.starts,
            object.ends,
            object.contact_activations,
            if object.pressed_at_end { ", active" } else { "" }
        );
    }
    if let Some(path) = &args.events_out {
        println!("Events written to {}", path.display());
    }
    if let Some(path) = &args.summary_out {
        println!("Summary written to {}", path.display());
    }

    Ok(())
}
