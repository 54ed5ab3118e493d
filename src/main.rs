// src/main.rs

use std::env;
use std::error::Error;
use std::path::PathBuf;

use log::info;

use fork_stiction_render::config::AnalysisConfig;
use fork_stiction_render::crate_version;
use fork_stiction_render::pipeline::run_analysis;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 || args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [data_directory]", args[0]);
        std::process::exit(1);
    }
    let data_dir = args.get(1).map_or_else(|| PathBuf::from("."), PathBuf::from);

    info!("fork_stiction_render {} analysing '{}'", crate_version(), data_dir.display());
    let config = AnalysisConfig::for_directory(&data_dir);
    let report = run_analysis(&config)?;

    println!("\n--- Friction Summary ---");
    for row in &report.summary {
        println!(
            "  {}: peak static {:.2} N, avg dynamic {:.2} N",
            row.sample_id, row.peak_static_friction, row.avg_dynamic_friction
        );
    }
    for (path, reason) in &report.skipped {
        eprintln!("  Skipped {}: {}", path.display(), reason);
    }
    println!("  Compiled data: '{}' ({} rows)", config.compiled_output.display(), report.compiled_rows);
    println!("  Forces: '{}'", config.forces_output.display());
    Ok(())
}
