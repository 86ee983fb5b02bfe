mod report;
mod scene;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scene::Scene;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: scrollyt-preview <scene.json>");
        std::process::exit(1);
    }

    let path = PathBuf::from(&args[1]);
    let data = std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
    let scene: Scene = serde_json::from_slice(&data)
        .with_context(|| format!("parsing scene {}", path.display()))?;

    let frames = scene.play()?;
    report::print_changes(&mut std::io::stdout().lock(), &frames)?;
    Ok(())
}
