mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use liftline_core::views::{markers, path_overlay};
use liftline_core::{demo, loader, svg};
use liftline_protocol::{ResortMap, Viewport};

#[derive(Parser, Debug)]
#[command(version, about = "Terminal viewer for ski-resort lift maps")]
struct Args {
    /// Resort map JSON file. Opens the built-in demo resort when omitted.
    resort: Option<PathBuf>,

    /// Write a static SVG snapshot of the map instead of opening the viewer.
    #[arg(long, value_name = "FILE")]
    export_svg: Option<PathBuf>,

    /// Use the light palette for the SVG snapshot.
    #[arg(long)]
    light: bool,
}

fn main() -> Result<()> {
    colog::init();
    let args = Args::parse();

    let map = load_map(args.resort.as_deref())?;
    log::info!(
        "loaded {} with {} lifts",
        map.meta.name.as_deref().unwrap_or("resort map"),
        map.len()
    );

    if let Some(out) = &args.export_svg {
        export_svg(&map, out, !args.light)?;
        log::info!("wrote {}", out.display());
        return Ok(());
    }

    renderer::run(map)
}

fn load_map(path: Option<&std::path::Path>) -> Result<ResortMap> {
    match path {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            loader::load_resort(&data)
                .with_context(|| format!("failed to load {}", path.display()))
        }
        None => Ok(demo::demo_resort()),
    }
}

fn export_svg(map: &ResortMap, out: &std::path::Path, dark: bool) -> Result<()> {
    let viewport = Viewport::new(map.meta.width, map.meta.height);
    let mut commands = path_overlay::render_path_overlay(map, None, &viewport);
    commands.extend(markers::render_markers(map, None, &viewport));
    let svg = svg::render_svg(&commands, viewport.width, viewport.height, dark);
    std::fs::write(out, svg).with_context(|| format!("failed to write {}", out.display()))
}
