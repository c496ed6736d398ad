use treasure_core::{
    JsonFileSource, MapBuilderConfig, MapRequest, create_map, draw_grid, draw_list,
    load_or_fallback,
};

use std::{
    fs::create_dir as create_generated_dir,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use svg::save as save_as_svg;
use tracing::Level;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Print the field list only
    List,
    /// Save the grid view only
    Svg,
    #[default]
    Both,
}

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    #[command(flatten)]
    request: MapRequest,

    /// JSON file holding `{"descriptions": [..]}` filler texts
    #[arg(short, long, default_value = "descriptions.json")]
    descriptions: PathBuf,

    #[arg(short, long, default_value_t, value_enum)]
    format: OutputFormat,

    /// Directory the SVG grid view is saved to
    #[arg(short, long, default_value = "generated")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = MapBuilderConfig::try_from(args.request).context("Invalid map configuration")?;

    let descriptions = load_or_fallback(&JsonFileSource::new(&args.descriptions));

    let map = create_map(&config, &descriptions);

    let shortfall = map.shortfall();
    if !shortfall.is_empty() {
        tracing::warn!("Not enough free cells, skipped {}", shortfall);
    }

    let grid = map.grid();

    if args.format != OutputFormat::Svg {
        println!("{}", draw_list(&grid));
    }

    if args.format != OutputFormat::List {
        let map_filename = {
            use std::time::SystemTime;

            let now = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .context("System clock is before the UNIX epoch")?;
            args.output_dir
                .join(format!("{}-map.svg", now.as_millis()))
        };

        ensure_dir(&args.output_dir)?;

        tracing::info!("Saving map as SVG to: {}", map_filename.display());

        save_as_svg(&map_filename, &draw_grid(&grid))
            .with_context(|| format!("Failed to save {}", map_filename.display()))?;
    }

    Ok(())
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    let exists = dir
        .try_exists()
        .with_context(|| format!("Error checking for '{}' directory", dir.display()))?;

    if !exists {
        create_generated_dir(dir)
            .with_context(|| format!("Failed to create '{}' directory", dir.display()))?;
        tracing::info!("Directory '{}' created.", dir.display());
    }

    Ok(())
}
