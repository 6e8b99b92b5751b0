//! Bouncy levels CLI - inspect, plot and edit level files
//!
//! Usage:
//!   bouncy-levels list [levels.json] [--name NAME] [--id ID]
//!   bouncy-levels plot [levels.json] [--name NAME] [--id ID] --out-dir plots
//!   bouncy-levels cut [levels.json] --name NAME --line-idx 0 --point-idx 2 --width 0.2
//!   bouncy-levels cut [levels.json] --id ID --output edited.json --no-plot

use anyhow::{Context, Result};
use bouncy_levels::level::{Level, LevelFilter, LevelSelector, LevelSet};
use bouncy_levels::plot::{plot_file_stem, save_level_plot};
use bouncy_levels::PlotConfig;
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const DEFAULT_LEVELS: &str = "data/default_levels.json";

/// Plot and edit the level files of the bouncy game
#[derive(Parser, Debug)]
#[command(name = "bouncy-levels")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the id and name of levels
    List {
        /// Level file
        #[arg(value_name = "INPUT", default_value = DEFAULT_LEVELS)]
        input: PathBuf,

        /// Only levels with this name
        #[arg(long)]
        name: Option<String>,

        /// Only levels with this id
        #[arg(long)]
        id: Option<String>,
    },

    /// Plot levels as SVG files with labeled point indices
    Plot {
        /// Level file
        #[arg(value_name = "INPUT", default_value = DEFAULT_LEVELS)]
        input: PathBuf,

        /// Only levels with this name
        #[arg(long)]
        name: Option<String>,

        /// Only levels with this id
        #[arg(long)]
        id: Option<String>,

        /// Directory the SVG files are written to
        #[arg(short, long, value_name = "DIR", default_value = "plots")]
        out_dir: PathBuf,

        /// Plot configuration file (JSON format)
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,
    },

    /// Cut a gap into one segment of a level line, splitting the line in two
    Cut(CutArgs),
}

#[derive(Args, Debug)]
struct CutArgs {
    /// Level file
    #[arg(value_name = "INPUT", default_value = DEFAULT_LEVELS)]
    input: PathBuf,

    /// Name of the level to edit (takes precedence over --id)
    #[arg(long)]
    name: Option<String>,

    /// Id of the level to edit
    #[arg(long)]
    id: Option<String>,

    /// Width of the gap to cut
    #[arg(long, default_value = "0.2", allow_negative_numbers = true)]
    width: f64,

    /// Index of the line to cut
    #[arg(long, default_value = "0")]
    line_idx: usize,

    /// Index of the point starting the segment to cut
    #[arg(long, default_value = "0")]
    point_idx: usize,

    /// Directory for the before/after plots
    #[arg(long, value_name = "DIR", default_value = "plots")]
    plot_dir: PathBuf,

    /// Skip the before/after plots
    #[arg(long)]
    no_plot: bool,

    /// Plot configuration file (JSON format)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Also write the complete edited level file here
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

impl CutArgs {
    /// Where the before/after plots go, unless plotting is switched off.
    fn plot_dir(&self) -> Option<&Path> {
        if self.no_plot {
            None
        } else {
            Some(&self.plot_dir)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.debug {
        log::LevelFilter::Debug
    } else if cli.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::List { input, name, id } => cmd_list(input, LevelFilter::new(name, id)),
        Commands::Plot {
            input,
            name,
            id,
            out_dir,
            config,
        } => cmd_plot(input, LevelFilter::new(name, id), out_dir, config),
        Commands::Cut(args) => cmd_cut(&args, &mut io::stdout().lock()),
    }
}

fn load_levels(input: &Path) -> Result<LevelSet> {
    info!("Loading levels from: {}", input.display());
    LevelSet::from_file(input)
        .with_context(|| format!("Failed to load level file: {}", input.display()))
}

fn load_plot_config(config: Option<PathBuf>) -> Result<PlotConfig> {
    match config {
        Some(path) => PlotConfig::from_file(&path)
            .with_context(|| format!("Failed to load plot config: {}", path.display())),
        None => Ok(PlotConfig::default()),
    }
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))
}

fn print_level_table(levels: &[&Level]) {
    let id_width = levels
        .iter()
        .map(|level| level.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(2);

    println!(
        "{:<width$}  {:>5}  {:>8}  {}",
        "ID",
        "LINES",
        "SEGMENTS",
        "NAME",
        width = id_width
    );
    println!("{:-<60}", "");
    for level in levels {
        let shape = level.shape();
        println!(
            "{:<width$}  {:>5}  {:>8}  {}",
            level.id,
            shape.line_count(),
            shape.segment_count(),
            level.name,
            width = id_width
        );
    }
}

fn cmd_list(input: PathBuf, filter: LevelFilter) -> Result<()> {
    let levels = load_levels(&input)?;
    let selected = levels.filter(&filter);

    if selected.is_empty() {
        warn!("No levels match the given name/id");
    }
    print_level_table(&selected);
    println!();
    println!("{} of {} levels", selected.len(), levels.len());

    Ok(())
}

fn cmd_plot(
    input: PathBuf,
    filter: LevelFilter,
    out_dir: PathBuf,
    config: Option<PathBuf>,
) -> Result<()> {
    let levels = load_levels(&input)?;
    let config = load_plot_config(config)?;
    info!("Using {}", config);

    let selected = levels.filter(&filter);
    if selected.is_empty() {
        warn!("No levels match the given name/id, nothing to plot");
        return Ok(());
    }
    print_level_table(&selected);

    create_dir(&out_dir)?;
    println!();
    for level in selected {
        let path = out_dir.join(format!("{}.svg", plot_file_stem(&level.id)));
        save_level_plot(level, &config, &path)
            .with_context(|| format!("Failed to plot level '{}'", level.name))?;
        println!("Plot written to: {}", path.display());
    }

    Ok(())
}

/// Run `cut`, writing the edited lines JSON (and nothing else) to `out`.
///
/// The cut is computed on a copy of the shape first, so a failing cut leaves
/// no plots or output file behind.
fn cmd_cut<W: Write>(args: &CutArgs, out: &mut W) -> Result<()> {
    let selector = LevelSelector::from_options(args.name.clone(), args.id.clone())?;
    let mut levels = load_levels(&args.input)?;
    let config = load_plot_config(args.config.clone())?;

    let level = levels.select_mut(&selector)?;
    info!("Editing level '{}' ({})", level.name, level.id);

    let mut edited = level.shape().clone();
    let gap = edited
        .cut_line(args.line_idx, args.point_idx, args.width)
        .with_context(|| {
            format!(
                "Failed to cut segment {} of line {} in level '{}'",
                args.point_idx, args.line_idx, level.name
            )
        })?;
    info!(
        "Cut line {} at segment {}: gap {}",
        args.line_idx, args.point_idx, gap
    );

    let plot_dir = args.plot_dir();
    if let Some(dir) = plot_dir {
        create_dir(dir)?;
        let path = dir.join(format!("{}-before.svg", plot_file_stem(&level.id)));
        save_level_plot(level, &config, &path).context("Failed to plot level before cut")?;
        info!("Plot before cut: {}", path.display());
    }

    *level.shape_mut() = edited;

    if let Some(dir) = plot_dir {
        let path = dir.join(format!("{}-after.svg", plot_file_stem(&level.id)));
        save_level_plot(level, &config, &path).context("Failed to plot level after cut")?;
        info!("Plot after cut: {}", path.display());
    }

    let lines_json = level
        .shape()
        .lines_to_json()
        .context("Failed to serialize lines")?;
    writeln!(out, "{}", lines_json).context("Failed to write lines")?;

    if let Some(output_path) = &args.output {
        levels
            .save(output_path)
            .with_context(|| format!("Failed to write level file: {}", output_path.display()))?;
        info!("Edited level file written to: {}", output_path.display());
    }

    Ok(())
}
