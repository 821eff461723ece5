//! CLI for gradepair: grade-pair heatmaps and correlations.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gradepair")]
#[command(about = "gradepair: co-occurrence heatmaps and Pearson correlation for paired 0-5 grades")]
#[command(version = gradepair_core::VERSION)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render each dataset to an SVG heatmap and report its correlation
    Render {
        /// Embedded dataset to process: old, new, all, or none (only --pairs files)
        #[arg(long, default_value = "all", value_parser = ["old", "new", "all", "none"])]
        dataset: String,

        /// Extra dataset as a JSON array of [x, y] pairs (repeatable)
        #[arg(long = "pairs")]
        pairs: Vec<PathBuf>,

        /// Directory for the <name>.svg files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Write the full per-dataset report as JSON
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Report Pearson correlation only
    Correlate {
        /// Embedded dataset to process: old, new, all, or none (only --pairs files)
        #[arg(long, default_value = "all", value_parser = ["old", "new", "all", "none"])]
        dataset: String,

        /// Extra dataset as a JSON array of [x, y] pairs (repeatable)
        #[arg(long = "pairs")]
        pairs: Vec<PathBuf>,
    },

    /// Print the 6x6 grid as a table, row 5 on top
    Matrix {
        /// Embedded dataset to process: old, new, all, or none (only --pairs files)
        #[arg(long, default_value = "all", value_parser = ["old", "new", "all", "none"])]
        dataset: String,

        /// Extra dataset as a JSON array of [x, y] pairs (repeatable)
        #[arg(long = "pairs")]
        pairs: Vec<PathBuf>,

        /// Print normalized weights instead of raw counts
        #[arg(long)]
        normalized: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    commands::init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            dataset,
            pairs,
            out_dir,
            output,
        } => commands::render::run(commands::render::RenderCommandConfig {
            dataset: &dataset,
            pair_files: &pairs,
            out_dir: &out_dir,
            output_path: output.as_deref(),
        }),
        Commands::Correlate { dataset, pairs } => commands::correlate::run(&dataset, &pairs),
        Commands::Matrix {
            dataset,
            pairs,
            normalized,
        } => commands::matrix::run(&dataset, &pairs, normalized),
    }
}
