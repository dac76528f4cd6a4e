mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tanksnip",
    version,
    about = "Read key specs, nozzles and manways from API-650 tank calculation reports"
)]
struct Cli {
    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract specs, nozzles and manways and print them
    Extract {
        /// Path to a calculation report PDF or a flattened text dump
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        #[command(flatten)]
        extract: ExtractArgs,
    },
    /// Write the extracted data as CSV files named after the quotation and project
    Export {
        /// Path to a calculation report PDF or a flattened text dump
        input_file: PathBuf,

        /// Directory to write CSV files into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Also write one CSV file per table
        #[arg(long)]
        split: bool,

        #[command(flatten)]
        extract: ExtractArgs,
    },
    /// Print the flattened report text the extractors see
    Text {
        /// Path to a calculation report PDF or a flattened text dump
        input_file: PathBuf,

        /// Keep the PDF's physical layout (pdftotext -layout)
        #[arg(long)]
        layout: bool,
    },
    /// List the extracted field names in display order
    Fields,
}

#[derive(Args)]
struct ExtractArgs {
    /// JSON options file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Read anchor size and material only from the Anchors section
    #[arg(long)]
    scoped_anchors: bool,

    /// Keep the PDF's physical layout (pdftotext -layout)
    #[arg(long)]
    layout: bool,
}

impl ExtractArgs {
    fn into_settings(self) -> commands::ExtractSettings {
        commands::ExtractSettings {
            config: self.config,
            scoped_anchors: self.scoped_anchors,
            layout: self.layout,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            extract,
        } => commands::extract::run(input_file, &output, extract.into_settings()),
        Commands::Export {
            input_file,
            dir,
            split,
            extract,
        } => commands::export::run(input_file, dir, split, extract.into_settings()),
        Commands::Text { input_file, layout } => commands::text::run(input_file, layout),
        Commands::Fields => commands::fields::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
