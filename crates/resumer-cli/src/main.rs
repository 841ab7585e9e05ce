mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use resumer_core::extraction::pdfextract::PdfExtractBackend;
use resumer_core::extraction::pdftotext::PdftotextExtractor;
use resumer_core::extraction::PdfExtractor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "resumer",
    version,
    about = "Split a PDF résumé into labeled sections"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a résumé (PDF or pre-extracted .txt) into sections
    Parse {
        /// Path to PDF or .txt file
        input_file: PathBuf,

        /// Output format: json (default) or text
        #[arg(short, long, default_value = "json")]
        output: String,

        /// Write parsed output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Only print this section (e.g. "Skills", "course work")
        #[arg(short, long, value_name = "NAME")]
        section: Option<String>,

        /// Fail when section headers are missing, repeated or out of order
        #[arg(long)]
        strict: bool,

        /// PDF text extraction backend
        #[arg(short, long, value_enum, default_value_t = Backend::PdfExtract)]
        backend: Backend,
    },
    /// Print the text the section splitter sees
    Text {
        /// Path to PDF or .txt file
        input_file: PathBuf,

        /// Print the raw extracted text instead of the normalized text
        #[arg(long)]
        raw: bool,

        /// PDF text extraction backend
        #[arg(short, long, value_enum, default_value_t = Backend::PdfExtract)]
        backend: Backend,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Backend {
    /// In-process extraction (no external tools)
    PdfExtract,
    /// poppler's pdftotext binary
    Pdftotext,
}

impl Backend {
    fn extractor(self) -> Box<dyn PdfExtractor> {
        match self {
            Backend::PdfExtract => Box::new(PdfExtractBackend::new()),
            Backend::Pdftotext => Box::new(PdftotextExtractor::new()),
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "resumer_core={default_level},resumer={default_level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
            section,
            strict,
            backend,
        } => commands::parse::run(
            input_file,
            &output,
            out,
            section.as_deref(),
            strict,
            backend.extractor().as_ref(),
        ),
        Commands::Text {
            input_file,
            raw,
            backend,
        } => commands::text::run(input_file, raw, backend.extractor().as_ref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
