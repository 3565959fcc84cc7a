//! repara CLI - numbered-paragraph PDF conversion tool

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use repara::{
    convert, BatchOptions, BatchReport, JsonSink, OutputFormat, ReconstructOptions, SpreadsheetSink,
    WordSink,
};

#[derive(Parser)]
#[command(name = "repara")]
#[command(version)]
#[command(
    about = "Reconstruct numbered paragraphs from PDFs into spreadsheets, word documents, and JSON",
    long_about = None
)]
struct Cli {
    /// Input directory of PDF files (or a single PDF)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output spreadsheet path
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Segmentation mode
    #[arg(long, value_enum)]
    mode: Option<SegmentMode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert PDFs to a spreadsheet, one sheet per document
    Xlsx {
        /// Input PDF file or directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output .xlsx path
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Segmentation mode
        #[arg(long, value_enum)]
        mode: Option<SegmentMode>,

        /// Process documents one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Convert PDFs to word documents, one .docx per source document
    Docx {
        /// Input PDF file or directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Segmentation mode
        #[arg(long, value_enum)]
        mode: Option<SegmentMode>,

        /// Process documents one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Convert PDFs to a single JSON file
    Json {
        /// Input PDF file or directory
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output .json path
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Segmentation mode
        #[arg(long, value_enum)]
        mode: Option<SegmentMode>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Process documents one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Reconstruct one PDF and print its paragraphs
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Segmentation mode
        #[arg(long, value_enum)]
        mode: Option<SegmentMode>,

        /// Print paragraphs as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SegmentMode {
    /// Numbered-paragraph documents (marker repair + marker segmentation)
    Numbered,
    /// Plain documents split at blank lines; page breaks become paragraph breaks
    BlankLines,
}

impl From<SegmentMode> for ReconstructOptions {
    fn from(mode: SegmentMode) -> Self {
        match mode {
            SegmentMode::Numbered => ReconstructOptions::numbered(),
            SegmentMode::BlankLines => ReconstructOptions::blank_lines(),
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Xlsx {
            input,
            output,
            mode,
            sequential,
        }) => cmd_convert(
            &input,
            output.as_deref(),
            OutputFormat::Spreadsheet,
            mode,
            sequential,
            false,
        ),
        Some(Commands::Docx {
            input,
            output,
            mode,
            sequential,
        }) => cmd_convert(
            &input,
            output.as_deref(),
            OutputFormat::Word,
            mode,
            sequential,
            false,
        ),
        Some(Commands::Json {
            input,
            output,
            mode,
            compact,
            sequential,
        }) => cmd_convert(
            &input,
            output.as_deref(),
            OutputFormat::Json,
            mode,
            sequential,
            compact,
        ),
        Some(Commands::Text { input, mode, json }) => cmd_text(&input, mode, json),
        None => {
            // Default behavior: spreadsheet conversion if input is provided
            if let Some(input) = cli.input {
                cmd_convert(
                    &input,
                    cli.output.as_deref(),
                    OutputFormat::Spreadsheet,
                    cli.mode,
                    false,
                    false,
                )
            } else {
                println!("{}", "Usage: repara <INPUT> [OUTPUT]".yellow());
                println!("       repara --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    mode: Option<SegmentMode>,
    sequential: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = if input.is_dir() {
        convert::pdf_files(input)?
    } else {
        vec![input.to_path_buf()]
    };

    if files.is_empty() {
        println!("{}", "No PDF files found.".yellow());
        return Ok(());
    }

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(format));

    let mut options = BatchOptions::new().with_format(format);
    if let Some(mode) = mode {
        options = options.with_reconstruct(mode.into());
    }
    if sequential {
        options = options.sequential();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Converting {} document(s)...", files.len()));

    let report = match format {
        OutputFormat::Spreadsheet => {
            let mut sink = SpreadsheetSink::create(&output);
            convert::convert_files(&files, &mut sink, &options)?
        }
        OutputFormat::Word => {
            let mut sink = WordSink::create(&output)?;
            convert::convert_files(&files, &mut sink, &options)?
        }
        OutputFormat::Json => {
            let mut sink = JsonSink::create(&output);
            if compact {
                sink = sink.compact();
            }
            convert::convert_files(&files, &mut sink, &options)?
        }
    };

    pb.finish_and_clear();
    print_report(&report, &output);

    if report.converted == 0 && !report.is_complete() {
        return Err("no documents could be converted".into());
    }
    Ok(())
}

fn cmd_text(
    input: &Path,
    mode: Option<SegmentMode>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = mode.map(ReconstructOptions::from).unwrap_or_default();
    let paragraphs = repara::reconstruct_file_with_options(input, &options)?;
    log::debug!("{}: {} paragraph(s)", input.display(), paragraphs.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&paragraphs)?);
    } else {
        for paragraph in &paragraphs {
            println!("{}", paragraph);
            println!();
        }
    }
    Ok(())
}

fn print_report(report: &BatchReport, output: &Path) {
    println!(
        "{} {} document(s) converted in {:.2}s",
        "Done:".green().bold(),
        report.converted,
        report.elapsed.as_secs_f64()
    );
    println!("  {} {}", "Output:".dimmed(), output.display());

    if !report.is_complete() {
        println!("{}", "Failed documents:".red().bold());
        for failure in &report.failures {
            println!(
                "  {} {} {}",
                "-".dimmed(),
                failure.path.display(),
                failure.reason.dimmed()
            );
        }
    }
}

fn default_output(format: OutputFormat) -> PathBuf {
    if format.writes_per_document() {
        PathBuf::from("word_outputs")
    } else {
        PathBuf::from(format!("numbered_paragraphs.{}", format.extension()))
    }
}
