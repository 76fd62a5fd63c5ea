//! methex CLI - Methods-section extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

use methex::{
    extract_methods_with_options, filter_text, select_hocr_files, Corpus,
    ExtractOptions, HocrParser,
};

/// Default output directory for extracted sections.
const DEFAULT_OUTPUT_DIR: &str = "./output";

#[derive(Parser)]
#[command(name = "methex")]
#[command(version)]
#[command(about = "Extract the Methods section from hOCR page scans", long_about = None)]
struct Cli {
    /// Input directory containing hOCR page files
    #[arg(value_name = "DIR")]
    input: Option<PathBuf>,

    /// Output directory for the extracted section
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the Methods section and write it to a file
    Extract {
        /// Input directory containing hOCR page files
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory for the extracted section
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Number of leading pages to skip during boundary search
        #[arg(long, default_value = "0")]
        skip_pages: usize,
    },

    /// Print the section boundary coordinates as JSON
    Locate {
        /// Input directory containing hOCR page files
        #[arg(value_name = "DIR")]
        input: PathBuf,
    },

    /// Print the filtered text of the whole corpus
    Text {
        /// Input directory containing hOCR page files
        #[arg(value_name = "DIR")]
        input: PathBuf,
    },

    /// Show corpus information
    Info {
        /// Input directory containing hOCR page files
        #[arg(value_name = "DIR")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            skip_pages,
        }) => cmd_extract(&input, output.as_deref(), skip_pages),
        Some(Commands::Locate { input }) => cmd_locate(&input),
        Some(Commands::Text { input }) => cmd_text(&input),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            // Default behavior: extract if input is provided
            if let Some(input) = cli.input {
                cmd_extract(&input, cli.output.as_deref(), 0)
            } else {
                println!("{}", "Usage: methex <DIR> [-o DIR]".yellow());
                println!("       methex --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Load a corpus, driving a progress bar while the page files parse.
fn load_corpus(input: &Path) -> Result<Corpus, Box<dyn std::error::Error>> {
    let files = select_hocr_files(input)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Parsing pages...");

    let parser = HocrParser::new()?;
    let mut pages = Vec::with_capacity(files.len());
    for (index, file) in files.iter().enumerate() {
        let source = fs::read_to_string(file)?;
        pages.push(parser.parse(index, &source)?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(Corpus::new(input.display().to_string(), pages))
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    skip_pages: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = load_corpus(input)?;

    let options = ExtractOptions::new().with_skip_pages(skip_pages);
    let extraction = extract_methods_with_options(&corpus, &options)?;

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    fs::create_dir_all(&output_dir)?;

    let path = output_dir.join(methods_file_name(input));
    fs::write(&path, &extraction.text)?;

    println!("{} {}", "Saved to".green().bold(), path.display());
    println!(
        "{}: {}",
        "Section start".bold(),
        extraction.start.to_string().dimmed()
    );
    println!(
        "{}: {}",
        "Section end".bold(),
        extraction.end.to_string().dimmed()
    );

    Ok(())
}

fn cmd_locate(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = load_corpus(input)?;

    let start = methex::find_methods_start(&corpus)?;
    let end = methex::find_methods_end(&corpus)?;

    let boundaries = json!({ "start": start, "end": end });
    println!("{}", serde_json::to_string_pretty(&boundaries)?);

    Ok(())
}

fn cmd_text(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = load_corpus(input)?;

    let text = corpus
        .pages()
        .iter()
        .map(|page| filter_text(page, None, None))
        .collect::<Vec<_>>()
        .join("\n");
    println!("{}", text);

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let corpus = load_corpus(input)?;

    println!("{}", "Corpus Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Input".bold(), input.display());
    println!("{}: {}", "Pages".bold(), corpus.page_count());

    let areas: usize = corpus.pages().iter().map(|p| p.area_count()).sum();
    let lines: usize = corpus.pages().iter().map(|p| p.line_count()).sum();
    println!("{}: {}", "Areas".bold(), areas);
    println!("{}: {}", "Lines".bold(), lines);

    println!();
    for page in corpus.pages() {
        println!(
            "  {} page {:>3}: {} areas, {} lines",
            "├─".dimmed(),
            page.index,
            page.area_count(),
            page.line_count()
        );
    }

    Ok(())
}

/// Derive the output file name from the input directory.
///
/// Papers are laid out as `<paper>/tesseract/page-*.html`, so the paper
/// name is the stem of the input directory's parent; the output file is
/// `<paper>_methods.txt`.
fn methods_file_name(input: &Path) -> String {
    let paper = input
        .parent()
        .and_then(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "paper".to_string());
    format!("{}_methods.txt", paper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_methods_file_name_uses_parent_stem() {
        let name = methods_file_name(Path::new("papers/smith2019/tesseract"));
        assert_eq!(name, "smith2019_methods.txt");
    }

    #[test]
    fn test_methods_file_name_fallback() {
        assert_eq!(methods_file_name(Path::new("tesseract")), "paper_methods.txt");
    }

    #[test]
    fn test_extract_writes_output_file() {
        let input_root = tempfile::tempdir().unwrap();
        let paper_dir = input_root.path().join("doe2021").join("tesseract");
        fs::create_dir_all(&paper_dir).unwrap();

        fs::write(
            paper_dir.join("page-1.html"),
            "<div class=\"ocr_carea\">\
             <span class=\"ocr_line\"><span class=\"ocrx_word\">Methods</span></span>\
             <span class=\"ocr_line\"><span class=\"ocrx_word\">body</span></span>\
             </div>\
             <div class=\"ocr_carea\">\
             <span class=\"ocr_line\"><span class=\"ocrx_word\">Discussion</span></span>\
             </div>",
        )
        .unwrap();

        let output_dir = tempfile::tempdir().unwrap();
        cmd_extract(&paper_dir, Some(output_dir.path()), 0).unwrap();

        let written = output_dir.path().join("doe2021_methods.txt");
        let text = fs::read_to_string(written).unwrap();
        assert_eq!(text, "Methods\nbody");
    }

    #[test]
    fn test_extract_failure_writes_nothing() {
        let input_root = tempfile::tempdir().unwrap();
        let paper_dir = input_root.path().join("doe2021").join("tesseract");
        fs::create_dir_all(&paper_dir).unwrap();

        fs::write(
            paper_dir.join("page-1.html"),
            "<div class=\"ocr_carea\">\
             <span class=\"ocr_line\"><span class=\"ocrx_word\">prose</span></span>\
             </div>",
        )
        .unwrap();

        let output_dir = tempfile::tempdir().unwrap();
        let result = cmd_extract(&paper_dir, Some(output_dir.path()), 0);
        assert!(result.is_err());
        assert!(fs::read_dir(output_dir.path()).unwrap().next().is_none());
    }
}
