//! mdreport CLI - Markdown report to Word conversion

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;

use mdreport::{
    ConvertOptions, Converter, Error, JsonFormat, ParseOptions, DEFAULT_INPUT, DEFAULT_OUTPUT,
};

#[derive(Parser)]
#[command(name = "mdreport")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert a Markdown report to a Word document", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Output DOCX file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Title placed at the top of the document
    #[arg(long)]
    title: Option<String>,

    /// Subtitle placed under the title
    #[arg(long)]
    subtitle: Option<String>,

    /// Do not emit the title and subtitle
    #[arg(long, conflicts_with_all = ["title", "subtitle"])]
    no_preamble: bool,

    /// Print the document model as JSON instead of writing DOCX
    #[arg(long)]
    dump_json: bool,

    /// Print block statistics after conversion
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        let mut options = ParseOptions::new().with_preamble(!self.no_preamble);
        if let Some(ref title) = self.title {
            options = options.with_title(title);
        }
        if let Some(ref subtitle) = self.subtitle {
            options = options.with_subtitle(subtitle);
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let converter =
        Converter::new(ConvertOptions::new().with_parse_options(cli.parse_options()));

    let result = if cli.dump_json {
        cmd_dump_json(&converter, &cli.input)
    } else {
        cmd_convert(&converter, &cli.input, &cli.output, cli.verbose)
    };

    match result {
        Ok(()) => {}
        Err(e @ Error::InputNotFound(_)) => {
            println!("Error: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn ensure_input(input: &Path) -> mdreport::Result<()> {
    if input.exists() {
        Ok(())
    } else {
        Err(Error::InputNotFound(input.to_path_buf()))
    }
}

fn cmd_convert(
    converter: &Converter,
    input: &Path,
    output: &Path,
    verbose: bool,
) -> mdreport::Result<()> {
    ensure_input(input)?;
    log::debug!("Converting {} -> {}", input.display(), output.display());

    println!("Reading: {}", input.display());
    let document = converter.parse_file(input)?;

    println!("Creating: {}", output.display());
    let result = converter.write_document(document, output)?;
    println!("✓ Document created: {}", result.output.display());

    if verbose {
        print_stats(&result);
    }

    println!("Done!");
    Ok(())
}

fn cmd_dump_json(converter: &Converter, input: &Path) -> mdreport::Result<()> {
    ensure_input(input)?;

    let document = converter.parse_file(input)?;
    let json = mdreport::render::to_json(&document, JsonFormat::Pretty)?;
    println!("{}", json);
    Ok(())
}

fn print_stats(result: &mdreport::ConvertResult) {
    let stats = &result.stats;

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Blocks".bold(), result.document.block_count());
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Bullets".bold(), stats.bullet_count);
    println!("{}: {}", "Code blocks".bold(), stats.code_block_count);
    println!(
        "{}: {} ({} rows)",
        "Tables".bold(),
        stats.table_count,
        stats.table_row_count
    );
    println!("{}: {}", "Spacers".bold(), stats.spacer_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {} bytes", "Output size".bold(), result.bytes_written);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["mdreport"]);
        assert_eq!(cli.input, PathBuf::from("report/report.md"));
        assert_eq!(
            cli.output,
            PathBuf::from("report/AI_Finance_Project_Report.docx")
        );
        assert!(cli.parse_options().preamble);
    }

    #[test]
    fn test_preamble_overrides() {
        let cli = Cli::parse_from(["mdreport", "notes.md", "--title", "Notes"]);
        let options = cli.parse_options();
        assert_eq!(cli.input, PathBuf::from("notes.md"));
        assert_eq!(options.title, "Notes");

        let cli = Cli::parse_from(["mdreport", "--no-preamble"]);
        assert!(!cli.parse_options().preamble);
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.docx");
        let result = cmd_convert(
            &Converter::default(),
            &dir.path().join("missing.md"),
            &output,
            false,
        );

        assert!(matches!(result, Err(Error::InputNotFound(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.md");
        let output = dir.path().join("nested").join("report.docx");
        std::fs::write(&input, "# Summary\n\n- one\n").unwrap();

        cmd_convert(&Converter::default(), &input, &output, true).unwrap();
        assert!(output.exists());
    }
}
