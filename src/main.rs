use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use lineup_substitution::{file, substitute_all};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "lineup-substitution")]
#[command(about = "Replace text in a file while keeping parameter lists aligned", long_about = None)]
#[command(version)]
#[command(after_help = "WARNING: the file is modified in place, without a backup.")]
struct Cli {
    /// Literal text to search for (case-sensitive, no regex)
    search: String,

    /// Text to replace it with (may be empty)
    replacement: String,

    /// File to modify in place
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.search.is_empty() {
        eprintln!("{} the search text must not be empty", "error:".red().bold());
        process::exit(2);
    }

    let mut buffer = file::load(&cli.file)?;

    let summary = match substitute_all(&mut buffer, &cli.search, &cli.replacement) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            eprintln!(
                "  {}",
                format!("{} was left untouched", cli.file.display()).dimmed()
            );
            process::exit(1);
        }
    };

    file::save(&cli.file, &buffer)?;

    if summary.replacements == 0 {
        println!(
            "{}",
            format!(
                "No occurrence of '{}' in {}",
                cli.search,
                cli.file.display()
            )
            .yellow()
        );
    } else {
        println!(
            "{} {}: {} occurrence(s) replaced, {} line(s) realigned",
            "✓".green(),
            cli.file.display(),
            summary.replacements,
            summary.realigned_lines
        );
    }

    Ok(())
}
