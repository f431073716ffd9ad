//! CLI tool for generating the MailMind presentation.

use anyhow::{bail, Context, Result};
use clap::Parser;
use deck_core::DeckOutline;
use deck_pptx::{PptxReader, PptxWriter};
use mailmind_deck::DEFAULT_FILE_NAME;
use std::path::{Path, PathBuf};

/// Generate the MailMind AlgoQuest 2025 Round 2 deck as a .pptx file.
#[derive(Parser, Debug)]
#[command(name = "generate-deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file (default: MailMind_AlgoQuest_R2.pptx in the cli crate's source
    /// directory when run from a build tree, otherwise in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Read the written file back and check its slide count
    #[arg(long)]
    verify: bool,

    /// Print the read-back outline as JSON
    #[arg(long)]
    outline: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let presentation = mailmind_deck::build().context("Failed to build presentation")?;

    let output_path = get_output_path(args.output.as_deref())?;
    PptxWriter::new()
        .with_creator("Team Cipher")
        .save(&presentation, &output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("[OK] Presentation saved -> {}", output_path.display());
    println!("     Slides: {}", presentation.slide_count());

    if args.verify || args.outline {
        let outline = read_back(&output_path)?;

        if args.verify && outline.slide_count() != presentation.slide_count() {
            bail!(
                "{} has {} slides, expected {}",
                output_path.display(),
                outline.slide_count(),
                presentation.slide_count()
            );
        }
        if args.verbose {
            eprintln!("  Read back {} slides", outline.slide_count());
        }

        if args.outline {
            let json = serde_json::to_string_pretty(&outline)
                .context("Failed to serialize outline")?;
            println!("{}", json);
        }
    }

    Ok(())
}

/// Determine where the deck is written, creating parent directories as needed.
fn get_output_path(output: Option<&Path>) -> Result<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_dir().join(DEFAULT_FILE_NAME),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    Ok(path)
}

/// The crate directory the binary was built from, if it still exists.
///
/// An installed binary falls back to the current directory.
fn default_output_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    if manifest_dir.is_dir() {
        manifest_dir.to_path_buf()
    } else {
        log::debug!(
            "{} no longer exists, writing to the current directory",
            manifest_dir.display()
        );
        PathBuf::from(".")
    }
}

/// Re-open a written deck and collect its outline.
fn read_back(path: &Path) -> Result<DeckOutline> {
    log::debug!("Reading back {}", path.display());
    PptxReader::new()
        .open(path)
        .with_context(|| format!("Failed to read back {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_is_in_the_crate_directory() {
        let path = get_output_path(None).unwrap();
        assert_eq!(path, Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_FILE_NAME));
    }

    #[test]
    fn test_explicit_output_creates_parent_directory() {
        let dir = std::env::temp_dir().join(format!("generate-deck-{}", std::process::id()));
        let requested = dir.join("nested").join("deck.pptx");

        let path = get_output_path(Some(requested.as_path())).unwrap();
        assert_eq!(path, requested);
        assert!(requested.parent().unwrap().is_dir());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_args_parse_flags() {
        let args = Args::parse_from(["generate-deck", "-o", "out.pptx", "-v", "--verify"]);
        assert_eq!(args.output, Some(PathBuf::from("out.pptx")));
        assert!(args.verbose);
        assert!(args.verify);
        assert!(!args.outline);
    }
}
