//! Main entry point for the klsref CLI application.
//!
//! This binary resolves a `kls:` or `file:` archive entry reference and
//! either shows its derived properties, prints the referenced entry's
//! text, or extracts the entry to a file.

use anyhow::{Result, bail};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use klsref::{ArchiveEntryRef, Cli, TempFileScope, extract_to_temp_file, read_contents};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Normalize the identifier. A foreign scheme is a normal negative
    // result, so report it as one instead of a parse failure.
    let Some(reference) = ArchiveEntryRef::parse(&cli.reference)? else {
        bail!("not an archive entry reference: {}", cli.reference);
    };

    let reference = if cli.source {
        reference.with_source_flag(true)
    } else {
        reference
    };

    if cli.pipe {
        print!("{}", read_contents(&reference)?);
        return Ok(());
    }

    if cli.extract {
        return extract(&reference, &cli);
    }

    show(&reference);
    Ok(())
}

/// Extract the referenced entry and print the resulting path.
fn extract(reference: &ArchiveEntryRef, cli: &Cli) -> Result<()> {
    if !cli.is_quiet() {
        eprintln!("  extracting: {}", reference.file_name());
    }

    let path = if let Some(ref dir) = cli.extract_dir {
        extract_to_temp_file(reference, &DirScope(PathBuf::from(dir)))?
    } else {
        // No directory given: extract into a fresh temp directory and
        // hand its lifecycle to the user.
        let scope = tempfile::Builder::new().prefix("klsref-").tempdir()?;
        let path = extract_to_temp_file(reference, &scope)?;
        let _ = scope.keep();
        path
    };

    println!("{}", path.display());
    Ok(())
}

/// Display the resolved properties of a reference.
fn show(reference: &ArchiveEntryRef) {
    println!("{:<12} {}", "Reference:", reference.to_canonical_string());

    match reference.archive_path() {
        Ok(path) => println!("{:<12} {}", "Archive:", path.display()),
        Err(err) => println!("{:<12} ({err})", "Archive:"),
    }

    println!(
        "{:<12} {}",
        "Entry:",
        reference.inner_entry_path().unwrap_or("-")
    );
    println!("{:<12} {}", "File name:", reference.file_name());
    println!(
        "{:<12} {}",
        "Extension:",
        reference.file_extension().unwrap_or("-")
    );
    println!("{:<12} {}", "Compiled:", reference.is_compiled());
    println!("{:<12} {}", "Source flag:", reference.prefers_source());
}

/// Extraction scope over a user-chosen directory.
///
/// Unlike a temporary directory, nothing is cleaned up: the user asked for
/// the files to land here.
struct DirScope(PathBuf);

impl TempFileScope for DirScope {
    fn create_temp_file(&self, base_name: &str, extension: &str) -> io::Result<PathBuf> {
        std::fs::create_dir_all(&self.0)?;
        let path = self.0.join(format!("{base_name}.{extension}"));
        std::fs::File::create(&path)?;
        Ok(path)
    }
}
