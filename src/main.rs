// SPDX-License-Identifier: GPL-3.0-only

//! Command-line interface for sa2txt.
//!
//! This binary classifies saved study-assistant message files and writes
//! their canonical plain-text exports, or reports the detected content
//! kind per file with `--classify`.

use chrono::Utc;
use lexopt::prelude::*;
use sa2txt::{classifier, export};
use snafu::{OptionExt, ensure, prelude::*};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Where to write the exported output.
#[derive(Clone)]
enum OutputTarget {
    /// Write each file to the specified directory.
    Directory(PathBuf),
    /// Write to stdout.
    Stdout,
}

#[allow(clippy::struct_excessive_bools)]
struct Cli {
    input: Vec<PathBuf>,
    output: OutputTarget,
    concat: bool,
    classify_only: bool,
    timestamp_names: bool,
    quiet: bool,
    dry_run: bool,
    force: bool,
}

#[derive(Debug, Snafu)]
enum Error {
    #[snafu(display("failed to parse arguments: {source}"))]
    ParseArgs { source: lexopt::Error },

    #[snafu(display("at least one input file or directory is required"))]
    NoInputFiles,

    #[snafu(display("cannot output multiple files to stdout without --concat"))]
    MultipleFilesToStdout,

    #[snafu(display("failed to create output directory: {source}"))]
    CreateOutputDir { source: std::io::Error },

    #[snafu(display("failed to read {}: {source}", path.display()))]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("invalid input filename: no file stem"))]
    InvalidFilename,

    #[snafu(display("failed to write {}: {source}", path.display()))]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn print_help() {
    println!(
        "\
{name} {version}
Classify and export study-assistant chat responses as plain text

Usage: {name} [OPTIONS] -o <OUTPUT> <INPUT>...

Arguments:
  <INPUT>...  Saved message files or directories containing them

Options:
  -o, --output <OUTPUT>   Output directory (or file with --concat, or - for stdout)
      --concat            Combine all inputs into a single output
  -k, --classify          Print the detected content kind per input instead of exporting
      --timestamp-names   Name outputs study-assistant-response-<timestamp>.txt

Other options:
  -q, --quiet             Suppress progress messages
  -n, --dry-run           Show what would be processed without writing
  -f, --force             Overwrite existing output files
  -h, --help              Print help
  -V, --version           Print version",
        name = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    );
}

fn parse_args() -> Result<Cli, lexopt::Error> {
    // Show help if no arguments provided
    if std::env::args().len() == 1 {
        print_help();
        std::process::exit(0);
    }

    let mut input = Vec::new();
    let mut output: Option<OutputTarget> = None;
    let mut concat = false;
    let mut classify_only = false;
    let mut timestamp_names = false;
    let mut quiet = false;
    let mut dry_run = false;
    let mut force = false;

    let mut parser = lexopt::Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Short('o') | Long("output") => {
                let val: PathBuf = parser.value()?.parse()?;
                output = Some(if val == Path::new("-") {
                    OutputTarget::Stdout
                } else {
                    OutputTarget::Directory(val)
                });
            }
            Long("concat") => concat = true,
            Short('k') | Long("classify") => classify_only = true,
            Long("timestamp-names") => timestamp_names = true,
            Short('q') | Long("quiet") => quiet = true,
            Short('n') | Long("dry-run") => dry_run = true,
            Short('f') | Long("force") => force = true,
            Short('h') | Long("help") => {
                print_help();
                std::process::exit(0);
            }
            Short('V') | Long("version") => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            Value(val) => input.push(val.parse()?),
            _ => return Err(arg.unexpected()),
        }
    }

    Ok(Cli {
        input,
        // --classify needs no output target; default to stdout there.
        output: match output {
            Some(target) => target,
            None if classify_only => OutputTarget::Stdout,
            None => return Err("missing required option: --output".into()),
        },
        concat,
        classify_only,
        timestamp_names,
        quiet,
        dry_run,
        force,
    })
}

fn main() -> Result<(), Error> {
    let cli = parse_args().context(ParseArgsSnafu)?;

    ensure!(!cli.input.is_empty(), NoInputFilesSnafu);

    // Collect all input files first
    let files = collect_input_files(&cli.input);

    if cli.classify_only {
        for file in &files {
            let raw = std::fs::read_to_string(file).context(ReadFileSnafu { path: file })?;
            println!("{}: {}", file.display(), classifier::classify(&raw).kind());
        }
        return Ok(());
    }

    if cli.concat {
        process_concat(&files, &cli)?;
    } else {
        match &cli.output {
            OutputTarget::Stdout => {
                // Without concat, we can only output one file to stdout
                ensure!(files.len() == 1, MultipleFilesToStdoutSnafu);
                process_to_stdout(&files[0], &cli)?;
            }
            OutputTarget::Directory(dir) => {
                if !cli.dry_run {
                    std::fs::create_dir_all(dir).context(CreateOutputDirSnafu)?;
                }
                for file in &files {
                    process_file(file, dir, &cli)?;
                }
            }
        }
    }

    Ok(())
}

/// Collects all message files from the given inputs (files and directories).
fn collect_input_files(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input)
                .into_iter()
                .filter_map(Result::ok)
                .filter(|e| {
                    e.path()
                        .extension()
                        .is_some_and(|ext| ext == "txt" || ext == "json" || ext == "md")
                })
            {
                files.push(entry.path().to_path_buf());
            }
        } else {
            files.push(input.clone());
        }
    }
    files
}

/// Reads a message file and produces its plain-text export.
fn export_text(input: &Path) -> Result<String, Error> {
    let raw = std::fs::read_to_string(input).context(ReadFileSnafu { path: input })?;
    let content = classifier::classify(&raw);
    Ok(export::to_plain_text(&content, &raw))
}

/// Processes a single file and outputs to stdout.
fn process_to_stdout(input: &Path, cli: &Cli) -> Result<(), Error> {
    if cli.dry_run {
        eprintln!("Would output {}", input.display());
        return Ok(());
    }

    print!("{}", export_text(input)?);
    Ok(())
}

/// Processes multiple files and concatenates them into a single output.
fn process_concat(files: &[PathBuf], cli: &Cli) -> Result<(), Error> {
    let mut output = String::new();

    for (i, path) in files.iter().enumerate() {
        if i > 0 {
            output.push_str("\n---\n\n");
        }
        output.push_str(&export_text(path)?);
    }

    match &cli.output {
        OutputTarget::Stdout => {
            if cli.dry_run {
                eprintln!("Would output {} files concatenated", files.len());
            } else {
                print!("{output}");
            }
        }
        OutputTarget::Directory(path) => {
            // In concat mode, treat path as a file, not directory
            if cli.dry_run {
                eprintln!(
                    "Would write {} ({} files concatenated)",
                    path.display(),
                    files.len()
                );
            } else if path.exists() && !cli.force {
                eprintln!(
                    "Skipping {} (already exists, use --force to overwrite)",
                    path.display()
                );
            } else {
                // Create parent directory if needed
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                {
                    std::fs::create_dir_all(parent).context(CreateOutputDirSnafu)?;
                }
                std::fs::write(path, &output).context(WriteFileSnafu { path })?;
                if !cli.quiet {
                    eprintln!("Wrote {} ({} files)", path.display(), files.len());
                }
            }
        }
    }

    Ok(())
}

/// Processes a single file and writes to the output directory.
fn process_file(input: &Path, out_dir: &Path, cli: &Cli) -> Result<(), Error> {
    let out_path = if cli.timestamp_names {
        out_dir.join(export::export_filename(Utc::now()))
    } else {
        let out_name = input.file_stem().context(InvalidFilenameSnafu)?;
        out_dir.join(format!("{}.txt", out_name.to_string_lossy()))
    };

    // Handle dry-run mode
    if cli.dry_run {
        eprintln!("Would write {}", out_path.display());
        return Ok(());
    }

    // Check if output exists and handle overwrite
    if out_path.exists() && !cli.force {
        eprintln!(
            "Skipping {} (already exists, use --force to overwrite)",
            out_path.display()
        );
        return Ok(());
    }

    std::fs::write(&out_path, export_text(input)?).context(WriteFileSnafu { path: &out_path })?;

    if !cli.quiet {
        eprintln!("Wrote {}", out_path.display());
    }
    Ok(())
}
