use anyhow::{Context, Result};
use clap::Parser;
use dialoguer::Confirm;
use rename_to_ascii::config::load_validated;
use rename_to_ascii::renamer::{apply, find_collisions, SkipReason};
use rename_to_ascii::{scan_with, CharacterSet, Proposal, ProposalSet, ScanOptions, SubstitutionSpec};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Rename files and directories to portable ASCII names",
    long_about = None
)]
struct Args {
    /// File or directory to rename
    filepath: PathBuf,

    /// Substitute forbidden characters to be compatible with 'windows', 'macos' or 'unix'
    #[arg(short, long, value_name = "TYPE")]
    compatibility: Option<String>,

    /// Do not rename, just print the proposed changes
    #[arg(short, long)]
    no_rename: bool,

    /// Rename without asking for confirmation
    #[arg(short = 'y', long)]
    skip_confirmation: bool,

    /// Do not rename directories
    #[arg(short = 'x', long, visible_alias = "xd")]
    exclude_directories: bool,

    /// Do not descend into subdirectories
    #[arg(short, long)]
    flat: bool,

    /// JSON file overriding the replacement of forbidden characters
    #[arg(short, long, value_name = "FILE", requires = "compatibility")]
    replacements: Option<PathBuf>,

    /// Print the proposals as JSON and exit without renaming
    #[arg(long)]
    json: bool,

    /// Print progress diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args).map_err(|e| {
        eprintln!("Error: {:#}", e);
        e
    })
}

fn run(args: Args) -> Result<()> {
    // Resolve the platform once; everything below works on the enum.
    let platform = args
        .compatibility
        .as_deref()
        .map(str::parse::<CharacterSet>)
        .transpose()?;
    let replacements = match (&args.replacements, platform) {
        (Some(path), Some(p)) => load_validated(path, p)
            .with_context(|| format!("Failed to load replacements: {}", path.display()))?,
        _ => SubstitutionSpec::default(),
    };
    let opts = ScanOptions {
        platform,
        include_dirs: !args.exclude_directories,
        recursive: !args.flat,
        replacements,
    };

    if args.verbose {
        eprintln!(
            "DEBUG: scanning {} (platform: {}, directories: {}, recursive: {})",
            args.filepath.display(),
            platform.map(|p| p.name()).unwrap_or("none"),
            opts.include_dirs,
            opts.recursive
        );
    }
    let set = scan_with(&args.filepath, &opts)?;
    for dir in &set.unreadable {
        eprintln!("Warning: could not read directory '{}'; its contents were skipped", dir.display());
    }
    if args.verbose {
        eprintln!("DEBUG: {} file and {} directory proposals", set.files.len(), set.dirs.len());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&set).context("Failed to serialize proposals")?);
        return Ok(());
    }
    if set.is_empty() {
        println!("Nothing to rename.");
        return Ok(());
    }
    print_proposals(&set);

    for c in find_collisions(&set) {
        let sources: Vec<String> = c.originals.iter().map(|o| format!("'{}'", o.display())).collect();
        if c.target_exists {
            eprintln!("Warning: '{}' already exists; {} will be skipped", c.proposed.display(), sources.join(", "));
        } else {
            eprintln!("Warning: {} all map to '{}' and will be skipped", sources.join(", "), c.proposed.display());
        }
    }

    if args.no_rename {
        return Ok(());
    }
    if !args.skip_confirmation && !confirm(set.len())? {
        println!("Aborted.");
        return Ok(());
    }

    let report = apply(&set, platform);
    let mut failed = 0usize;
    for (p, reason) in &report.skipped {
        if matches!(reason, SkipReason::Failed(_)) { failed += 1; }
        eprintln!("Warning: skipped '{}': {}", p.original.display(), reason);
    }
    if args.verbose {
        for p in &report.renamed {
            eprintln!("DEBUG: renamed {}", describe(p));
        }
    }
    println!("Renamed {} of {} entries.", report.renamed.len(), set.len());
    if failed > 0 {
        anyhow::bail!("{} rename(s) failed", failed);
    }
    Ok(())
}

fn describe(p: &Proposal) -> String {
    format!("'{}' -> '{}'", p.original.display(), p.proposed.display())
}

fn print_proposals(set: &ProposalSet) {
    if !set.files.is_empty() {
        println!("Files:");
        for p in &set.files { println!("  {}", describe(p)); }
    }
    if !set.dirs.is_empty() {
        println!("Directories:");
        for p in &set.dirs { println!("  {}", describe(p)); }
    }
}

// Interactive prompt on a TTY, plain y/n line from stdin otherwise.
fn confirm(count: usize) -> Result<bool> {
    let prompt = format!("Rename {} entries?", count);
    if io::stdin().is_terminal() {
        return Ok(Confirm::new().with_prompt(prompt).default(false).interact()?);
    }
    println!("{} (y/n, default: n)", prompt);
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).context("Failed to read confirmation")?;
    Ok(buf.trim().to_ascii_lowercase().starts_with('y'))
}
