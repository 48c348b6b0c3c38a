//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "comche",
    version,
    about = "Comment tag checker",
    long_about = "Comche — a tiny, fast CLI that scans source files for marker comments (# TODO, # FIXME, # BUG) and fails the run when findings exceed a threshold.\n\nConfiguration precedence: CLI > comche.toml > defaults.",
    after_help = "Examples:\n  comche scan --mode root --dir src\n  comche scan --tags TODO,HACK --fail 5 --output json a.py b.py\n  comche scan --mode commit $(git diff --cached --name-only)",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current comche version."
    )]
    Version,
    /// Scan files for marker comments
    #[command(
        about = "Run a tag scan",
        long_about = "Scan the file set for configured tags. In commit mode the trailing FILES are filtered by extension; in root mode the directory tree under --dir is walked. Exit status: 0 pass, 1 threshold exceeded, 2 configuration error.",
        after_help = "Examples:\n  comche scan --mode root --dir . --tags TODO,BUG,FIXME\n  comche scan --fail 3 changed1.py changed2.py"
    )]
    Scan {
        #[arg(long, help = "Repository root (default: auto-detected from current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Root directory for root mode (default: .)")]
        dir: Option<String>,
        #[arg(long, help = "Mode of operation: commit|root (default: commit)")]
        mode: Option<String>,
        #[arg(long, help = "Comma-separated list of tags (default: TODO,BUG,FIXME)")]
        tags: Option<String>,
        #[arg(long, help = "Fail when findings exceed this count (default: 0)")]
        fail: Option<usize>,
        #[arg(long, help = "Source file extension to scan (default: py)")]
        ext: Option<String>,
        #[arg(long, help = "Comment prefix symbol (default: #)")]
        comment: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(help = "Files to scan in commit mode (e.g. from a commit diff)")]
        files: Vec<String>,
    },
}
