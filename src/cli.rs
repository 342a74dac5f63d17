//! Command-line interface definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use termtype::export::{AspectRatio, ExportFormat};

#[cfg(not(feature = "release"))]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("TERMTYPE_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("TERMTYPE_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(name = "termtype")]
#[command(version = VERSION)]
#[command(about = "Fake terminal that types out code like a human would")]
#[command(
    long_about = "Replays source code one character at a time with humanized pauses, \
                  optionally preceded by scrambling loading phrases. Play it in your \
                  terminal or export it as HTML, an asciicast recording, a snapshot or JSON."
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file (the only way to log while playing)
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play the typing animation in this terminal
    Play(PlayArgs),
    /// Export the animation to a file
    Export(ExportArgs),
    /// Copy text to the system clipboard
    Copy {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List built-in code samples
    Samples,
    /// List color themes
    Themes,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where the text comes from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// File to type out, or `-` for stdin (defaults to a built-in sample)
    #[arg(value_name = "FILE")]
    pub file: Option<String>,

    /// Use the built-in sample for this language
    #[arg(long, value_name = "LANG", conflicts_with = "file")]
    pub sample: Option<String>,
}

/// One-off overrides of the configuration file.
#[derive(Debug, Clone, Default, Args)]
pub struct StyleArgs {
    /// Base delay per character in milliseconds
    #[arg(long, value_name = "MS")]
    pub speed: Option<f64>,

    /// Color theme (dark, light, claude, dracula, monokai, nord)
    #[arg(long)]
    pub theme: Option<String>,

    /// Window title
    #[arg(long)]
    pub title: Option<String>,

    /// Language label shown in the title bar
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Skip the loading phrases
    #[arg(long)]
    pub no_preamble: bool,

    /// Hide line numbers
    #[arg(long)]
    pub no_line_numbers: bool,

    /// Seed for reproducible timing
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Wait for Enter instead of starting immediately
    #[arg(long)]
    pub paused: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(value_enum)]
    pub format: ExportFormat,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Output path, or `-` for stdout (defaults to a name derived from the title)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Terminal shape in the HTML page
    #[arg(long, value_enum, default_value_t = AspectRatio::Auto)]
    pub aspect_ratio: AspectRatio,

    /// Keep colors in snapshots
    #[arg(long)]
    pub ansi: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Open configuration in $EDITOR
    Edit,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
