//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// shalias - Shell alias scripts from an XML catalogue
#[derive(Parser, Debug)]
#[command(name = "shalias")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate alias scripts for the selected shell dialects
    Generate(GenerateArgs),

    /// Render the alias catalogue as a Markdown reference page
    Report(ReportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// Generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the alias definition document
    #[arg(short, long, default_value = "aliases.xml")]
    pub aliases: Utf8PathBuf,

    /// Directory the generated scripts are written to
    #[arg(short, long, default_value = "alias-scripts")]
    pub output: Utf8PathBuf,

    /// Dialects to generate scripts for (default: all)
    #[arg(short, long, value_enum)]
    pub scripts: Vec<ScriptId>,

    /// Name of the help alias added to every script
    #[arg(long, default_value = "h")]
    pub help_alias: String,

    /// Comment rendered at the top of each script
    #[arg(long)]
    pub intro: Option<String>,

    /// Comment rendered at the bottom of each script
    #[arg(long)]
    pub extro: Option<String>,

    /// URL to further documentation, shown in the help listing
    #[arg(long)]
    pub doc_url: Option<String>,

    /// Add installation instructions to the generated scripts
    #[arg(long)]
    pub installation_comment: bool,

    /// Skip script generation
    #[arg(long)]
    pub skip: bool,
}

/// The shell dialects scripts can be generated for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScriptId {
    Bash,
    Windows,
}

// Report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the alias definition document
    #[arg(short, long, default_value = "aliases.xml")]
    pub aliases: Utf8PathBuf,

    /// File the Markdown reference is written to
    #[arg(short, long, default_value = "ALIASES.md")]
    pub output: Utf8PathBuf,

    /// Print the reference to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

// Completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
