use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "renum")]
#[command(about = "Batch-rename files by creation order", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rename every file in a directory to <name>_<n><ext>, ordered by creation time
    Run(RunArgs),
    /// Show the rename plan without touching any files
    Preview(PreviewArgs),
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Directory whose files will be renamed
    #[arg(short, long)]
    pub directory: Option<String>,

    /// Base name for the generated filenames
    #[arg(short, long)]
    pub name: Option<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Directory whose files would be renamed
    #[arg(short, long)]
    pub directory: Option<String>,

    /// Base name for the generated filenames
    #[arg(short, long)]
    pub name: Option<String>,
}
