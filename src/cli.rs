/// Command-line interface
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "histsweep")]
#[command(version)]
#[command(about = "Locate and destroy history and log artifacts", long_about = None)]
pub struct Args {
    /// Copy each target to the backup directory before destroying it
    #[arg(short, long)]
    pub backup: bool,

    /// Backup directory (flat, one file per erased source)
    #[arg(long, value_name = "DIR")]
    pub backup_dir: Option<String>,

    /// Report what would be done without touching the filesystem
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print per-target detail for silent outcomes
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip the interactive confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Optional JSON sweep profile with extra targets and protected prefixes
    #[arg(long, value_name = "FILE")]
    pub profile: Option<String>,
}
