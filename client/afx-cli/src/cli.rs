use crate::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "afx")]
#[command(about = "AFX dashboard client: session, route guards and API calls")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
