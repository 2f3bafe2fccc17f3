use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "user-list")]
#[command(about = "Browse, filter, sort and prune a batch of random users")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// User API endpoint (overrides [api].endpoint)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Number of users to fetch (overrides [api].results)
    #[arg(long, global = true)]
    pub results: Option<usize>,
}
