use clap::Subcommand;
use ul_core::SortKey;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive session (default)
    Browse,

    /// Fetch once, print the table and exit
    Show {
        /// Shade alternate rows
        #[arg(long)]
        colors: bool,
        /// Sort column: first, last, country or none
        #[arg(long)]
        sort: Option<SortKey>,
        /// Country substring filter
        #[arg(long)]
        filter: Option<String>,
    },
}
