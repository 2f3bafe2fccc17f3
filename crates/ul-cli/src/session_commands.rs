use clap::{CommandFactory, Parser, Subcommand};
use ul_core::SortKey;

/// One line typed into the interactive session
#[derive(Parser, Debug)]
#[command(name = "user-list")]
#[command(no_binary_name = true)]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
#[command(disable_version_flag = true)]
#[command(override_usage = "<COMMAND> [ARGS]")]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SessionCommands {
    /// Toggle alternate row shading
    Colors,
    /// Sort by country, or unsort when already sorted by country
    ToggleCountry,
    /// Sort by a column: first, last, country or none
    Sort { key: SortKey },
    /// Filter by country substring; no text clears the filter
    Filter {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Delete a user by id, or by row number written as #N
    Delete { target: String },
    /// Restore every deleted user
    Reset,
    /// Print the table again
    Show,
    /// List the ids of the visible rows
    Ids,
    /// Show this help
    Help,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

impl SessionLine {
    /// Parse a raw input line. Blank lines yield `Ok(None)`.
    pub fn parse_line(line: &str) -> Result<Option<SessionCommands>, clap::Error> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(None);
        }

        Self::try_parse_from(words).map(|parsed| Some(parsed.command))
    }

    /// Raw text after the command word, trimmed at both ends only
    pub fn arguments(line: &str) -> &str {
        let line = line.trim_start();
        line.find(char::is_whitespace)
            .map_or("", |end| line[end..].trim())
    }

    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}
