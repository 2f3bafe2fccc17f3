use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ul_config::ConfigError),

    #[error("Client error: {0}")]
    Client(#[from] crate::ClientError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Terminal I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;
