use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing Alpha Vantage API key (use --api-key or set ALPHAVANTAGE_API_KEY)")]
    MissingApiKey,

    #[error(transparent)]
    Start(#[from] hindsight_core::StartError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingApiKey => 2,
            Self::Start(_) => 3,
            Self::Io(_) => 10,
        }
    }
}
