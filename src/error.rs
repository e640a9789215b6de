use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{flag} must be a finite number")]
    NonFinite { flag: &'static str },
    #[error("{flag} must be <= {max}")]
    AboveCeiling { flag: &'static str, max: u32 },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode result: {0}")]
    Encode(#[source] serde_json::Error),
}
