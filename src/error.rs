use thiserror::Error;

/// Errors produced while reading a version string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input does not match the version grammar. Overflowing numeric
    /// segments are reported here as well.
    #[error("invalid version format: {input:?}")]
    InvalidFormat { input: String },
}

impl Error {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Error::InvalidFormat {
            input: input.to_string(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Error::InvalidFormat { input } => input,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
