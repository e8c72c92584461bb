use alloy::{dyn_abi, transports::TransportError};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong when aggregating calls.
///
/// A sub-call that reverts is not an error; it is reported through
/// [`crate::Outcome::success`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("no relay contract known for chain {0}")]
    UnsupportedNetwork(u64),

    #[error("failed to encode relay call")]
    Encoding(#[source] dyn_abi::Error),

    #[error("chain read failed")]
    Transport(#[from] TransportError),

    #[error("malformed relay response: {0}")]
    Decoding(String),

    #[error("duplicate call identifier {0}")]
    DuplicateIdentifier(String),
}

impl Error {
    /// Whether the error was caused by the setup rather than by the chain.
    /// These are detected before any request is sent.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::UnsupportedNetwork(_))
    }
}
