use thiserror::Error;

/// Errors produced while parsing, expanding or projecting addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("'{input}' is not a valid IP address: {reason}")]
    InvalidAddress { input: String, reason: String },

    #[error("'{input}' is not a valid IPv4 subnet: {reason}")]
    InvalidSubnet { input: String, reason: String },

    /// Raised by strict parsing only; lenient parsing normalizes instead.
    #[error("'{input}' has host bits set")]
    HostBitsSet { input: String },

    #[error("{subnet} has {hosts} usable hosts, more than the limit of {limit}")]
    SubnetTooLarge {
        subnet: String,
        hosts: u64,
        limit: u64,
    },

    #[error("invalid projection: {0}")]
    InvalidProjection(String),
}

pub type Result<T> = std::result::Result<T, TranslateError>;
