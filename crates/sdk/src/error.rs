//! SDK error types

use launch_types::LaunchError;
use thiserror::Error;

/// Transport and encoding failures inside the SDK client.
#[derive(Error, Debug)]
pub enum SdkError {
    /// RPC error
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Transaction building or signing error
    #[error("transaction error: {0}")]
    Transaction(String),

    /// Account not found
    #[error("account not found: {0}")]
    AccountNotFound(String),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Instruction data serialization failed
    #[error("failed to serialize instruction data: {0}")]
    Serialization(String),
}

impl From<solana_client::client_error::ClientError> for SdkError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        SdkError::Rpc(err.to_string())
    }
}

impl From<std::io::Error> for SdkError {
    fn from(err: std::io::Error) -> Self {
        SdkError::Serialization(err.to_string())
    }
}

impl From<solana_sdk::program_error::ProgramError> for SdkError {
    fn from(err: solana_sdk::program_error::ProgramError) -> Self {
        SdkError::Transaction(err.to_string())
    }
}

impl From<SdkError> for LaunchError {
    fn from(err: SdkError) -> Self {
        LaunchError::Transport(err.to_string())
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
