use crate::error::{SdkError, SdkResult};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
};
use std::sync::Arc;

/// SDK configuration for connecting to the ledger and the fixed protocol
/// contracts.
#[derive(Clone)]
pub struct SdkConfig {
    /// RPC endpoint URL
    pub rpc_url: String,

    /// Payer keypair for transactions
    pub payer: Arc<Keypair>,

    /// Pool program owning pool state and the liquidity entry point
    pub pool_program: Pubkey,

    /// Delegated-allowance registry program
    pub allowance_program: Pubkey,

    /// Entity that moves funds when liquidity settles; allowances are
    /// granted to it
    pub position_manager: Pubkey,

    /// Fixed partner recipient of the issuance supply remainder
    pub partner: Pubkey,

    /// Transaction commitment level
    pub commitment: CommitmentConfig,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SdkConfig {
    pub fn new(
        rpc_url: String,
        payer: Keypair,
        pool_program: Pubkey,
        allowance_program: Pubkey,
        position_manager: Pubkey,
        partner: Pubkey,
    ) -> Self {
        Self {
            rpc_url,
            payer: Arc::new(payer),
            pool_program,
            allowance_program,
            position_manager,
            partner,
            commitment: CommitmentConfig::confirmed(),
            timeout_secs: 30,
        }
    }

    /// Preset for a local test validator.
    pub fn localnet(
        payer: Keypair,
        pool_program: Pubkey,
        allowance_program: Pubkey,
        position_manager: Pubkey,
        partner: Pubkey,
    ) -> Self {
        Self::new(
            "http://127.0.0.1:8899".to_string(),
            payer,
            pool_program,
            allowance_program,
            position_manager,
            partner,
        )
    }

    /// Preset for the public devnet cluster.
    pub fn devnet(
        payer: Keypair,
        pool_program: Pubkey,
        allowance_program: Pubkey,
        position_manager: Pubkey,
        partner: Pubkey,
    ) -> Self {
        Self::new(
            "https://api.devnet.solana.com".to_string(),
            payer,
            pool_program,
            allowance_program,
            position_manager,
            partner,
        )
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Load a payer keypair from a JSON keypair file.
pub fn load_keypair(path: &str) -> SdkResult<Keypair> {
    read_keypair_file(path)
        .map_err(|e| SdkError::InvalidParameters(format!("keypair file {}: {}", path, e)))
}
