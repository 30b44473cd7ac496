use solana_sdk::pubkey::Pubkey;
use std::fmt;
use thiserror::Error;

// ============================================================================
// Launch Steps
// ============================================================================

/// The seven ordered steps of a launch run, used to tag failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStep {
    IssueAssets,
    Canonicalize,
    BuildIdentity,
    InitializePool,
    GrantAllowances,
    DeriveLiquidity,
    SubmitLiquidity,
}

impl fmt::Display for LaunchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LaunchStep::IssueAssets => "issue assets",
            LaunchStep::Canonicalize => "canonicalize pair",
            LaunchStep::BuildIdentity => "build pool identity",
            LaunchStep::InitializePool => "initialize pool",
            LaunchStep::GrantAllowances => "grant allowances",
            LaunchStep::DeriveLiquidity => "derive liquidity",
            LaunchStep::SubmitLiquidity => "submit liquidity",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Launch Error Taxonomy
// ============================================================================

/// Failure causes a launch run can terminate with.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LaunchError {
    /// The token-issuance collaborator rejected the request
    #[error("asset issuance rejected: {0}")]
    Issuance(String),

    /// A pool with this identity already exists on the ledger
    #[error("pool already initialized for this identity")]
    AlreadyInitialized,

    /// The starting price or pool identity was rejected at initialization
    #[error("invalid starting price or pool identity: {0}")]
    InvalidPriceOrIdentity(String),

    /// The allowance registry rejected a delegation grant
    #[error("allowance grant rejected for mint {mint}: {reason}")]
    Allowance { mint: Pubkey, reason: String },

    /// The liquidity quantity could not be derived from the inputs
    #[error("liquidity derivation failed: {0}")]
    LiquidityDerivation(String),

    /// The ledger price moved beyond the configured deposit maxima
    #[error("price moved beyond the configured slippage maxima")]
    SlippageExceeded,

    /// The submission deadline elapsed before the request was accepted
    #[error("submission deadline elapsed before the request was accepted")]
    DeadlineExpired,

    /// The paired mint + settle actions were not applied as one unit
    #[error("combined mint and settle request rejected: {0}")]
    AtomicSubmission(String),

    /// Transport-level failure talking to the ledger
    #[error("ledger transport failure: {0}")]
    Transport(String),

    /// The launch sequence was driven a second time
    #[error("launch sequence already ran; a launcher is single-use")]
    AlreadyRun,
}

/// A terminal launch failure: the step that failed and the underlying cause.
///
/// Exactly one of these is produced per failed run; no later step is
/// attempted once it exists.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("launch failed at step '{step}': {cause}")]
pub struct LaunchFailure {
    pub step: LaunchStep,
    pub cause: LaunchError,
}

pub type LaunchResult<T> = Result<T, LaunchError>;

// ============================================================================
// Math Errors
// ============================================================================

/// Errors surfaced by the fixed-point and liquidity math.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("math overflow in '{0}'")]
    Overflow(&'static str),

    #[error("division by zero in '{0}'")]
    DivisionByZero(&'static str),

    #[error("tick {tick} outside [{min}, {max}]")]
    TickOutOfBounds { tick: i32, min: i32, max: i32 },

    #[error("invalid sqrt-price range: lower {lower} must be below upper {upper}")]
    InvalidPriceRange { lower: u128, upper: u128 },

    #[error("sqrt price must be non-zero")]
    ZeroPrice,
}

pub type MathResult<T> = Result<T, MathError>;

impl From<MathError> for LaunchError {
    fn from(err: MathError) -> Self {
        LaunchError::LiquidityDerivation(err.to_string())
    }
}
