//! Shared types and interfaces for the pool launch factory.
//!
//! Everything the orchestrator threads between steps lives here: the issued
//! asset descriptors, the canonicalized pair, the pool identity, and the
//! liquidity request, together with the launch error taxonomy and the
//! protocol constants.

pub mod constants;
pub mod error;
pub mod pair;
pub mod pool;

pub use constants::*;
pub use error::*;
pub use pair::*;
pub use pool::*;
