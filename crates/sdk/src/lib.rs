//! Client SDK for the pool launch factory.
//!
//! Provides:
//! - the [`Ledger`] capability trait the orchestrator runs against,
//! - an RPC-backed [`LaunchClient`] implementation,
//! - instruction builders for the pool, allowance and token programs,
//! - a scriptable in-memory [`testing::MockLedger`] for tests.

pub mod client;
pub mod config;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod pda;
pub mod testing;

pub use client::*;
pub use config::*;
pub use error::*;
pub use ledger::*;
