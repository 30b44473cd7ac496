//! One-shot launch orchestration: issue two assets, canonicalize the pair,
//! initialize the pool, grant allowances and seed the initial position.
//!
//! The sequence itself lives in [`orchestrator::Launcher`] and runs against
//! any [`launch_sdk::Ledger`], so the whole flow is testable in memory.

pub mod orchestrator;
pub mod params;
pub mod report;

pub use orchestrator::{LaunchPhase, Launcher};
pub use params::LaunchParams;
pub use report::LaunchReport;
