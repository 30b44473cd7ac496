//! Fixed-point price-curve math for the launch factory.
//!
//! Reproduces the amount/liquidity conversion curve the pool program uses
//! internally, in Q64.64 fixed point: tick to square-root price, the joint
//! liquidity scalar for a pair of deposits, and the amounts a given
//! liquidity consumes.

pub mod full_math;
pub mod liquidity;
pub mod tick;

pub use full_math::*;
pub use liquidity::*;
pub use tick::*;
