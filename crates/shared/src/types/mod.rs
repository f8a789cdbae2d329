//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::*;
pub use money::{AmountError, CURRENCY_SCALE, TOLERANCE, checked_sum};
