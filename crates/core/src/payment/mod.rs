//! Payments: validated contribution events with their computed owed shares.
//!
//! A payment is built and validated in one step. Validation runs in a fixed
//! order before the split strategy is evaluated:
//! 1. The total (sum of contributions) is strictly positive
//! 2. Every contribution is non-negative
//! 3. Every share specification value is non-negative
//! 4. The strategy name resolves
//!
//! Only then are owed shares computed; strategy failures surface as
//! `InvalidSplit`.

pub mod request;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use request::PaymentRequest;
pub use types::Payment;
pub use validation::validate_amounts;
