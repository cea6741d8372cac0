//! `ledger-balance-core` — ledger building blocks.
//!
//! This crate contains **pure** primitives shared by the report pipeline (no
//! IO, no rendering).

pub mod bound;
pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use bound::{Bound, InclusiveRange};
pub use entity::Entity;
pub use error::{LedgerError, LedgerResult};
pub use id::AccountNumber;
pub use money::Amount;
pub use value_object::ValueObject;
