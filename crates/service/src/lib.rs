//! Service layer providing business-oriented operations on top of models.
//! - Separates catalog queries, counters and mutations from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod pagination;
pub mod catalog;
pub mod services;
pub mod statistics;
pub mod appointments;
pub mod favorites;
pub mod seed;
#[cfg(test)]
pub mod test_support;
