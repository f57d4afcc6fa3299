#![no_std]
//! # Shared Voting Ledger Library
//!
//! Reusable error codes, constants, and validation helpers for the voting
//! ledger contracts.
//!
//! ## Modules
//!
//! - `errors` - The `VotingError` codes returned by every ledger operation
//! - `constants` - Name limits and storage TTL policy
//! - `validation` - Input validation and checked counter helpers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use voting_shared::errors::VotingError;
//! use voting_shared::validation::{validate_name, validate_id};
//! use voting_shared::constants::MAX_NAME_LENGTH;
//! ```

pub mod constants;
pub mod errors;
pub mod validation;

pub use errors::VotingError;
pub use validation::{checked_increment, validate_id, validate_name};
