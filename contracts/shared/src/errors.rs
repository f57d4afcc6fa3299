//! Error codes for the voting ledger.
//!
//! Codes are part of the contract interface and must stay stable:
//! - 1-4: precondition failures every caller has to handle
//! - 5-9: ledger lifecycle and arithmetic

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VotingError {
    /// Caller is not the ledger owner
    Unauthorized = 1,

    /// Empty or oversized name, or a malformed (zero) id
    InvalidInput = 2,

    /// Referenced organization or candidate does not exist
    NotFound = 3,

    /// Caller has already voted in the candidate's organization
    AlreadyVoted = 4,

    /// Ledger has no owner yet
    NotInitialized = 5,

    /// `initialize` was already called
    AlreadyInitialized = 6,

    /// An id counter or vote count would overflow
    Overflow = 7,
}
