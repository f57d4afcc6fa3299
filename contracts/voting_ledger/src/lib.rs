#![no_std]

mod events;
mod ledger;
mod storage;
mod types;

pub use ledger::{VotingLedgerContract, VotingLedgerContractClient};
pub use types::{Candidate, DataKey, Organization};
pub use voting_shared::VotingError;
