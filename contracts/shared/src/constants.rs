//! Constants shared by the voting ledger contracts.

// ===== Input Limits =====

/// Maximum length of an organization or candidate name, in bytes
pub const MAX_NAME_LENGTH: u32 = 128;

/// First id handed out for organizations and candidates; 0 is never valid
pub const FIRST_ID: u64 = 1;

// ===== Storage TTL (in ledgers) =====

/// Roughly one day of ledgers at ~5s per ledger
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Entries are extended to this many ledgers on write
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Extension only happens once the remaining TTL drops below this
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Instance storage (owner and id counters) follows the same policy
pub const INSTANCE_BUMP_AMOUNT: u32 = PERSISTENT_BUMP_AMOUNT;

pub const INSTANCE_LIFETIME_THRESHOLD: u32 = PERSISTENT_LIFETIME_THRESHOLD;
