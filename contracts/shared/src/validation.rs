//! Validation helpers for ledger inputs.
//!
//! Every helper returns `Ok(())` or a `VotingError` so contract code can
//! propagate with `?` before touching storage.

use crate::constants::MAX_NAME_LENGTH;
use crate::errors::VotingError;
use soroban_sdk::String;

// ===== Name Validation =====

/// Validate an organization or candidate name.
///
/// # Returns
/// `Err(VotingError::InvalidInput)` if the name is empty or longer than
/// [`MAX_NAME_LENGTH`] bytes
pub fn validate_name(name: &String) -> Result<(), VotingError> {
    let len = name.len();
    if len == 0 || len > MAX_NAME_LENGTH {
        return Err(VotingError::InvalidInput);
    }
    Ok(())
}

// ===== Id Validation =====

/// Reject the zero id, which is never allocated.
pub fn validate_id(id: u64) -> Result<(), VotingError> {
    if id == 0 {
        return Err(VotingError::InvalidInput);
    }
    Ok(())
}

// ===== Counters =====

/// Add one to a counter or vote count.
///
/// # Returns
/// `Err(VotingError::Overflow)` once the counter is exhausted
pub fn checked_increment(value: u64) -> Result<u64, VotingError> {
    value.checked_add(1).ok_or(VotingError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_validate_name_accepts_regular_name() {
        let env = Env::default();
        let name = String::from_str(&env, "Student Council");
        assert_eq!(validate_name(&name), Ok(()));
    }

    #[test]
    fn test_validate_name_rejects_empty() {
        let env = Env::default();
        let name = String::from_str(&env, "");
        assert_eq!(validate_name(&name), Err(VotingError::InvalidInput));
    }

    #[test]
    fn test_validate_name_length_boundary() {
        let env = Env::default();
        let at_limit = String::from_bytes(&env, &[b'a'; MAX_NAME_LENGTH as usize]);
        let over_limit = String::from_bytes(&env, &[b'a'; MAX_NAME_LENGTH as usize + 1]);

        assert_eq!(validate_name(&at_limit), Ok(()));
        assert_eq!(validate_name(&over_limit), Err(VotingError::InvalidInput));
    }

    #[test]
    fn test_validate_id() {
        assert_eq!(validate_id(0), Err(VotingError::InvalidInput));
        assert_eq!(validate_id(1), Ok(()));
        assert_eq!(validate_id(u64::MAX), Ok(()));
    }

    #[test]
    fn test_checked_increment() {
        assert_eq!(checked_increment(0), Ok(1));
        assert_eq!(checked_increment(41), Ok(42));
        assert_eq!(checked_increment(u64::MAX), Err(VotingError::Overflow));
    }
}
