use soroban_sdk::{Address, Env, Vec};
use voting_shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT,
    PERSISTENT_LIFETIME_THRESHOLD,
};
use voting_shared::VotingError;

use crate::types::{Candidate, DataKey, Organization};

// Live entries are extended on every read and write; missing keys are never touched.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Owner ────────────────────────────────────────────────────────────────────

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_owner(env: &Env) -> Result<Address, VotingError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(VotingError::NotInitialized)
}

// ── Id Counters ──────────────────────────────────────────────────────────────

pub fn get_organization_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::OrganizationCount)
        .unwrap_or(0)
}

pub fn set_organization_count(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set(&DataKey::OrganizationCount, &count);
}

pub fn get_candidate_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::CandidateCount)
        .unwrap_or(0)
}

pub fn set_candidate_count(env: &Env, count: u64) {
    env.storage()
        .instance()
        .set(&DataKey::CandidateCount, &count);
}

// ── Organizations ────────────────────────────────────────────────────────────

pub fn get_organization(env: &Env, id: u64) -> Result<Organization, VotingError> {
    let key = DataKey::Organization(id);
    let organization = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(VotingError::NotFound)?;
    bump_persistent(env, &key);
    Ok(organization)
}

pub fn set_organization(env: &Env, organization: &Organization) {
    let key = DataKey::Organization(organization.id);
    env.storage().persistent().set(&key, organization);
    bump_persistent(env, &key);
}

// ── Candidates ───────────────────────────────────────────────────────────────

pub fn get_candidate(env: &Env, id: u64) -> Result<Candidate, VotingError> {
    let key = DataKey::Candidate(id);
    let candidate = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(VotingError::NotFound)?;
    bump_persistent(env, &key);
    Ok(candidate)
}

pub fn set_candidate(env: &Env, candidate: &Candidate) {
    let key = DataKey::Candidate(candidate.id);
    env.storage().persistent().set(&key, candidate);
    bump_persistent(env, &key);
}

pub fn get_organization_candidates(env: &Env, organization_id: u64) -> Vec<u64> {
    let key = DataKey::OrganizationCandidates(organization_id);
    match env.storage().persistent().get(&key) {
        Some(ids) => {
            bump_persistent(env, &key);
            ids
        }
        None => Vec::new(env),
    }
}

pub fn set_organization_candidates(env: &Env, organization_id: u64, ids: &Vec<u64>) {
    let key = DataKey::OrganizationCandidates(organization_id);
    env.storage().persistent().set(&key, ids);
    bump_persistent(env, &key);
}

// ── Vote Records ─────────────────────────────────────────────────────────────

pub fn has_voted(env: &Env, organization_id: u64, voter: &Address) -> bool {
    env.storage()
        .persistent()
        .get::<DataKey, bool>(&DataKey::Voted(organization_id, voter.clone()))
        .unwrap_or(false)
}

pub fn record_vote(env: &Env, organization_id: u64, voter: &Address) {
    let key = DataKey::Voted(organization_id, voter.clone());
    env.storage().persistent().set(&key, &true);
    bump_persistent(env, &key);
}
