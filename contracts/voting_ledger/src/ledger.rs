use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};
use voting_shared::constants::FIRST_ID;
use voting_shared::{checked_increment, validate_id, validate_name, VotingError};

use crate::events;
use crate::storage;
use crate::types::{Candidate, Organization};

#[contract]
pub struct VotingLedgerContract;

/// Authenticates `caller` through the host and checks it is the owner.
fn require_owner(env: &Env, caller: &Address) -> Result<(), VotingError> {
    caller.require_auth();
    let owner = storage::get_owner(env)?;
    if *caller != owner {
        return Err(VotingError::Unauthorized);
    }
    Ok(())
}

#[contractimpl]
impl VotingLedgerContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Fix the owner of a freshly deployed ledger. Can only be called once.
    pub fn initialize(env: Env, owner: Address) -> Result<(), VotingError> {
        if storage::has_owner(&env) {
            return Err(VotingError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_owner(&env, &owner);
        storage::set_organization_count(&env, 0);
        storage::set_candidate_count(&env, 0);
        storage::bump_instance(&env);

        log!(&env, "ledger initialized", owner);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, VotingError> {
        storage::get_owner(&env)
    }

    /// Highest organization id allocated so far.
    pub fn organization_count(env: Env) -> u64 {
        storage::get_organization_count(&env)
    }

    /// Highest candidate id allocated so far.
    pub fn candidate_count(env: Env) -> u64 {
        storage::get_candidate_count(&env)
    }

    // ── Owner Operations ─────────────────────────────────────────────────────

    /// Create an active organization with no candidates and return its id.
    pub fn create_organization(
        env: Env,
        caller: Address,
        name: String,
    ) -> Result<u64, VotingError> {
        require_owner(&env, &caller)?;
        validate_name(&name)?;

        let id = checked_increment(storage::get_organization_count(&env))?;
        let organization = Organization {
            id,
            name: name.clone(),
            is_active: true,
            candidate_count: 0,
        };

        storage::set_organization(&env, &organization);
        storage::set_organization_count(&env, id);
        storage::bump_instance(&env);

        events::organization_added(&env, id, &name);
        log!(&env, "organization created", id);

        Ok(id)
    }

    /// Register a candidate under an existing organization and return its id.
    ///
    /// The organization's `candidate_count` and candidate index are updated
    /// in the same invocation as the candidate record.
    pub fn create_candidate(
        env: Env,
        caller: Address,
        name: String,
        organization_id: u64,
    ) -> Result<u64, VotingError> {
        require_owner(&env, &caller)?;
        validate_name(&name)?;
        validate_id(organization_id)?;

        let mut organization = storage::get_organization(&env, organization_id)?;
        let id = checked_increment(storage::get_candidate_count(&env))?;
        let candidate_count = checked_increment(organization.candidate_count)?;

        let candidate = Candidate {
            id,
            name: name.clone(),
            vote_count: 0,
            organization_id,
        };

        let mut index = storage::get_organization_candidates(&env, organization_id);
        index.push_back(id);
        organization.candidate_count = candidate_count;

        storage::set_candidate(&env, &candidate);
        storage::set_organization_candidates(&env, organization_id, &index);
        storage::set_organization(&env, &organization);
        storage::set_candidate_count(&env, id);
        storage::bump_instance(&env);

        events::candidate_added(&env, id, &name, organization_id);
        log!(&env, "candidate created", id, organization_id);

        Ok(id)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    /// Cast `caller`'s single vote in the organization `candidate_id` belongs to.
    pub fn cast_vote(env: Env, caller: Address, candidate_id: u64) -> Result<(), VotingError> {
        caller.require_auth();
        validate_id(candidate_id)?;

        let mut candidate = storage::get_candidate(&env, candidate_id)?;
        let organization_id = candidate.organization_id;

        if storage::has_voted(&env, organization_id, &caller) {
            log!(&env, "duplicate vote rejected", caller, organization_id);
            return Err(VotingError::AlreadyVoted);
        }

        candidate.vote_count = checked_increment(candidate.vote_count)?;

        storage::set_candidate(&env, &candidate);
        storage::record_vote(&env, organization_id, &caller);
        storage::bump_instance(&env);

        events::vote_casted(&env, &caller, candidate_id);
        log!(&env, "vote cast", caller, candidate_id);

        Ok(())
    }

    pub fn has_voted(env: Env, voter: Address, organization_id: u64) -> bool {
        storage::has_voted(&env, organization_id, &voter)
    }

    // ── Query Functions ──────────────────────────────────────────────────────

    pub fn get_organization(env: Env, id: u64) -> Result<Organization, VotingError> {
        validate_id(id)?;
        storage::get_organization(&env, id)
    }

    pub fn get_candidate(env: Env, id: u64) -> Result<Candidate, VotingError> {
        validate_id(id)?;
        storage::get_candidate(&env, id)
    }

    /// All organizations in creation order.
    pub fn list_organizations(env: Env) -> Result<Vec<Organization>, VotingError> {
        let mut organizations = Vec::new(&env);
        for id in FIRST_ID..=storage::get_organization_count(&env) {
            organizations.push_back(storage::get_organization(&env, id)?);
        }
        Ok(organizations)
    }

    /// Candidates of one organization in creation order.
    pub fn list_candidates(
        env: Env,
        organization_id: u64,
    ) -> Result<Vec<Candidate>, VotingError> {
        validate_id(organization_id)?;
        storage::get_organization(&env, organization_id)?;

        let mut candidates = Vec::new(&env);
        for id in storage::get_organization_candidates(&env, organization_id).iter() {
            candidates.push_back(storage::get_candidate(&env, id)?);
        }
        Ok(candidates)
    }

    /// Sum of vote counts across an organization's candidates.
    pub fn vote_total(env: Env, organization_id: u64) -> Result<u64, VotingError> {
        validate_id(organization_id)?;
        storage::get_organization(&env, organization_id)?;

        let mut total: u64 = 0;
        for id in storage::get_organization_candidates(&env, organization_id).iter() {
            let candidate = storage::get_candidate(&env, id)?;
            total = total
                .checked_add(candidate.vote_count)
                .ok_or(VotingError::Overflow)?;
        }
        Ok(total)
    }
}
