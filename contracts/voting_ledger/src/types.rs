use soroban_sdk::{contracttype, Address, String};

/// A named voting round that candidates belong to
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Organization {
    /// Sequential id, starting at 1
    pub id: u64,
    pub name: String,
    /// Always `true`; no operation deactivates an organization
    pub is_active: bool,
    /// Number of candidates registered under this organization
    pub candidate_count: u64,
}

/// An option inside one organization, accumulating votes
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    /// Sequential id, unique across all organizations
    pub id: u64,
    pub name: String,
    pub vote_count: u64,
    pub organization_id: u64,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // Instance storage
    Owner,
    OrganizationCount,
    CandidateCount,
    // Persistent storage
    Organization(u64),
    Candidate(u64),
    // Index: organization id -> candidate ids in insertion order
    OrganizationCandidates(u64),
    // Vote record: (organization id, voter)
    Voted(u64, Address),
}
