use soroban_sdk::{symbol_short, Address, Env, String};

// Published only after every storage write of the invocation has been made.

pub fn organization_added(env: &Env, id: u64, name: &String) {
    env.events()
        .publish((symbol_short!("org_added"), id), name.clone());
}

pub fn candidate_added(env: &Env, id: u64, name: &String, organization_id: u64) {
    env.events().publish(
        (symbol_short!("cand_add"), organization_id),
        (id, name.clone()),
    );
}

pub fn vote_casted(env: &Env, voter: &Address, candidate_id: u64) {
    env.events()
        .publish((symbol_short!("vote_cast"), voter.clone()), candidate_id);
}
