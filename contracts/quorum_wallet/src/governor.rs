use soroban_sdk::{log, Address, Env, Map};

use crate::errors::WalletError;
use crate::guard;
use crate::types::{DataKey, QuorumChangeRequest};

pub fn quorum_change_requested(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::QuorumChangeRequested)
        .unwrap_or(false)
}

// The flag guards the slot: no flag, no pending request.
pub fn pending_quorum_change(env: &Env) -> Option<QuorumChangeRequest> {
    if !quorum_change_requested(env) {
        return None;
    }
    env.storage().instance().get(&DataKey::PendingQuorumChange)
}

pub fn request_quorum_change(
    env: &Env,
    caller: &Address,
    new_quorum: u32,
) -> Result<(), WalletError> {
    guard::require_valid_signer(env, caller)?;

    if quorum_change_requested(env) {
        return Err(WalletError::ChangeAlreadyRequested);
    }

    guard::validate_quorum(env, new_quorum)?;

    let now = env.ledger().timestamp();
    let mut approvals = Map::new(env);
    approvals.set(caller.clone(), now);

    let request = QuorumChangeRequest {
        new_quorum,
        proposer: caller.clone(),
        approvals,
        created_at: now,
    };

    let storage = env.storage().instance();
    storage.set(&DataKey::PendingQuorumChange, &request);
    storage.set(&DataKey::QuorumChangeRequested, &true);

    log!(env, "quorum change requested", new_quorum);
    Ok(())
}

/// Approves the pending change. Approvals are counted against the quorum in
/// effect before the change.
pub fn approve_quorum_change(env: &Env, caller: &Address) -> Result<(), WalletError> {
    guard::require_valid_signer(env, caller)?;

    let mut request = pending_quorum_change(env).ok_or(WalletError::NoActiveRequest)?;

    // Check if already approved
    if request.approvals.contains_key(caller.clone()) {
        return Err(WalletError::AlreadyApproved);
    }

    request
        .approvals
        .set(caller.clone(), env.ledger().timestamp());

    let quorum = guard::current_quorum(env)?;
    let storage = env.storage().instance();

    if request.approval_count() < quorum {
        storage.set(&DataKey::PendingQuorumChange, &request);
        log!(env, "quorum change approved", request.approval_count(), quorum);
        return Ok(());
    }

    // Quorum reached: apply the change and free the slot
    guard::set_quorum(env, request.new_quorum)?;
    storage.remove(&DataKey::PendingQuorumChange);
    storage.set(&DataKey::QuorumChangeRequested, &false);

    log!(env, "quorum changed", quorum, request.new_quorum);
    Ok(())
}
