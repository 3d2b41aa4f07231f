use soroban_sdk::{log, Address, Env, Vec};

use crate::errors::WalletError;
use crate::storage;
use crate::types::DataKey;

pub const MIN_QUORUM: u32 = 2;

pub fn init(env: &Env, signers: &Vec<Address>, quorum: u32) -> Result<(), WalletError> {
    let instance = env.storage().instance();

    if instance.has(&DataKey::Initialized) {
        return Err(WalletError::AlreadyInitialized);
    }

    if signers.is_empty() {
        return Err(WalletError::FewValidSigners);
    }

    if quorum < MIN_QUORUM {
        return Err(WalletError::QuorumTooSmall);
    }

    if quorum > signers.len() {
        return Err(WalletError::QuorumTooLarge);
    }

    // Check for duplicate signers
    for i in 0..signers.len() {
        for j in (i + 1)..signers.len() {
            if signers.get_unchecked(i) == signers.get_unchecked(j) {
                return Err(WalletError::DuplicateSigner);
            }
        }
    }

    for signer in signers.iter() {
        instance.set(&DataKey::Signer(signer), &true);
    }
    instance.set(&DataKey::Signers, signers);
    instance.set(&DataKey::Quorum, &quorum);
    instance.set(&DataKey::Initialized, &true);
    storage::extend_instance(env);

    log!(env, "wallet initialized", signers.len(), quorum);
    Ok(())
}

pub fn require_initialized(env: &Env) -> Result<(), WalletError> {
    if !env.storage().instance().has(&DataKey::Initialized) {
        return Err(WalletError::NotInitialized);
    }
    Ok(())
}

pub fn is_valid_signer(env: &Env, account: &Address) -> bool {
    env.storage()
        .instance()
        .has(&DataKey::Signer(account.clone()))
}

/// Fails with `Unauthorized` for non-members, then demands the account's
/// authorization. Every mutating entry point goes through here, so this is
/// also where the instance entry's TTL is kept alive.
pub fn require_valid_signer(env: &Env, account: &Address) -> Result<(), WalletError> {
    require_initialized(env)?;

    if !is_valid_signer(env, account) {
        log!(env, "rejected non-signer", account.clone());
        return Err(WalletError::Unauthorized);
    }

    account.require_auth();
    storage::extend_instance(env);
    Ok(())
}

pub fn signers(env: &Env) -> Result<Vec<Address>, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Signers)
        .ok_or(WalletError::NotInitialized)
}

pub fn signer_count(env: &Env) -> Result<u32, WalletError> {
    Ok(signers(env)?.len())
}

pub fn current_quorum(env: &Env) -> Result<u32, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Quorum)
        .ok_or(WalletError::NotInitialized)
}

pub fn validate_quorum(env: &Env, quorum: u32) -> Result<(), WalletError> {
    if quorum < MIN_QUORUM || quorum > signer_count(env)? {
        return Err(WalletError::InvalidQuorum);
    }
    Ok(())
}

pub(crate) fn set_quorum(env: &Env, new_quorum: u32) -> Result<(), WalletError> {
    validate_quorum(env, new_quorum)?;

    env.storage().instance().set(&DataKey::Quorum, &new_quorum);
    log!(env, "quorum set", new_quorum);
    Ok(())
}
