use soroban_sdk::{log, token, Address, Env, Map};

use crate::errors::WalletError;
use crate::guard;
use crate::storage::{TX_BUMP_AMOUNT, TX_LIFETIME_THRESHOLD};
use crate::types::{DataKey, Transaction};

pub fn tx_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TxCount)
        .unwrap_or(0u64)
}

/// Number of transfers that have executed.
pub fn nonce(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::Nonce)
        .unwrap_or(0u64)
}

pub fn request_transfer(
    env: &Env,
    caller: &Address,
    amount: i128,
    recipient: &Address,
    token_address: &Address,
) -> Result<u64, WalletError> {
    guard::require_valid_signer(env, caller)?;

    if amount <= 0 {
        return Err(WalletError::ZeroAmount);
    }

    // Check the wallet can cover the transfer right now
    let balance = token::Client::new(env, token_address).balance(&env.current_contract_address());
    if balance < amount {
        return Err(WalletError::InsufficientFunds);
    }

    let id = tx_count(env) + 1;
    let now = env.ledger().timestamp();

    let mut approvals = Map::new(env);
    approvals.set(caller.clone(), now);

    let tx = Transaction {
        id,
        proposer: caller.clone(),
        token: token_address.clone(),
        recipient: recipient.clone(),
        amount,
        approvals,
        executed: false,
        created_at: now,
    };

    env.storage().instance().set(&DataKey::TxCount, &id);
    save(env, &tx);

    log!(env, "transfer requested", id, amount);
    Ok(id)
}

pub fn transaction(env: &Env, id: u64) -> Result<Transaction, WalletError> {
    if id == 0 || id > tx_count(env) {
        return Err(WalletError::InvalidTxId);
    }

    let key = DataKey::Transaction(id);
    let storage = env.storage().persistent();
    let tx: Transaction = storage.get(&key).ok_or(WalletError::InvalidTxId)?;
    storage.extend_ttl(&key, TX_LIFETIME_THRESHOLD, TX_BUMP_AMOUNT);

    Ok(tx)
}

/// Records `caller`'s approval and executes the transfer once the approvals
/// reach the quorum.
///
/// If the token transfer fails this returns `TransferFailed`. The host then
/// discards every write made by the invocation, including the approval and
/// the `executed` flag, so the same signer can approve again later.
pub fn approve_tx(env: &Env, caller: &Address, id: u64) -> Result<(), WalletError> {
    guard::require_valid_signer(env, caller)?;

    let mut tx = transaction(env, id)?;

    if tx.executed {
        return Err(WalletError::AlreadyExecuted);
    }

    // Check if already approved
    if tx.approvals.contains_key(caller.clone()) {
        return Err(WalletError::AlreadyApproved);
    }

    tx.approvals.set(caller.clone(), env.ledger().timestamp());

    let quorum = guard::current_quorum(env)?;
    if tx.approval_count() < quorum {
        save(env, &tx);
        log!(env, "transfer approved", id, tx.approval_count(), quorum);
        return Ok(());
    }

    // Mark executed before calling out to the token contract
    tx.executed = true;
    save(env, &tx);
    execute(env, &tx)?;

    env.storage().instance().set(&DataKey::Nonce, &(nonce(env) + 1));

    log!(env, "transfer executed", id, tx.amount);
    Ok(())
}

pub fn has_approved(env: &Env, id: u64, signer: &Address) -> Result<bool, WalletError> {
    Ok(transaction(env, id)?.approvals.contains_key(signer.clone()))
}

fn save(env: &Env, tx: &Transaction) {
    let key = DataKey::Transaction(tx.id);
    let storage = env.storage().persistent();
    storage.set(&key, tx);
    storage.extend_ttl(&key, TX_LIFETIME_THRESHOLD, TX_BUMP_AMOUNT);
}

fn execute(env: &Env, tx: &Transaction) -> Result<(), WalletError> {
    let token_client = token::Client::new(env, &tx.token);

    match token_client.try_transfer(&env.current_contract_address(), &tx.recipient, &tx.amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "transfer failed", tx.id);
            Err(WalletError::TransferFailed)
        }
    }
}
