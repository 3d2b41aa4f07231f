use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::errors::WalletError;
use crate::types::{QuorumChangeRequest, Transaction};
use crate::{governor, guard, ledger};

#[contract]
pub struct QuorumWallet;

#[contractimpl]
impl QuorumWallet {
    pub fn initialize(env: Env, quorum: u32, signers: Vec<Address>) -> Result<(), WalletError> {
        guard::init(&env, &signers, quorum)
    }

    pub fn request_transfer(
        env: Env,
        caller: Address,
        amount: i128,
        recipient: Address,
        token: Address,
    ) -> Result<u64, WalletError> {
        ledger::request_transfer(&env, &caller, amount, &recipient, &token)
    }

    pub fn approve_tx(env: Env, caller: Address, id: u64) -> Result<(), WalletError> {
        ledger::approve_tx(&env, &caller, id)
    }

    pub fn request_quorum_change(env: Env, caller: Address, new_quorum: u32) -> Result<(), WalletError> {
        governor::request_quorum_change(&env, &caller, new_quorum)
    }

    pub fn approve_quorum_change(env: Env, caller: Address) -> Result<(), WalletError> {
        governor::approve_quorum_change(&env, &caller)
    }

    pub fn transaction(env: Env, id: u64) -> Result<Transaction, WalletError> {
        guard::require_initialized(&env)?;
        ledger::transaction(&env, id)
    }

    pub fn has_approved(env: Env, id: u64, signer: Address) -> Result<bool, WalletError> {
        guard::require_initialized(&env)?;
        ledger::has_approved(&env, id, &signer)
    }

    pub fn tx_count(env: Env) -> Result<u64, WalletError> {
        guard::require_initialized(&env)?;
        Ok(ledger::tx_count(&env))
    }

    pub fn nonce(env: Env) -> Result<u64, WalletError> {
        guard::require_initialized(&env)?;
        Ok(ledger::nonce(&env))
    }

    pub fn pending_quorum_change(env: Env) -> Result<Option<QuorumChangeRequest>, WalletError> {
        guard::require_initialized(&env)?;
        Ok(governor::pending_quorum_change(&env))
    }

    pub fn quorum_change_requested(env: Env) -> Result<bool, WalletError> {
        guard::require_initialized(&env)?;
        Ok(governor::quorum_change_requested(&env))
    }

    pub fn quorum(env: Env) -> Result<u32, WalletError> {
        guard::current_quorum(&env)
    }

    pub fn signers(env: Env) -> Result<Vec<Address>, WalletError> {
        guard::signers(&env)
    }

    pub fn signer_count(env: Env) -> Result<u32, WalletError> {
        guard::signer_count(&env)
    }

    pub fn is_signer(env: Env, account: Address) -> Result<bool, WalletError> {
        guard::require_initialized(&env)?;
        Ok(guard::is_valid_signer(&env, &account))
    }
}
