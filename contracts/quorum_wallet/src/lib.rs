#![no_std]

mod errors;
mod governor;
mod guard;
mod ledger;
mod storage;
mod types;
mod wallet;

pub use crate::errors::WalletError;
pub use crate::types::{QuorumChangeRequest, Transaction};
pub use crate::wallet::{QuorumWallet, QuorumWalletClient};
