use soroban_sdk::{contracttype, Address, Map};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Signers,
    Signer(Address),
    Quorum,
    Nonce,
    TxCount,
    Transaction(u64),
    QuorumChangeRequested,
    PendingQuorumChange,
}

/// A fund-transfer request. Kept after execution as an audit record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub proposer: Address,
    pub token: Address,
    pub recipient: Address,
    pub amount: i128,
    /// Approving signers, valued with the ledger timestamp of the approval.
    pub approvals: Map<Address, u64>,
    pub executed: bool,
    pub created_at: u64,
}

impl Transaction {
    pub fn approval_count(&self) -> u32 {
        self.approvals.len()
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuorumChangeRequest {
    pub new_quorum: u32,
    pub proposer: Address,
    pub approvals: Map<Address, u64>,
    pub created_at: u64,
}

impl QuorumChangeRequest {
    pub fn approval_count(&self) -> u32 {
        self.approvals.len()
    }
}
