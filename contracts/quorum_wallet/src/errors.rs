use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    FewValidSigners = 3,
    QuorumTooSmall = 4,
    QuorumTooLarge = 5,
    DuplicateSigner = 6,
    Unauthorized = 7,
    ZeroAmount = 8,
    InvalidTxId = 9,
    InvalidQuorum = 10,
    NoActiveRequest = 11,
    AlreadyApproved = 12,
    AlreadyExecuted = 13,
    ChangeAlreadyRequested = 14,
    InsufficientFunds = 15,
    TransferFailed = 16,
}
