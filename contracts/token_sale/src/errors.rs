use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidConfig = 3,
    SaleNotStarted = 4,
    SaleEnded = 5,
    SaleNotEnded = 6,
    ZeroAmount = 7,
    InvalidProof = 8,
    BelowMinimum = 9,
    AboveMaximum = 10,
    HardCapReached = 11,
    IdentityCapReached = 12,
    AlreadyEnded = 13,
    VestingAlreadyInitialized = 14,
    ScheduleNotFound = 15,
    AllowlistNotConfigured = 16,
    ArithmeticOverflow = 17,
    NothingToReclaim = 18,
    AlreadyReclaimed = 19,
}

/// Coarse classification used by callers deciding whether a retry can help.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config,
    Temporal,
    Authorization,
    Bounds,
    State,
    Arithmetic,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidConfig => ErrorKind::Config,
            Error::SaleNotStarted | Error::SaleEnded | Error::SaleNotEnded => ErrorKind::Temporal,
            Error::InvalidProof | Error::AllowlistNotConfigured => ErrorKind::Authorization,
            Error::ZeroAmount
            | Error::BelowMinimum
            | Error::AboveMaximum
            | Error::HardCapReached
            | Error::IdentityCapReached => ErrorKind::Bounds,
            Error::NotInitialized
            | Error::AlreadyInitialized
            | Error::AlreadyEnded
            | Error::VestingAlreadyInitialized
            | Error::ScheduleNotFound
            | Error::NothingToReclaim
            | Error::AlreadyReclaimed => ErrorKind::State,
            Error::ArithmeticOverflow => ErrorKind::Arithmetic,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Error::NotInitialized => "Sale not initialized",
            Error::AlreadyInitialized => "Sale already initialized",
            Error::InvalidConfig => "Invalid sale parameters",
            Error::SaleNotStarted => "Sale has not started yet",
            Error::SaleEnded => "Sale has ended",
            Error::SaleNotEnded => "Sale has not ended yet",
            Error::ZeroAmount => "Amount must be greater than 0",
            Error::InvalidProof => "Invalid proof",
            Error::BelowMinimum => "Amount is below the minimum contribution",
            Error::AboveMaximum => "Amount is above the maximum contribution",
            Error::HardCapReached => "Hard cap reached",
            Error::IdentityCapReached => "Contribution limit reached for this identity",
            Error::AlreadyEnded => "Sale has already ended",
            Error::VestingAlreadyInitialized => "Vesting is already initialized",
            Error::ScheduleNotFound => "Vesting schedule not found",
            Error::AllowlistNotConfigured => "Sale has no allowlist",
            Error::ArithmeticOverflow => "Arithmetic overflow",
            Error::NothingToReclaim => "No unsold tokens to reclaim",
            Error::AlreadyReclaimed => "Unsold tokens already reclaimed",
        }
    }
}
