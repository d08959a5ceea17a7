use soroban_sdk::contracterror;

/// Errors shared by the pool and its claim token.
///
/// Both contracts report through the same enum so a client sees one code
/// space no matter which side of the pool/token boundary rejected the call.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    /// Zero (or negative) amount where a positive one is required
    InvalidAmount = 1,
    /// The principal asset refused to move funds into the pool
    AssetTransferFailed = 2,
    /// Holder has fewer claim tokens than requested
    InsufficientClaimBalance = 3,
    /// Privileged claim-token call from someone other than the owner
    Unauthorized = 4,
    /// Spender allowance is below the requested amount
    InsufficientAllowance = 5,
    /// Checked arithmetic overflowed
    ArithmeticOverflow = 6,
    /// Non-zero approval that expires before the current ledger
    InvalidExpiration = 7,
}
