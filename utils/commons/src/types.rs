use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Token IDs are assigned from a sequential counter, so they always fit a
/// `u64`.
pub type ContractTokenId = TokenIdU64;

/// Every token stands for exactly one flow, so an amount is never above 1.
pub type ContractTokenAmount = TokenAmountU8;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;
