use super::*;

pub type ContractResult<A> = Result<A, ContractError>;

/// Contract token ID type.
/// Tokens are numbered sequentially starting at one, so ids always fit in a
/// `u32`.
pub type ContractTokenId = TokenIdU32;

/// Contract token amount type. Every token is unique, so the amount of a
/// token is only ever one.
pub type ContractTokenAmount = TokenAmountU64;

/// Wrapping the custom errors in a type with CIS2 errors.
pub type ContractError = Cis2Error<CustomContractError>;
