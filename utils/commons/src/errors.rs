use super::*;

/// The custom errors the contract can produce.
#[derive(Serialize, Debug, PartialEq, Eq, Reject, SchemaType)]
pub enum CustomContractError {
    /// Failed parsing the parameter (Error code: -1).
    #[from(ParseError)]
    ParseParams,
    /// Failed logging: Log is full (Error code: -2).
    LogFull,
    /// Failed logging: Log is malformed (Error code: -3).
    LogMalformed,
    /// Minting is paused (Error code: -4).
    MintingPaused,
    /// Minting window has not opened yet (Error code: -5).
    MintingNotYetAllowed,
    /// Mint quantity must be at least one (Error code: -6).
    InvalidQuantity,
    /// Mint quantity is above the per transaction limit (Error code: -7).
    QuantityExceedsPerTxLimit,
    /// Remaining supply does not cover the requested quantity (Error code: -8).
    SupplyExceeded,
    /// Attached payment does not cover the total cost (Error code: -9).
    InsufficientPayment,
    /// Sender is not on the whitelist (Error code: -10).
    NotWhitelisted,
    /// Maximum supply must be at least one (Error code: -11).
    InvalidMaxSupply,
    /// Base URI must end with a slash (Error code: -12).
    InvalidBaseUri,
    /// Failed to invoke a transfer (Error code: -13).
    InvokeTransferError,
}

/// Mapping the logging errors to CustomContractError.
impl From<LogError> for CustomContractError {
    fn from(le: LogError) -> Self {
        match le {
            LogError::Full => Self::LogFull,
            LogError::Malformed => Self::LogMalformed,
        }
    }
}

/// Mapping CustomContractError to ContractError
impl From<CustomContractError> for ContractError {
    fn from(c: CustomContractError) -> Self {
        Cis2Error::Custom(c)
    }
}

/// Mapping errors related to transfer invocations to CustomContractError.
impl From<TransferError> for CustomContractError {
    fn from(_te: TransferError) -> Self {
        Self::InvokeTransferError
    }
}
