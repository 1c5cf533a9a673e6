use super::*;

/// Collection parameters fixed at instantiation.
#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct InitParams {
    /// Collection name.
    pub name: String,
    /// Collection symbol.
    pub symbol: String,
    /// Price of a single token.
    pub unit_cost: Amount,
    /// Hard cap on the number of tokens this instance will ever mint.
    pub max_supply: u32,
    /// Time at which minting opens.
    pub allow_minting_on: Timestamp,
    /// Prefix of the token metadata URLs. Must end with a slash.
    pub base_uri: String,
}

/// Parameter type for the contract function `mint`.
#[derive(Debug, Clone, SchemaType, Serialize)]
pub struct MintParams {
    /// Number of tokens to mint for the sender.
    pub quantity: u32,
}

/// Snapshot of the collection configuration and counters, returned by the
/// contract function `view`.
#[derive(Debug, PartialEq, Eq, SchemaType, Serialize)]
pub struct ViewState {
    pub name: String,
    pub symbol: String,
    pub unit_cost: Amount,
    pub max_supply: u32,
    pub total_minted: u32,
    pub allow_minting_on: Timestamp,
    pub paused: bool,
    pub base_uri: String,
    /// The account that created the instance.
    pub owner: AccountAddress,
}
