use super::*;

/// The contract state.
#[derive(Serial, DeserialWithState)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
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
    /// While set, all minting is rejected.
    pub paused: bool,
    /// Prefix of the token metadata URLs.
    pub base_uri: String,
    /// Number of tokens minted so far. Token ids run from one up to this
    /// value without gaps.
    pub total_minted: u32,
    /// The owner of every minted token.
    pub tokens: StateMap<ContractTokenId, Address, S>,
    /// The addresses allowed to mint.
    pub whitelist: StateSet<Address, S>,
}
