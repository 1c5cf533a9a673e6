use super::*;

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates the state of a fresh collection with no tokens minted and
    /// minting unpaused.
    pub fn new(state_builder: &mut StateBuilder<S>, params: InitParams) -> Self {
        State {
            name: params.name,
            symbol: params.symbol,
            unit_cost: params.unit_cost,
            max_supply: params.max_supply,
            allow_minting_on: params.allow_minting_on,
            paused: false,
            base_uri: params.base_uri,
            total_minted: 0,
            tokens: state_builder.new_map(),
            whitelist: state_builder.new_set(),
        }
    }

    /// Run the admission checks for a mint attempt. The first failing check
    /// decides the rejection reason, so the order is fixed. No state is
    /// touched here.
    pub fn validate_mint(
        &self,
        sender: &Address,
        quantity: u32,
        payment: Amount,
        slot_time: Timestamp,
    ) -> ContractResult<()> {
        ensure!(!self.paused, CustomContractError::MintingPaused.into());
        ensure!(
            slot_time >= self.allow_minting_on,
            CustomContractError::MintingNotYetAllowed.into()
        );
        ensure!(quantity >= 1, CustomContractError::InvalidQuantity.into());
        ensure!(
            quantity <= MAX_MINT_PER_TX,
            CustomContractError::QuantityExceedsPerTxLimit.into()
        );
        let minted_after = self
            .total_minted
            .checked_add(quantity)
            .ok_or(CustomContractError::SupplyExceeded)?;
        ensure!(
            minted_after <= self.max_supply,
            CustomContractError::SupplyExceeded.into()
        );
        let total_cost = self
            .unit_cost
            .micro_ccd
            .checked_mul(quantity as u64)
            .map(Amount::from_micro_ccd)
            .ok_or(CustomContractError::InsufficientPayment)?;
        ensure!(
            payment >= total_cost,
            CustomContractError::InsufficientPayment.into()
        );
        ensure!(
            self.whitelist.contains(sender),
            CustomContractError::NotWhitelisted.into()
        );
        Ok(())
    }

    /// Assign the next `quantity` sequential token ids to `owner` and
    /// return the last id assigned. Admission must have been checked before
    /// calling this.
    pub fn mint(&mut self, owner: &Address, quantity: u32) -> ContractTokenId {
        for _ in 0..quantity {
            self.total_minted += 1;
            self.tokens.insert(TokenIdU32(self.total_minted), *owner);
        }
        TokenIdU32(self.total_minted)
    }

    /// Check that the token ID currently exists in this contract.
    #[inline(always)]
    pub fn contains_token(&self, token_id: &ContractTokenId) -> bool {
        self.tokens.get(token_id).is_some()
    }

    /// Get the owner of a token.
    /// Results in an error if the token ID was never minted.
    pub fn owner_of(&self, token_id: &ContractTokenId) -> ContractResult<Address> {
        self.tokens
            .get(token_id)
            .map(|owner| *owner)
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Token ids owned by `owner` in ascending id order. A linear scan over
    /// the minted range keeps the ids ordered without a secondary index.
    pub fn tokens_of(&self, owner: &Address) -> Vec<ContractTokenId> {
        let mut owned = Vec::new();
        for id in 1..=self.total_minted {
            let token_id = TokenIdU32(id);
            if self
                .tokens
                .get(&token_id)
                .map_or(false, |token_owner| *token_owner == *owner)
            {
                owned.push(token_id);
            }
        }
        owned
    }

    /// Number of tokens owned by `owner`.
    pub fn balance_of(&self, owner: &Address) -> u32 {
        self.tokens_of(owner).len() as u32
    }

    /// Add an address to the whitelist. Adding an address that is already
    /// present is a no-op.
    pub fn add_to_whitelist(&mut self, address: Address) {
        self.whitelist.insert(address);
    }

    /// Check whether an address is allowed to mint.
    pub fn is_whitelisted(&self, address: &Address) -> bool {
        self.whitelist.contains(address)
    }
}
