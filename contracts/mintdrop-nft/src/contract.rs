use super::*;

/// Initialize the contract instance with the collection configuration.
/// The account creating the instance becomes the collection owner. No
/// tokens are minted initially and minting starts unpaused.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The maximum supply is zero.
/// - The base URI does not end with a slash.
#[init(contract = "Mintdrop", parameter = "InitParams")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params =
        InitParams::deserial(&mut ctx.parameter_cursor()).map_err(CustomContractError::from)?;

    ensure!(
        params.max_supply >= 1,
        CustomContractError::InvalidMaxSupply.into()
    );
    ensure!(
        params.base_uri.ends_with('/'),
        CustomContractError::InvalidBaseUri.into()
    );

    Ok(State::new(state_builder, params))
}

/// Mint tokens for the sender against the attached payment.
/// Token ids are assigned sequentially starting at one. Logs a `Mint` and a
/// `TokenMetadata` event for every token and one `Minted` event carrying the
/// last assigned id. Any payment above the total cost is kept by the
/// contract.
///
/// It rejects if:
/// - Minting is paused.
/// - The minting window has not opened yet.
/// - The quantity is zero or above the per transaction limit.
/// - The remaining supply does not cover the requested quantity.
/// - The attached payment does not cover the total cost.
/// - The sender is not on the whitelist.
/// - Fails to parse parameter.
/// - Fails to log event.
#[receive(
    contract = "Mintdrop",
    name = "mint",
    parameter = "MintParams",
    mutable,
    enable_logger,
    payable
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    amount: Amount,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params: MintParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    let slot_time = ctx.metadata().slot_time();

    let state = host.state_mut();
    state.validate_mint(&sender, params.quantity, amount, slot_time)?;

    // All admission checks passed, assign the ids.
    let last_token_id = state.mint(&sender, params.quantity);
    let first_id = last_token_id.0 - params.quantity + 1;

    let base_uri = host.state().base_uri.clone();
    for id in first_id..=last_token_id.0 {
        let token_id = TokenIdU32(id);

        // Event for the minted token.
        logger.log(&Cis2Event::Mint(MintEvent {
            token_id,
            amount: ContractTokenAmount::from(1),
            owner: sender,
        }))?;

        // Metadata URL for the token.
        logger.log(&token_metadata_event(&base_uri, token_id))?;
    }

    // Storefront level event carrying the last assigned id.
    logger.log(&CustomEvent::Minted(MintedEvent {
        last_token_id,
        minter: sender,
    }))?;

    Ok(())
}

/// Add an address to the whitelist. Adding an address that is already
/// present is a no-op.
///
/// It rejects if:
/// - The sender is not the contract instance owner.
/// - Fails to parse parameter.
#[receive(
    contract = "Mintdrop",
    name = "addToWhitelist",
    parameter = "Address",
    mutable
)]
fn add_to_whitelist<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    ensure!(
        ctx.sender().matches_account(&ctx.owner()),
        ContractError::Unauthorized
    );

    let address: Address = ctx.parameter_cursor().get()?;
    host.state_mut().add_to_whitelist(address);

    Ok(())
}

/// Pause or resume minting.
///
/// It rejects if:
/// - The sender is not the contract instance owner.
/// - Fails to parse parameter.
#[receive(contract = "Mintdrop", name = "setPaused", parameter = "bool", mutable)]
fn set_paused<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    ensure!(
        ctx.sender().matches_account(&ctx.owner()),
        ContractError::Unauthorized
    );

    let paused: bool = ctx.parameter_cursor().get()?;
    host.state_mut().paused = paused;

    Ok(())
}

/// Transfer the full contract balance to the instance owner.
/// Logs a `Withdraw` event carrying the amount and the owner.
///
/// It rejects if:
/// - The sender is not the contract instance owner.
/// - Fails to log event.
/// - The transfer to the owner fails.
#[receive(contract = "Mintdrop", name = "withdraw", mutable, enable_logger)]
fn withdraw<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let owner = ctx.owner();
    ensure!(
        ctx.sender().matches_account(&owner),
        ContractError::Unauthorized
    );

    let balance = host.self_balance();

    // Event for the payout.
    logger.log(&CustomEvent::Withdraw(WithdrawEvent {
        amount: balance,
        owner,
    }))?;

    host.invoke_transfer(&owner, balance)?;

    Ok(())
}

/// View the collection configuration and counters in one call.
#[receive(contract = "Mintdrop", name = "view", return_value = "ViewState")]
fn view<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<ViewState> {
    let state = host.state();

    Ok(ViewState {
        name: state.name.clone(),
        symbol: state.symbol.clone(),
        unit_cost: state.unit_cost,
        max_supply: state.max_supply,
        total_minted: state.total_minted,
        allow_minting_on: state.allow_minting_on,
        paused: state.paused,
        base_uri: state.base_uri.clone(),
        owner: ctx.owner(),
    })
}

/// Get the owner of a token.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token ID was never minted.
#[receive(
    contract = "Mintdrop",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "Address"
)]
fn owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().owner_of(&token_id)
}

/// Get the metadata URL of a token, the base URI with the decimal token id
/// and `.json` appended.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token ID was never minted.
#[receive(
    contract = "Mintdrop",
    name = "tokenURI",
    parameter = "ContractTokenId",
    return_value = "String"
)]
fn token_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    let state = host.state();

    ensure!(state.contains_token(&token_id), ContractError::InvalidTokenId);

    Ok(build_token_metadata_url(&state.base_uri, &token_id))
}

/// View the token ids owned by a particular address, in ascending id order.
#[receive(
    contract = "Mintdrop",
    name = "walletOfOwner",
    parameter = "Address",
    return_value = "Vec<ContractTokenId>"
)]
fn wallet_of_owner<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Vec<ContractTokenId>> {
    let owner: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().tokens_of(&owner))
}

/// Number of tokens owned by an address.
#[receive(
    contract = "Mintdrop",
    name = "balanceOf",
    parameter = "Address",
    return_value = "u32"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<u32> {
    let owner: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().balance_of(&owner))
}

/// Total number of tokens minted so far.
#[receive(contract = "Mintdrop", name = "totalSupply", return_value = "u32")]
fn total_supply<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<u32> {
    Ok(host.state().total_minted)
}

/// Hard cap on the number of tokens this instance will ever mint.
#[receive(contract = "Mintdrop", name = "maxSupply", return_value = "u32")]
fn max_supply<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<u32> {
    Ok(host.state().max_supply)
}

/// Price of a single token.
#[receive(contract = "Mintdrop", name = "cost", return_value = "Amount")]
fn cost<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Amount> {
    Ok(host.state().unit_cost)
}

/// Time at which minting opens.
#[receive(
    contract = "Mintdrop",
    name = "allowMintingOn",
    return_value = "Timestamp"
)]
fn allow_minting_on<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<Timestamp> {
    Ok(host.state().allow_minting_on)
}

/// Whether minting is currently paused.
#[receive(contract = "Mintdrop", name = "paused", return_value = "bool")]
fn paused<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<bool> {
    Ok(host.state().paused)
}

/// The contract instance owner.
#[receive(contract = "Mintdrop", name = "owner", return_value = "AccountAddress")]
fn owner<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    _host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<AccountAddress> {
    Ok(ctx.owner())
}

/// Prefix of the token metadata URLs.
#[receive(contract = "Mintdrop", name = "baseURI", return_value = "String")]
fn base_uri<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<String> {
    Ok(host.state().base_uri.clone())
}

/// Whether an address is on the whitelist.
#[receive(
    contract = "Mintdrop",
    name = "isWhitelisted",
    parameter = "Address",
    return_value = "bool"
)]
fn is_whitelisted<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ReceiveResult<bool> {
    let address: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().is_whitelisted(&address))
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use test_infrastructure::*;

    const OWNER: AccountAddress = AccountAddress([1; 32]);
    const OWNER_ADDRESS: Address = Address::Account(OWNER);
    const MINTER: AccountAddress = AccountAddress([2; 32]);
    const MINTER_ADDRESS: Address = Address::Account(MINTER);
    const OTHER: AccountAddress = AccountAddress([16; 32]);
    const OTHER_ADDRESS: Address = Address::Account(OTHER);

    const UNIT_COST: Amount = Amount::from_ccd(10);
    const MAX_SUPPLY: u32 = 25;
    const BASE_URI: &str = "https://minting.mintdrop.io/metadata/";

    fn mint_start() -> Timestamp {
        Timestamp::from_timestamp_millis(1_000_000)
    }

    /// Slot time at which the minting window is open.
    fn test_slot_time() -> Timestamp {
        mint_start()
    }

    fn init_params() -> InitParams {
        InitParams {
            name: String::from("Mintdrop Punks"),
            symbol: String::from("MDP"),
            unit_cost: UNIT_COST,
            max_supply: MAX_SUPPLY,
            allow_minting_on: mint_start(),
            base_uri: String::from(BASE_URI),
        }
    }

    fn host_with_params(params: InitParams) -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let bytes = to_bytes(&params);
        ctx.set_init_origin(OWNER).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        // Call the init method.
        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_Mintdrop");

        TestHost::new(state, state_builder)
    }

    fn default_host() -> TestHost<State<TestStateApi>> {
        host_with_params(init_params())
    }

    /// Call init with the given parameters and return the rejection.
    fn init_error(params: InitParams) -> Reject {
        let mut ctx = TestInitContext::empty();
        let bytes = to_bytes(&params);
        ctx.set_init_origin(OWNER).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        match init(&ctx, &mut state_builder) {
            Ok(_) => fail!("Initialization should reject"),
            Err(err) => err,
        }
    }

    /// Whitelist an address acting as the instance owner.
    fn whitelist(host: &mut TestHost<State<TestStateApi>>, address: Address) {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&address);
        ctx.set_sender(OWNER_ADDRESS)
            .set_owner(OWNER)
            .set_parameter(&bytes);

        let result = add_to_whitelist(&ctx, host);
        claim_eq!(result, Ok(()));
    }

    /// Call the mint entrypoint with the given sender, quantity, payment and
    /// slot time.
    fn try_mint(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        quantity: u32,
        payment: Amount,
        slot_time: Timestamp,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let params = MintParams { quantity };
        let bytes = to_bytes(&params);
        ctx.set_sender(sender)
            .set_parameter(&bytes)
            .set_metadata_slot_time(slot_time);

        let mut logger = TestLogger::init();
        mint(&ctx, host, payment, &mut logger)
    }

    /// Call the setPaused entrypoint with the given sender.
    fn set_paused_by(
        host: &mut TestHost<State<TestStateApi>>,
        sender: Address,
        pause: bool,
    ) -> ContractResult<()> {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&pause);
        ctx.set_sender(sender).set_owner(OWNER).set_parameter(&bytes);

        set_paused(&ctx, host)
    }

    /// Test initialization succeeds and the starting configuration is
    /// stored.
    #[concordium_test]
    fn test_init() {
        let host = default_host();
        let state = host.state();

        claim_eq!(state.unit_cost, UNIT_COST);
        claim_eq!(state.max_supply, MAX_SUPPLY);
        claim_eq!(state.allow_minting_on, mint_start());
        claim_eq!(state.base_uri, String::from(BASE_URI));
        claim!(!state.paused, "Minting should start unpaused");
        claim_eq!(state.total_minted, 0, "No token should be minted initially");
        claim_eq!(
            state.tokens.iter().count(),
            0,
            "Ownership map should be empty"
        );
    }

    /// Test initialization rejects a zero maximum supply.
    #[concordium_test]
    fn test_init_invalid_max_supply() {
        let mut params = init_params();
        params.max_supply = 0;

        let err = init_error(params);
        claim_eq!(err, CustomContractError::InvalidMaxSupply.into());
    }

    /// Test initialization rejects a base URI without a trailing slash.
    #[concordium_test]
    fn test_init_invalid_base_uri() {
        let mut params = init_params();
        params.base_uri = String::from("https://minting.mintdrop.io/metadata");

        let err = init_error(params);
        claim_eq!(err, CustomContractError::InvalidBaseUri.into());
    }

    /// Test minting three tokens: sequential ids are assigned to the
    /// sender, the counters update and the events are logged.
    #[concordium_test]
    fn test_mint() {
        let mut host = default_host();
        whitelist(&mut host, MINTER_ADDRESS);

        let mut ctx = TestReceiveContext::empty();
        let params = MintParams { quantity: 3 };
        let bytes = to_bytes(&params);
        ctx.set_sender(MINTER_ADDRESS)
            .set_parameter(&bytes)
            .set_metadata_slot_time(test_slot_time());

        let mut logger = TestLogger::init();

        // Call the contract function.
        let result: ContractResult<()> = mint(&ctx, &mut host, UNIT_COST * 3, &mut logger);
        claim_eq!(result, Ok(()));

        // Check the state.
        claim_eq!(host.state().total_minted, 3, "Three tokens should be minted");
        claim_eq!(host.state().balance_of(&MINTER_ADDRESS), 3);
        claim_eq!(
            host.state().tokens_of(&MINTER_ADDRESS),
            vec![TokenIdU32(1), TokenIdU32(2), TokenIdU32(3)],
            "Wallet should hold the sequential ids in order"
        );
        claim_eq!(host.state().owner_of(&TokenIdU32(1)), Ok(MINTER_ADDRESS));

        // Check the logs.
        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
                token_id: TokenIdU32(1),
                amount: ContractTokenAmount::from(1),
                owner: MINTER_ADDRESS,
            }))),
            "Expected an event for minting token 1"
        );
        claim!(
            logger
                .logs
                .contains(&to_bytes(&token_metadata_event(BASE_URI, TokenIdU32(3)))),
            "Expected a metadata event for token 3"
        );
        claim!(
            logger
                .logs
                .contains(&to_bytes(&CustomEvent::Minted(MintedEvent {
                    last_token_id: TokenIdU32(3),
                    minter: MINTER_ADDRESS,
                }))),
            "Expected an event carrying the last assigned id"
        );
    }

    /// Minting a quantity of zero is rejected.
    #[concordium_test]
    fn test_mint_zero_quantity() {
        let mut host = default_host();
        whitelist(&mut host, MINTER_ADDRESS);

        let result = try_mint(
            &mut host,
            MINTER_ADDRESS,
            0,
            Amount::zero(),
            test_slot_time(),
        );

        claim_eq!(result, Err(CustomContractError::InvalidQuantity.into()));
        claim_eq!(host.state().total_minted, 0, "No token should be minted");
    }

    /// Minting above the per transaction limit is rejected.
    #[concordium_test]
    fn test_mint_above_per_tx_limit() {
        let mut host = default_host();
        whitelist(&mut host, MINTER_ADDRESS);

        let result = try_mint(
            &mut host,
            MINTER_ADDRESS,
            MAX_MINT_PER_TX + 1,
            UNIT_COST * (MAX_MINT_PER_TX + 1) as u64,
            test_slot_time(),
        );

        claim_eq!(
            result,
            Err(CustomContractError::QuantityExceedsPerTxLimit.into())
        );
        claim_eq!(host.state().total_minted, 0, "No token should be minted");
    }

    /// Minting exactly the per transaction limit succeeds.
    #[concordium_test]
    fn test_mint_max_quantity() {
        let mut host = default_host();
        whitelist(&mut host, MINTER_ADDRESS);

        let result = try_mint(
            &mut host,
            MINTER_ADDRESS,
            MAX_MINT_PER_TX,
            UNIT_COST * MAX_MINT_PER_TX as u64,
            test_slot_time(),
        );

        claim_eq!(result, Ok(()));
        claim_eq!(host.state().total_minted, MAX_MINT_PER_TX);
        claim_eq!(
            host.state().tokens_of(&MINTER_ADDRESS),
            vec![
                TokenIdU32(1),
                TokenIdU32(2),
                TokenIdU32(3),
                TokenIdU32(4),
                TokenIdU32(5)
            ]
        );
    }

    /// Minting before the window opens is rejected even with correct
    /// payment and whitelist status.
    #[concordium_test]
    fn test_mint_before_window() {
        let mut host = default_host();
        whitelist(&mut host, MINTER_ADDRESS);

        let early = Timestamp::from_timestamp_millis(mint_start().timestamp_millis() - 1);
        let result = try_mint(&mut host, MINTER_ADDRESS, 1, UNIT_COST, early);

        claim_eq!(result, Err(CustomContractError::MintingNotYetAllowed.into()));
        claim_eq!(host.state().total_minted, 0, "No token should be minted");
    }

    /// Minting while paused is rejected, resuming allows the same call to
    /// succeed.
    #[concordium_test]
    fn test_mint_paused_then_resumed() {
        let mut host = default_host();
        whitelist(&mut host, MINTER_ADDRESS);

        claim_eq!(set_paused_by(&mut host, OWNER_ADDRESS, true), Ok(()));

        let result = try_mint(&mut host, MINTER_ADDRESS, 1, UNIT_COST, test_slot_time());
        claim_eq!(result, Err(CustomContractError::MintingPaused.into()));

        claim_eq!(set_paused_by(&mut host, OWNER_ADDRESS, false), Ok(()));

        let result = try_mint(&mut host, MINTER_ADDRESS, 1, UNIT_COST, test_slot_time());
        claim_eq!(result, Ok(()));
        claim_eq!(host.state().total_minted, 1);
    }

    /// The first failing admission check decides the rejection reason.
    #[concordium_test]
    fn test_mint_rejection_order() {
        let mut host = default_host();
        claim_eq!(set_paused_by(&mut host, OWNER_ADDRESS, true), Ok(()));

        // Quantity zero and no whitelisting would reject as well, but the
        // pause flag is checked first.
        let result = try_mint(
            &mut host,
            MINTER_ADDRESS,
            0,
            Amount::zero(),
            test_slot_time(),
        );
        claim_eq!(result, Err(CustomContractError::MintingPaused.into()));

        // Unpaused and underpaying without whitelist status, the payment
        // check is consulted ahead of the whitelist.
        let mut host = default_host();
        let result = try_mint(
            &mut host,
            MINTER_ADDRESS,
            1,
            Amount::zero(),
            test_slot_time(),
        );
        claim_eq!(result, Err(CustomContractError::InsufficientPayment.into()));
    }

    /// Requests beyond the remaining supply are rejected with no partial
    /// state.
    #[concordium_test]
    fn test_mint_supply_cap() {
        let mut params = init_params();
        params.max_supply = 4;
        let mut host = host_with_params(params);
        whitelist(&mut host, MINTER_ADDRESS);

        let result = try_mint(&mut host, MINTER_ADDRESS, 2, UNIT_COST * 2, test_slot_time());
        claim_eq!(result, Ok(()));

        let result = try_mint(&mut host, MINTER_ADDRESS, 3, UNIT_COST * 3, test_slot_time());
        claim_eq!(result, Err(CustomContractError::SupplyExceeded.into()));

        claim_eq!(
            host.state().total_minted,
            2,
            "The rejected request should leave the minted count untouched"
        );
        claim_eq!(
            host.state().tokens_of(&MINTER_ADDRESS),
            vec![TokenIdU32(1), TokenIdU32(2)]
        );
    }

    /// Filling the supply exactly to the cap succeeds, one more token is
    /// rejected.
    #[concordium_test]
    fn test_mint_exact_supply() {
        let mut params = init_params();
        params.max_supply = 4;
        let mut host = host_with_params(params);
        whitelist(&mut host, MINTER_ADDRESS);

        let result = try_mint(&mut host, MINTER_ADDRESS, 2, UNIT_COST * 2, test_slot_time());
        claim_eq!(result, Ok(()));

        // The second call lands exactly on the cap.
        let result = try_mint(&mut host, MINTER_ADDRESS, 2, UNIT_COST * 2, test_slot_time());
        claim_eq!(result, Ok(()));
        claim_eq!(host.state().total_minted, 4);

        let result = try_mint(&mut host, MINTER_ADDRESS, 1, UNIT_COST, test_slot_time());
        claim_eq!(result, Err(CustomContractError::SupplyExceeded.into()));
        claim_eq!(
            host.state().tokens_of(&MINTER_ADDRESS),
            vec![TokenIdU32(1), TokenIdU32(2), TokenIdU32(3), TokenIdU32(4)]
        );
    }

    /// Underpaying for the requested quantity is rejected.
    #[concordium_test]
    fn test_mint_insufficient_payment() {
        let mut host = default_host();
        whitelist(&mut host, MINTER_ADDRESS);

        let result = try_mint(&mut host, MINTER_ADDRESS, 2, UNIT_COST, test_slot_time());

        claim_eq!(result, Err(CustomContractError::InsufficientPayment.into()));
        claim_eq!(host.state().total_minted, 0, "No token should be minted");
    }

    /// A unit cost so large the total cost overflows is unpayable, the
    /// product must not wrap around.
    #[concordium_test]
    fn test_mint_cost_overflow() {
        let mut params = init_params();
        params.unit_cost = Amount::from_micro_ccd(u64::MAX / 2);
        let mut host = host_with_params(params);
        whitelist(&mut host, MINTER_ADDRESS);

        let result = try_mint(
            &mut host,
            MINTER_ADDRESS,
            3,
            Amount::from_micro_ccd(u64::MAX),
            test_slot_time(),
        );

        claim_eq!(result, Err(CustomContractError::InsufficientPayment.into()));
        claim_eq!(host.state().total_minted, 0, "No token should be minted");
    }

    /// Paying above the total cost still mints, the excess is kept.
    #[concordium_test]
    fn test_mint_overpayment_kept() {
        let mut host = default_host();
        whitelist(&mut host, MINTER_ADDRESS);

        let result = try_mint(&mut host, MINTER_ADDRESS, 1, UNIT_COST * 5, test_slot_time());

        claim_eq!(result, Ok(()));
        claim_eq!(host.state().total_minted, 1, "Exactly one token is minted");
        claim_eq!(host.state().owner_of(&TokenIdU32(1)), Ok(MINTER_ADDRESS));
        claim_eq!(host.state().tokens_of(&MINTER_ADDRESS), vec![TokenIdU32(1)]);
    }

    /// Senders that are not whitelisted are rejected.
    #[concordium_test]
    fn test_mint_not_whitelisted() {
        let mut host = default_host();

        let result = try_mint(&mut host, MINTER_ADDRESS, 1, UNIT_COST, test_slot_time());

        claim_eq!(result, Err(CustomContractError::NotWhitelisted.into()));
        claim_eq!(host.state().total_minted, 0, "No token should be minted");
    }

    /// Test whitelist management: owner only, adding twice is a no-op.
    #[concordium_test]
    fn test_add_to_whitelist() {
        let mut host = default_host();

        claim!(!host.state().is_whitelisted(&MINTER_ADDRESS));

        whitelist(&mut host, MINTER_ADDRESS);
        claim!(host.state().is_whitelisted(&MINTER_ADDRESS));

        // Adding the same address again is accepted and changes nothing.
        whitelist(&mut host, MINTER_ADDRESS);
        claim!(host.state().is_whitelisted(&MINTER_ADDRESS));
        claim_eq!(host.state().whitelist.iter().count(), 1);

        // Anyone else is rejected.
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&OTHER_ADDRESS);
        ctx.set_sender(OTHER_ADDRESS)
            .set_owner(OWNER)
            .set_parameter(&bytes);

        let result = add_to_whitelist(&ctx, &mut host);
        claim_eq!(result, Err(ContractError::Unauthorized));
        claim!(!host.state().is_whitelisted(&OTHER_ADDRESS));
    }

    /// Test pause control: the owner toggles the flag, others are rejected.
    #[concordium_test]
    fn test_set_paused() {
        let mut host = default_host();

        claim_eq!(set_paused_by(&mut host, OWNER_ADDRESS, true), Ok(()));
        claim!(host.state().paused, "Minting should be paused");

        claim_eq!(set_paused_by(&mut host, OWNER_ADDRESS, false), Ok(()));
        claim!(!host.state().paused, "Minting should be resumed");

        let result = set_paused_by(&mut host, OTHER_ADDRESS, true);
        claim_eq!(result, Err(ContractError::Unauthorized));
        claim!(!host.state().paused);
    }

    /// Test withdrawal by the owner: the full balance moves to the owner
    /// and the event is logged.
    #[concordium_test]
    fn test_withdraw() {
        let mut host = default_host();
        let balance = Amount::from_ccd(30);
        host.set_self_balance(balance);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(OWNER_ADDRESS).set_owner(OWNER);

        let mut logger = TestLogger::init();

        // Call the contract function.
        let result: ContractResult<()> = withdraw(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        claim!(
            host.transfer_occurred(&OWNER, balance),
            "The balance should be transferred to the owner"
        );
        claim!(
            logger
                .logs
                .contains(&to_bytes(&CustomEvent::Withdraw(WithdrawEvent {
                    amount: balance,
                    owner: OWNER,
                }))),
            "Expected an event for the payout"
        );
    }

    /// Withdrawal by anyone but the owner is rejected and moves nothing.
    #[concordium_test]
    fn test_withdraw_not_owner() {
        let mut host = default_host();
        let balance = Amount::from_ccd(30);
        host.set_self_balance(balance);

        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(OTHER_ADDRESS).set_owner(OWNER);

        let mut logger = TestLogger::init();

        let result: ContractResult<()> = withdraw(&ctx, &mut host, &mut logger);
        claim_eq!(result, Err(ContractError::Unauthorized));

        claim!(
            !host.transfer_occurred(&OWNER, balance),
            "No transfer should happen"
        );
        claim_eq!(logger.logs.len(), 0, "No event should be logged");
    }

    /// Test token queries for minted and unminted ids.
    #[concordium_test]
    fn test_token_queries() {
        let mut host = default_host();
        whitelist(&mut host, MINTER_ADDRESS);

        let result = try_mint(&mut host, MINTER_ADDRESS, 1, UNIT_COST, test_slot_time());
        claim_eq!(result, Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let minted_id = to_bytes(&TokenIdU32(1));
        ctx.set_parameter(&minted_id);

        claim_eq!(owner_of(&ctx, &host), Ok(MINTER_ADDRESS));
        claim_eq!(
            token_uri(&ctx, &host),
            Ok(String::from("https://minting.mintdrop.io/metadata/1.json"))
        );

        let mut ctx = TestReceiveContext::empty();
        let unminted_id = to_bytes(&TokenIdU32(99));
        ctx.set_parameter(&unminted_id);

        claim_eq!(owner_of(&ctx, &host), Err(ContractError::InvalidTokenId));
        claim_eq!(token_uri(&ctx, &host), Err(ContractError::InvalidTokenId));
    }

    /// Test wallet enumeration and balances through the query entrypoints.
    #[concordium_test]
    fn test_wallet_queries() {
        let mut host = default_host();
        whitelist(&mut host, MINTER_ADDRESS);

        let result = try_mint(&mut host, MINTER_ADDRESS, 3, UNIT_COST * 3, test_slot_time());
        claim_eq!(result, Ok(()));

        let mut ctx = TestReceiveContext::empty();
        let minter_bytes = to_bytes(&MINTER_ADDRESS);
        ctx.set_parameter(&minter_bytes);

        let wallet = wallet_of_owner(&ctx, &host).expect_report("Wallet query failed");
        claim_eq!(wallet, vec![TokenIdU32(1), TokenIdU32(2), TokenIdU32(3)]);
        claim_eq!(
            balance_of(&ctx, &host).expect_report("Balance query failed"),
            3
        );

        let mut ctx = TestReceiveContext::empty();
        let other_bytes = to_bytes(&OTHER_ADDRESS);
        ctx.set_parameter(&other_bytes);

        let wallet = wallet_of_owner(&ctx, &host).expect_report("Wallet query failed");
        claim_eq!(wallet, Vec::new(), "Address without tokens owns nothing");
        claim_eq!(
            balance_of(&ctx, &host).expect_report("Balance query failed"),
            0
        );
    }

    /// Test the aggregate view of the configuration.
    #[concordium_test]
    fn test_view() {
        let host = default_host();

        let mut ctx = TestReceiveContext::empty();
        ctx.set_owner(OWNER);

        let result = view(&ctx, &host).expect_report("View failed");
        claim_eq!(
            result,
            ViewState {
                name: String::from("Mintdrop Punks"),
                symbol: String::from("MDP"),
                unit_cost: UNIT_COST,
                max_supply: MAX_SUPPLY,
                total_minted: 0,
                allow_minting_on: mint_start(),
                paused: false,
                base_uri: String::from(BASE_URI),
                owner: OWNER,
            }
        );
    }
}
