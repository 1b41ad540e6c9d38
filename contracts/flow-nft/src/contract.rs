use commons::*;
use concordium_cis2::*;
use concordium_std::*;

use crate::cfa;
use crate::external::*;
use crate::helper::build_token_uri;
use crate::state::State;

/// Initialize the registry with no tokens, bound to one accounting
/// contract.
#[init(contract = "FlowNFT", parameter = "InitParams")]
fn contract_init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let params = InitParams::deserial(&mut ctx.parameter_cursor())?;
    Ok(State::new(
        state_builder,
        params.cfa,
        params.name,
        params.symbol,
    ))
}

/// Hook invoked by the accounting contract right after a flow was created.
///
/// Mints a token for the flow, owned by the flow receiver no matter whether
/// the sender or a delegated operator opened the flow. The slot time is
/// recorded as the flow start date.
///
/// It rejects if:
/// - The sender is not the configured accounting contract.
/// - A live token for this flow already exists.
/// - Fails to log events.
#[receive(
    mutable,
    contract = "FlowNFT",
    name = "handleFlowCreated",
    parameter = "FlowCreatedParams",
    enable_logger
)]
fn handle_flow_created<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = FlowCreatedParams::deserial(&mut ctx.parameter_cursor())?;

    ensure!(
        host.state().is_cfa(&ctx.sender()),
        CustomContractError::Unauthorized.into()
    );

    let start = ctx.metadata().slot_time();
    let token_id = host.state_mut().mint(params.flow, Some(start))?;

    log_mint(logger, token_id, &params.flow, Some(start))
}

/// Hook invoked by the accounting contract right after a flow was deleted.
///
/// Burns the flow's token if one exists. A delete for a flow without a
/// token is accepted without effect, so late or duplicated notifications
/// cannot fail the accounting contract's delete path.
///
/// It rejects if:
/// - The sender is not the configured accounting contract.
/// - Fails to log events.
#[receive(
    mutable,
    contract = "FlowNFT",
    name = "handleFlowDeleted",
    parameter = "FlowDeletedParams",
    enable_logger
)]
fn handle_flow_deleted<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let params = FlowDeletedParams::deserial(&mut ctx.parameter_cursor())?;

    ensure!(
        host.state().is_cfa(&ctx.sender()),
        CustomContractError::Unauthorized.into()
    );

    let token_id = match host.state_mut().burn(&params.flow) {
        Ok(token_id) => token_id,
        Err(_) => return Ok(()),
    };

    log_burn(logger, token_id, &params.flow)
}

/// Manual fallback for a missed create hook. Mints the token for an
/// existing flow, without a recorded start date.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - No flow currently exists for the key (`NotExists`).
/// - A live token for this flow already exists (`AlreadyMinted`).
/// - The accounting contract cannot be queried.
/// - Fails to log events.
#[receive(
    mutable,
    contract = "FlowNFT",
    name = "mint",
    parameter = "FlowKey",
    enable_logger
)]
fn contract_mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let flow = FlowKey::deserial(&mut ctx.parameter_cursor())?;

    let cfa_address = host.state().cfa;
    let info = cfa::get_flow(host, &cfa_address, &flow)?;
    ensure!(info.rate > 0, CustomContractError::NotExists.into());

    let token_id = host.state_mut().mint(flow, None)?;

    log_mint(logger, token_id, &flow, None)
}

/// Manual fallback for a missed delete hook. Burns the token of a stopped
/// flow.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - No live token exists for the key (`NotExists`).
/// - The flow still has a non-zero rate (`FlowOngoing`).
/// - The accounting contract cannot be queried.
/// - Fails to log events.
#[receive(
    mutable,
    contract = "FlowNFT",
    name = "burn",
    parameter = "FlowKey",
    enable_logger
)]
fn contract_burn<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    let flow = FlowKey::deserial(&mut ctx.parameter_cursor())?;

    // Token existence is checked before the flow query, so burning a key
    // that was never minted reports `NotExists` even when the accounting
    // contract is unreachable.
    host.state().token_id(&flow)?;

    let cfa_address = host.state().cfa;
    let info = cfa::get_flow(host, &cfa_address, &flow)?;
    ensure!(info.rate == 0, CustomContractError::FlowOngoing.into());

    let token_id = host.state_mut().burn(&flow)?;

    log_burn(logger, token_id, &flow)
}

/// Look up the owner of a token. Ownership follows the flow receiver.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token was never minted or has been burned (`NotExists`).
#[receive(
    contract = "FlowNFT",
    name = "ownerOf",
    parameter = "ContractTokenId",
    return_value = "AccountAddress"
)]
fn contract_owner_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<AccountAddress> {
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;
    let data = host.state().token(&token_id)?;
    Ok(data.flow.receiver)
}

/// Build the descriptive URI of a token: the metadata service URL with the
/// flow fields as query parameters, including the start date when known.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - The token was never minted or has been burned (`NotExists`).
#[receive(
    contract = "FlowNFT",
    name = "tokenURI",
    parameter = "ContractTokenId",
    return_value = "String"
)]
fn contract_token_uri<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    let token_id = ContractTokenId::deserial(&mut ctx.parameter_cursor())?;
    let data = host.state().token(&token_id)?;
    Ok(build_token_uri(&data.flow, data.start))
}

/// Reverse lookup from flow identity to the live token ID.
///
/// It rejects if:
/// - Fails to parse parameter.
/// - No live token exists for the key (`NotExists`).
#[receive(
    contract = "FlowNFT",
    name = "getTokenId",
    parameter = "FlowKey",
    return_value = "ContractTokenId"
)]
fn contract_get_token_id<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractTokenId> {
    let flow = FlowKey::deserial(&mut ctx.parameter_cursor())?;
    host.state().token_id(&flow)
}

/// Count of live tokens owned by the given address. Zero for addresses
/// that never received a token.
#[receive(
    contract = "FlowNFT",
    name = "balanceOf",
    parameter = "AccountAddress",
    return_value = "u64"
)]
fn contract_balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<u64> {
    let owner = AccountAddress::deserial(&mut ctx.parameter_cursor())?;
    Ok(host.state().balance(&owner))
}

/// View general contract data.
#[receive(contract = "FlowNFT", name = "view", return_value = "ViewResult")]
fn contract_view<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ViewResult> {
    let state = host.state();
    Ok(ViewResult {
        cfa: state.cfa,
        name: state.name.clone(),
        symbol: state.symbol.clone(),
        minted: state.minted,
    })
}

fn log_mint(
    logger: &mut impl HasLogger,
    token_id: ContractTokenId,
    flow: &FlowKey,
    start: Option<Timestamp>,
) -> ContractResult<()> {
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner: Address::Account(flow.receiver),
    }))?;

    // Metadata URL for the token.
    logger.log(&Cis2Event::TokenMetadata::<_, ContractTokenAmount>(
        TokenMetadataEvent {
            token_id,
            metadata_url: MetadataUrl {
                url: build_token_uri(flow, start),
                hash: None,
            },
        },
    ))?;

    Ok(())
}

fn log_burn(
    logger: &mut impl HasLogger,
    token_id: ContractTokenId,
    flow: &FlowKey,
) -> ContractResult<()> {
    logger.log(&Cis2Event::Burn(BurnEvent {
        token_id,
        amount: ContractTokenAmount::from(1),
        owner: Address::Account(flow.receiver),
    }))?;

    Ok(())
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use crate::constants::{GET_FLOW_ENTRYPOINT, TOKEN_URI_BASE};
    use commons::test::*;
    use test_infrastructure::*;

    const SENDER: AccountAddress = AccountAddress([1; 32]);
    const RECEIVER: AccountAddress = AccountAddress([2; 32]);
    const OPERATOR: AccountAddress = AccountAddress([3; 32]);

    const CFA: ContractAddress = ContractAddress {
        index: 5,
        subindex: 0,
    };
    const TOKEN_1: ContractAddress = ContractAddress {
        index: 16,
        subindex: 0,
    };
    const TOKEN_2: ContractAddress = ContractAddress {
        index: 17,
        subindex: 0,
    };

    fn slot_time() -> Timestamp {
        Timestamp::from_timestamp_millis(1_675_000_000_000)
    }

    fn flow_1() -> FlowKey {
        FlowKey {
            token: TOKEN_1,
            sender: SENDER,
            receiver: RECEIVER,
        }
    }

    fn flow_2() -> FlowKey {
        FlowKey {
            token: TOKEN_2,
            sender: SENDER,
            receiver: RECEIVER,
        }
    }

    fn default_host() -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let params = InitParams {
            cfa: CFA,
            name: "Superfluid Stream".into(),
            symbol: "SFS".into(),
        };
        let bytes = to_bytes(&params);
        ctx.set_parameter(&bytes);

        let mut state_builder = TestStateBuilder::new();
        let state =
            contract_init(&ctx, &mut state_builder).expect_report("Failed during init_FlowNFT");

        TestHost::new(state, state_builder)
    }

    /// Answer every flow query with the given rate.
    fn mock_flow_rate(host: &mut TestHost<State<TestStateApi>>, rate: u64) {
        host.setup_mock_entrypoint(
            CFA,
            OwnedEntrypointName::new_unchecked(GET_FLOW_ENTRYPOINT.into()),
            parse_and_ok_mock::<FlowKey, _>(FlowInfo {
                start: slot_time(),
                rate,
            }),
        );
    }

    fn create_flow(
        host: &mut TestHost<State<TestStateApi>>,
        flow: FlowKey,
        actor: AccountAddress,
    ) -> ContractResult<()> {
        let params = FlowCreatedParams {
            flow,
            actor,
            rate: 1_000_000_000,
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(CFA))
            .set_parameter(&bytes)
            .set_metadata_slot_time(slot_time());

        let mut logger = TestLogger::init();
        handle_flow_created(&ctx, host, &mut logger)
    }

    fn delete_flow(
        host: &mut TestHost<State<TestStateApi>>,
        flow: FlowKey,
        actor: AccountAddress,
    ) -> ContractResult<()> {
        let params = FlowDeletedParams { flow, actor };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(CFA)).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        handle_flow_deleted(&ctx, host, &mut logger)
    }

    fn manual_mint(
        host: &mut TestHost<State<TestStateApi>>,
        flow: FlowKey,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&flow);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(RECEIVER))
            .set_parameter(&bytes);

        let mut logger = TestLogger::init();
        contract_mint(&ctx, host, &mut logger)
    }

    fn manual_burn(
        host: &mut TestHost<State<TestStateApi>>,
        flow: FlowKey,
    ) -> ContractResult<()> {
        let bytes = to_bytes(&flow);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(RECEIVER))
            .set_parameter(&bytes);

        let mut logger = TestLogger::init();
        contract_burn(&ctx, host, &mut logger)
    }

    fn owner_of(
        host: &TestHost<State<TestStateApi>>,
        token_id: ContractTokenId,
    ) -> ContractResult<AccountAddress> {
        let bytes = to_bytes(&token_id);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        contract_owner_of(&ctx, host)
    }

    fn token_uri(
        host: &TestHost<State<TestStateApi>>,
        token_id: ContractTokenId,
    ) -> ContractResult<String> {
        let bytes = to_bytes(&token_id);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        contract_token_uri(&ctx, host)
    }

    fn get_token_id(
        host: &TestHost<State<TestStateApi>>,
        flow: FlowKey,
    ) -> ContractResult<ContractTokenId> {
        let bytes = to_bytes(&flow);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        contract_get_token_id(&ctx, host)
    }

    fn balance_of(
        host: &TestHost<State<TestStateApi>>,
        owner: AccountAddress,
    ) -> ContractResult<u64> {
        let bytes = to_bytes(&owner);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_parameter(&bytes);
        contract_balance_of(&ctx, host)
    }

    #[concordium_test]
    fn test_init() {
        let host = default_host();
        let state = host.state();

        claim_eq!(state.cfa, CFA);
        claim_eq!(state.name, "Superfluid Stream");
        claim_eq!(state.symbol, "SFS");
        claim_eq!(state.minted, 0);
    }

    #[concordium_test]
    fn test_mint_on_create_hook() {
        let mut host = default_host();

        let params = FlowCreatedParams {
            flow: flow_1(),
            actor: SENDER,
            rate: 1_000_000_000,
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(CFA))
            .set_parameter(&bytes)
            .set_metadata_slot_time(slot_time());

        let mut logger = TestLogger::init();
        let result = handle_flow_created(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        let token_id = get_token_id(&host, flow_1()).expect_report("Token is expected to exist");
        claim_eq!(token_id, TokenIdU64(1));
        claim_eq!(owner_of(&host, token_id), Ok(RECEIVER));
        claim_eq!(balance_of(&host, RECEIVER), Ok(1));

        let uri = token_uri(&host, token_id).expect_report("Token is expected to have a URI");
        claim!(uri.starts_with(TOKEN_URI_BASE));
        claim!(uri.contains("&start_date=1675000000000"));

        // Check the logs
        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
                token_id: TokenIdU64(1),
                amount: ContractTokenAmount::from(1),
                owner: Address::Account(RECEIVER),
            }))),
            "Expected an event for minting the token"
        );
    }

    #[concordium_test]
    fn test_mint_by_operator_on_create_hook() {
        let mut host = default_host();

        claim_eq!(create_flow(&mut host, flow_1(), OPERATOR), Ok(()));

        // Ownership goes to the receiver no matter who opened the flow.
        let token_id = get_token_id(&host, flow_1()).expect_report("Token is expected to exist");
        claim_eq!(owner_of(&host, token_id), Ok(RECEIVER));
        claim_eq!(balance_of(&host, RECEIVER), Ok(1));
        claim_eq!(balance_of(&host, OPERATOR), Ok(0));
    }

    #[concordium_test]
    fn test_hooks_reject_unknown_sender() {
        let mut host = default_host();

        let params = FlowCreatedParams {
            flow: flow_1(),
            actor: SENDER,
            rate: 1_000_000_000,
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Account(SENDER))
            .set_parameter(&bytes)
            .set_metadata_slot_time(slot_time());

        let mut logger = TestLogger::init();
        let result = handle_flow_created(&ctx, &mut host, &mut logger);
        claim_eq!(
            result,
            Err(ContractError::Custom(CustomContractError::Unauthorized))
        );

        // An unrelated contract is rejected as well.
        let other = ContractAddress {
            index: 99,
            subindex: 0,
        };
        let params = FlowDeletedParams {
            flow: flow_1(),
            actor: SENDER,
        };
        let bytes = to_bytes(&params);
        let mut ctx = TestReceiveContext::empty();
        ctx.set_sender(Address::Contract(other)).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let result = handle_flow_deleted(&ctx, &mut host, &mut logger);
        claim_eq!(
            result,
            Err(ContractError::Custom(CustomContractError::Unauthorized))
        );
    }

    #[concordium_test]
    fn test_manual_mint() {
        let mut host = default_host();

        // No flow yet, minting is rejected.
        mock_flow_rate(&mut host, 0);
        claim_eq!(
            manual_mint(&mut host, flow_1()),
            Err(ContractError::Custom(CustomContractError::NotExists))
        );

        // The flow now exists, but the create hook never fired.
        mock_flow_rate(&mut host, 1_000_000_000);
        claim_eq!(manual_mint(&mut host, flow_1()), Ok(()));

        // ... and cannot be minted twice.
        claim_eq!(
            manual_mint(&mut host, flow_1()),
            Err(ContractError::Custom(CustomContractError::AlreadyMinted))
        );

        let token_id = get_token_id(&host, flow_1()).expect_report("Token is expected to exist");
        claim_eq!(owner_of(&host, token_id), Ok(RECEIVER));
        claim_eq!(balance_of(&host, RECEIVER), Ok(1));

        // A retroactive mint has no recorded start date.
        let uri = token_uri(&host, token_id).expect_report("Token is expected to have a URI");
        claim!(uri.starts_with(TOKEN_URI_BASE));
        claim!(!uri.contains("start_date"));

        // The create hook for the same flow is rejected too.
        claim_eq!(
            create_flow(&mut host, flow_1(), SENDER),
            Err(ContractError::Custom(CustomContractError::AlreadyMinted))
        );
    }

    #[concordium_test]
    fn test_manual_mint_queries_the_right_flow() {
        let mut host = default_host();

        host.setup_mock_entrypoint(
            CFA,
            OwnedEntrypointName::new_unchecked(GET_FLOW_ENTRYPOINT.into()),
            parse_and_check_mock::<FlowKey, _>(
                |flow| *flow == flow_1(),
                FlowInfo {
                    start: slot_time(),
                    rate: 1_000_000_000,
                },
            ),
        );

        claim_eq!(manual_mint(&mut host, flow_1()), Ok(()));
    }

    #[concordium_test]
    fn test_mint_twice_fails() {
        let mut host = default_host();

        claim_eq!(create_flow(&mut host, flow_1(), SENDER), Ok(()));
        claim_eq!(
            create_flow(&mut host, flow_1(), SENDER),
            Err(ContractError::Custom(CustomContractError::AlreadyMinted))
        );

        // Manual reconciliation after a successful hook is rejected too.
        mock_flow_rate(&mut host, 1_000_000_000);
        claim_eq!(
            manual_mint(&mut host, flow_1()),
            Err(ContractError::Custom(CustomContractError::AlreadyMinted))
        );
    }

    #[concordium_test]
    fn test_burn_on_delete_hook() {
        let mut host = default_host();

        claim_eq!(create_flow(&mut host, flow_1(), SENDER), Ok(()));
        let token_id = get_token_id(&host, flow_1()).expect_report("Token is expected to exist");

        // A second, unrelated flow of the same parties for another asset.
        claim_eq!(create_flow(&mut host, flow_2(), SENDER), Ok(()));
        claim_eq!(balance_of(&host, RECEIVER), Ok(2));

        claim_eq!(delete_flow(&mut host, flow_1(), SENDER), Ok(()));

        claim_eq!(balance_of(&host, RECEIVER), Ok(1));
        claim_eq!(
            owner_of(&host, token_id),
            Err(ContractError::Custom(CustomContractError::NotExists))
        );
        claim_eq!(
            token_uri(&host, token_id),
            Err(ContractError::Custom(CustomContractError::NotExists))
        );
        claim_eq!(
            get_token_id(&host, flow_1()),
            Err(ContractError::Custom(CustomContractError::NotExists))
        );

        // The other asset's token is untouched.
        let other_id = get_token_id(&host, flow_2()).expect_report("Token is expected to exist");
        claim_eq!(owner_of(&host, other_id), Ok(RECEIVER));
    }

    #[concordium_test]
    fn test_burn_by_operator_on_delete_hook() {
        let mut host = default_host();

        claim_eq!(create_flow(&mut host, flow_1(), SENDER), Ok(()));
        let token_id = get_token_id(&host, flow_1()).expect_report("Token is expected to exist");

        claim_eq!(delete_flow(&mut host, flow_1(), OPERATOR), Ok(()));

        claim_eq!(
            owner_of(&host, token_id),
            Err(ContractError::Custom(CustomContractError::NotExists))
        );
        claim_eq!(balance_of(&host, RECEIVER), Ok(0));
    }

    #[concordium_test]
    fn test_delete_hook_without_token_is_noop() {
        let mut host = default_host();

        claim_eq!(delete_flow(&mut host, flow_1(), SENDER), Ok(()));
        claim_eq!(balance_of(&host, RECEIVER), Ok(0));
        claim_eq!(host.state().minted, 0);
    }

    #[concordium_test]
    fn test_manual_burn() {
        let mut host = default_host();

        // Nothing to burn yet. The accounting contract is not even queried,
        // so no mock is needed.
        claim_eq!(
            manual_burn(&mut host, flow_1()),
            Err(ContractError::Custom(CustomContractError::NotExists))
        );

        claim_eq!(create_flow(&mut host, flow_1(), SENDER), Ok(()));
        let token_id = get_token_id(&host, flow_1()).expect_report("Token is expected to exist");

        // The flow is still running.
        mock_flow_rate(&mut host, 1_000_000_000);
        claim_eq!(
            manual_burn(&mut host, flow_1()),
            Err(ContractError::Custom(CustomContractError::FlowOngoing))
        );

        // Once stopped, the burn goes through.
        mock_flow_rate(&mut host, 0);
        claim_eq!(manual_burn(&mut host, flow_1()), Ok(()));

        claim_eq!(balance_of(&host, RECEIVER), Ok(0));
        claim_eq!(
            owner_of(&host, token_id),
            Err(ContractError::Custom(CustomContractError::NotExists))
        );
    }

    #[concordium_test]
    fn test_missed_delete_keeps_token_minted() {
        let mut host = default_host();

        claim_eq!(create_flow(&mut host, flow_1(), SENDER), Ok(()));
        let token_id = get_token_id(&host, flow_1()).expect_report("Token is expected to exist");

        // The flow is deleted, but the delete notification never arrives.
        // A later create for the same key must not mint a fresh token on
        // top of the orphaned one.
        claim_eq!(
            create_flow(&mut host, flow_1(), SENDER),
            Err(ContractError::Custom(CustomContractError::AlreadyMinted))
        );

        // The original token is still the live one for this key.
        claim_eq!(get_token_id(&host, flow_1()), Ok(token_id));
        claim_eq!(owner_of(&host, token_id), Ok(RECEIVER));
        claim_eq!(balance_of(&host, RECEIVER), Ok(1));
    }

    #[concordium_test]
    fn test_token_ids_never_reused() {
        let mut host = default_host();

        claim_eq!(create_flow(&mut host, flow_1(), SENDER), Ok(()));
        claim_eq!(get_token_id(&host, flow_1()), Ok(TokenIdU64(1)));

        claim_eq!(delete_flow(&mut host, flow_1(), SENDER), Ok(()));

        // Re-creating the same flow mints a fresh token under the next ID.
        claim_eq!(create_flow(&mut host, flow_1(), SENDER), Ok(()));
        claim_eq!(get_token_id(&host, flow_1()), Ok(TokenIdU64(2)));

        claim_eq!(create_flow(&mut host, flow_2(), SENDER), Ok(()));
        claim_eq!(get_token_id(&host, flow_2()), Ok(TokenIdU64(3)));

        claim_eq!(host.state().minted, 3);
    }

    #[concordium_test]
    fn test_queries_on_unknown_token() {
        let host = default_host();

        claim_eq!(
            owner_of(&host, TokenIdU64(1)),
            Err(ContractError::Custom(CustomContractError::NotExists))
        );
        claim_eq!(
            token_uri(&host, TokenIdU64(1)),
            Err(ContractError::Custom(CustomContractError::NotExists))
        );
        claim_eq!(
            get_token_id(&host, flow_1()),
            Err(ContractError::Custom(CustomContractError::NotExists))
        );
        claim_eq!(balance_of(&host, RECEIVER), Ok(0));
    }

    #[concordium_test]
    fn test_view() {
        let mut host = default_host();
        claim_eq!(create_flow(&mut host, flow_1(), SENDER), Ok(()));

        let ctx = TestReceiveContext::empty();
        let result = contract_view(&ctx, &host).expect_report("View call failed");

        claim_eq!(
            result,
            ViewResult {
                cfa: CFA,
                name: String::from("Superfluid Stream"),
                symbol: String::from("SFS"),
                minted: 1,
            }
        );
    }
}
