use commons::*;
use concordium_cis2::TokenIdU64;
use concordium_std::*;
use core::ops::DerefMut;

/// Data attached to one minted token.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FlowData {
    /// The flow this token represents. Immutable once minted.
    pub flow: FlowKey,
    /// When the flow was started. Only known for tokens minted by the
    /// create-flow hook; tokens minted retroactively carry no start date.
    pub start: Option<Timestamp>,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// The accounting contract trusted to deliver flow lifecycle hooks.
    pub cfa: ContractAddress,
    /// Descriptive token name.
    pub name: String,
    /// Token ticker symbol.
    pub symbol: String,
    /// Live tokens by token ID.
    tokens: StateMap<ContractTokenId, FlowData, S>,
    /// Index from flow identity to the live token ID.
    flows: StateMap<FlowKey, ContractTokenId, S>,
    /// Count of live tokens per owner.
    balances: StateMap<AccountAddress, u64, S>,
    /// Number of mints performed. The next token ID is this count plus one;
    /// IDs are never reused, including after burns.
    pub minted: u64,
}

impl<S: HasStateApi> State<S> {
    /// Creates a new state with no tokens.
    pub fn new(
        state_builder: &mut StateBuilder<S>,
        cfa: ContractAddress,
        name: String,
        symbol: String,
    ) -> Self {
        Self {
            cfa,
            name,
            symbol,
            tokens: state_builder.new_map(),
            flows: state_builder.new_map(),
            balances: state_builder.new_map(),
            minted: 0,
        }
    }

    /// Check if `address` is the trusted accounting contract.
    pub fn is_cfa(&self, address: &Address) -> bool {
        match address {
            Address::Account(_) => false,
            Address::Contract(contract) => contract == &self.cfa,
        }
    }

    /// Record a new token for `flow`, owned by the flow receiver.
    ///
    /// All three maps are updated together, so token data, the flow index
    /// and owner balances cannot drift apart.
    ///
    /// Fails with `AlreadyMinted` if a live token for this flow exists.
    /// A token that never got burned because the delete notification was
    /// lost still counts as live here; the registry holds on to it until a
    /// manual burn reconciles the miss.
    pub fn mint(
        &mut self,
        flow: FlowKey,
        start: Option<Timestamp>,
    ) -> ContractResult<ContractTokenId> {
        ensure!(
            self.flows.get(&flow).is_none(),
            CustomContractError::AlreadyMinted.into()
        );

        self.minted += 1;
        let token_id = TokenIdU64(self.minted);

        self.tokens.insert(token_id, FlowData { flow, start });
        self.flows.insert(flow, token_id);
        *self
            .balances
            .entry(flow.receiver)
            .or_insert_with(|| 0)
            .deref_mut() += 1;

        Ok(token_id)
    }

    /// Remove the token for `flow` from the registry.
    ///
    /// Fails with `NotExists` if no live token matches the key.
    pub fn burn(&mut self, flow: &FlowKey) -> ContractResult<ContractTokenId> {
        let token_id = match self.flows.get(flow) {
            Some(token_id) => *token_id,
            None => bail!(CustomContractError::NotExists.into()),
        };

        self.flows.remove(flow);
        self.tokens.remove(&token_id);
        self.balances
            .get_mut(&flow.receiver)
            .map(|mut count| *count = count.saturating_sub(1));

        Ok(token_id)
    }

    /// Token data by ID. Fails with `NotExists` for IDs that were never
    /// assigned or whose token has been burned.
    pub fn token(&self, token_id: &ContractTokenId) -> ContractResult<FlowData> {
        self.tokens
            .get(token_id)
            .map(|data| *data)
            .ok_or_else(|| CustomContractError::NotExists.into())
    }

    /// Live token ID by flow identity.
    pub fn token_id(&self, flow: &FlowKey) -> ContractResult<ContractTokenId> {
        self.flows
            .get(flow)
            .map(|token_id| *token_id)
            .ok_or_else(|| CustomContractError::NotExists.into())
    }

    /// Count of live tokens owned by `owner`.
    pub fn balance(&self, owner: &AccountAddress) -> u64 {
        self.balances.get(owner).map(|count| *count).unwrap_or(0)
    }
}
