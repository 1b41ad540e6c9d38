use commons::*;
use concordium_std::*;

/// The parameter type for the contract init function.
#[derive(Serialize, SchemaType)]
pub struct InitParams {
    /// Address of the accounting contract whose flows are represented.
    pub cfa: ContractAddress,
    /// Descriptive token name.
    pub name: String,
    /// Token ticker symbol.
    pub symbol: String,
}

/// The parameter type for the create-flow hook.
#[derive(Debug, Clone, Copy, Serialize, SchemaType)]
pub struct FlowCreatedParams {
    /// The flow that was created.
    pub flow: FlowKey,
    /// Account that opened the flow: the flow sender or an operator acting
    /// on the sender's behalf.
    pub actor: AccountAddress,
    /// Streamed amount per second at creation time.
    pub rate: u64,
}

/// The parameter type for the delete-flow hook.
#[derive(Debug, Clone, Copy, Serialize, SchemaType)]
pub struct FlowDeletedParams {
    /// The flow that was deleted.
    pub flow: FlowKey,
    /// Account that stopped the flow: the flow sender or an operator acting
    /// on the sender's behalf.
    pub actor: AccountAddress,
}

/// Return type of the `view` entrypoint.
#[derive(Debug, Serialize, PartialEq, Eq, SchemaType)]
pub struct ViewResult {
    /// The accounting contract this registry is bound to.
    pub cfa: ContractAddress,
    pub name: String,
    pub symbol: String,
    /// Number of mints performed over the contract lifetime, burned tokens
    /// included.
    pub minted: u64,
}
