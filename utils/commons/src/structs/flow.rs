use super::*;

/// Identity of a payment stream eligible for NFT representation.
///
/// Keys that differ in any field identify independent flows. In particular,
/// two flows between the same sender and receiver for different tokens are
/// tracked separately.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, SchemaType)]
pub struct FlowKey {
    /// The streamed asset.
    pub token: ContractAddress,
    /// The paying side of the flow.
    pub sender: AccountAddress,
    /// The receiving side of the flow. Owns the token minted for it.
    pub receiver: AccountAddress,
}

/// The accounting contract's answer to a flow query.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, SchemaType)]
pub struct FlowInfo {
    /// When the flow was last started.
    pub start: Timestamp,
    /// Streamed amount per second. A rate of zero means the flow does not
    /// currently exist: it was stopped or never created.
    pub rate: u64,
}
