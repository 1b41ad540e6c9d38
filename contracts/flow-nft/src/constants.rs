/// Base URL of the metadata service answering token URI queries.
pub const TOKEN_URI_BASE: &str = "https://nft.superfluid.finance/cfa/v1/getmeta";

/// Entrypoint of the accounting contract answering flow queries.
pub const GET_FLOW_ENTRYPOINT: &str = "getFlow";
