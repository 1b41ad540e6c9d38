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
    /// No live token or flow matches the given key or token ID
    /// (Error code: -4).
    NotExists,
    /// A token for this flow was already minted and not burned since
    /// (Error code: -5).
    AlreadyMinted,
    /// The flow still has a non-zero rate (Error code: -6).
    FlowOngoing,
    /// Sender is not allowed to call this function (Error code: -7).
    Unauthorized,
    /// Failed to invoke a contract (Error code: -8).
    InvokeContractError,
    /// Incompatible contract (Error code: -9).
    Incompatible,
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
