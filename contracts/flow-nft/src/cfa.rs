use commons::*;
use concordium_std::*;

use crate::constants::GET_FLOW_ENTRYPOINT;
use crate::state::State;

/// Query the accounting contract for the current state of a flow.
///
/// The registry never tracks flow rates itself; manual mint and burn read
/// them from the accounting contract at call time. A rate of zero means
/// the flow does not currently exist.
pub fn get_flow<S: HasStateApi>(
    host: &impl HasHost<State<S>>,
    cfa: &ContractAddress,
    flow: &FlowKey,
) -> ContractResult<FlowInfo> {
    let params = to_bytes(flow);

    let response = host
        .invoke_contract_raw_read_only(
            cfa,
            Parameter(params.as_slice()),
            EntrypointName::new_unchecked(GET_FLOW_ENTRYPOINT),
            Amount::zero(),
        )
        .map_err(handle_call_error)?;

    match response {
        Some(mut bytes) => {
            FlowInfo::deserial(&mut bytes).map_err(|_| CustomContractError::Incompatible.into())
        }
        None => Err(CustomContractError::Incompatible.into()),
    }
}

fn handle_call_error<T>(error: CallContractError<T>) -> ContractError {
    match error {
        CallContractError::MissingContract | CallContractError::MissingEntrypoint => {
            CustomContractError::Incompatible.into()
        }
        _ => CustomContractError::InvokeContractError.into(),
    }
}
