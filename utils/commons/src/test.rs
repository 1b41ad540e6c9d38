//! Support for unit testing contracts against mocked entrypoints of other
//! contracts. This module is compiled unconditionally so that dependent
//! contract crates can use the helpers from their own test modules.

use concordium_std::test_infrastructure::MockFn;
use concordium_std::*;

/// Mock entrypoint that checks that the parameter parses as `D` and answers
/// with a fixed return value.
pub fn parse_and_ok_mock<D: Deserial, S>(
    return_value: impl Clone + Serial + 'static,
) -> MockFn<S> {
    MockFn::new(move |parameter, _amount, _balance, _state| {
        D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
        Ok((false, Some(return_value.clone())))
    })
}

/// Mock entrypoint that additionally asserts a predicate on the parsed
/// parameter before answering.
pub fn parse_and_check_mock<D: Deserial, S>(
    check: impl Fn(&D) -> bool + 'static,
    return_value: impl Clone + Serial + 'static,
) -> MockFn<S> {
    MockFn::new(move |parameter, _, _, _state| {
        let value =
            D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
        if !check(&value) {
            return Err(CallContractError::Trap);
        };
        Ok((false, Some(return_value.clone())))
    })
}
