//! An NFT contract representing the payment streams of an external
//! accounting contract.
//!
//! # Description
//! Every token stands for one flow: a continuous payment stream between a
//! sender and a receiver of a given asset, tracked by the accounting
//! contract. The accounting contract notifies this contract through hook
//! calls when flows start and stop, and the registry mints or burns the
//! matching token. Tokens are always owned by the flow receiver, no matter
//! whether the flow was opened by the sender itself or by a delegated
//! operator.
//!
//! Hook delivery is not guaranteed. When a notification was missed, anyone
//! can reconcile the registry through the manual `mint` and `burn` entry
//! points, which check the current flow state against the accounting
//! contract before touching the registry. A token minted this way has no
//! recorded start date, since the true creation time of the flow is
//! unknown.
#![cfg_attr(not(feature = "std"), no_std)]

mod cfa;
mod constants;
mod contract;
mod external;
mod helper;
mod state;
