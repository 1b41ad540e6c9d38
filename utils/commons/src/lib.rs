#![cfg_attr(not(feature = "std"), no_std)]

use concordium_cis2::*;
use concordium_std::*;

mod errors;
mod structs;
pub mod test;
mod types;

pub use self::{errors::*, structs::*, types::*};
