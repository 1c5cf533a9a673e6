//! It exposes the errors, types and event tags shared by the Mintdrop
//! contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{constants::*, errors::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod errors;
mod types;
