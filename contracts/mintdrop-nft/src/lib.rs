//! An NFT minting storefront smart contract.
//!
//! # Description
//! An instance of this contract sells a single capped collection. The
//! collection parameters are fixed at instantiation: name, symbol, price per
//! token, maximum supply, the time at which minting opens and the metadata
//! base URI. Token ids are assigned sequentially starting at one and are
//! never reused.
//!
//! Anyone on the whitelist can mint through the payable `mint` function once
//! the minting window is open, paying the unit cost per token. The instance
//! owner manages the whitelist, can pause and resume minting, and withdraws
//! the accumulated balance. Tokens are never burned and there is no transfer
//! functionality, the storefront only mints.
//!
//! Note: The word 'address' refers to either an account address or a
//! contract address.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, events::*, external::*, helper::*, structs::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod contract;
mod events;
mod external;
mod helper;
mod impls;
mod structs;
