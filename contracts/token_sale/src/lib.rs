#![no_std]

mod contract;
mod distribution;
mod errors;
mod events;
mod ledger;
pub mod math;
pub mod merkle;
mod settlement;
mod storage;
mod types;
mod vesting;


pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::{Error, ErrorKind};
pub use types::*;
