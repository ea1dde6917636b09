use anchor_lang::prelude::*;

#[event]
pub struct ConfigUpdated {
    pub owner: Pubkey,
    pub oracle_queue: Pubkey,
    pub oracle_fee: u64,
    pub version: u8,
}
