use anchor_lang::prelude::*;

#[event]
pub struct HouseInitialized {
    pub owner: Pubkey,
    pub house: Pubkey,
    pub oracle_queue: Pubkey,
    pub oracle_fee: u64,
}
