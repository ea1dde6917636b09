use anchor_lang::prelude::*;

#[event]
pub struct HouseFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub balance: u64,
}
