use anchor_lang::prelude::*;

#[event]
pub struct FundsWithdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub remaining_exposure: u64,
}
