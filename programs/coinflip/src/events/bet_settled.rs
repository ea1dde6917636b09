use anchor_lang::prelude::*;

#[event]
pub struct Won {
    pub player: Pubkey,
    pub request_id: u64,
    pub roll: u8,
    pub stake: u64,
}

#[event]
pub struct Lost {
    pub player: Pubkey,
    pub request_id: u64,
    pub roll: u8,
    pub stake: u64,
}
