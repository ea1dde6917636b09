use crate::constants::*;
use anchor_lang::prelude::*;

#[event]
pub struct BetAccepted {
    pub player: Pubkey,
    pub request_id: u64,
    pub user_seed: [u8; 32],
    pub stake: u64,
    pub side: CoinSide,
}
