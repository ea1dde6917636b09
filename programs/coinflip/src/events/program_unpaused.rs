use anchor_lang::prelude::*;

#[event]
pub struct ProgramUnpaused {
    pub owner: Pubkey,
    pub house: Pubkey,
}
