use anchor_lang::prelude::*;

#[event]
pub struct ProgramPaused {
    pub owner: Pubkey,
    pub house: Pubkey,
}
