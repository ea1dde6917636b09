use crate::{constants::*, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + House::INIT_SPACE,
        seeds = [HOUSE_SEED.as_bytes()],
        bump
    )]
    pub house: Account<'info, House>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>, oracle_queue: Pubkey, oracle_fee: u64) -> Result<()> {
    let house = &mut ctx.accounts.house;

    // set fields
    house.owner = ctx.accounts.signer.key();
    house.oracle_queue = oracle_queue;
    house.oracle_fee = oracle_fee;
    house.total_exposure = 0;
    house.pending_bets = 0;
    house.status = HouseStatus::Active;
    house.request_counter = 0;
    house.total_wagered = 0;
    house.total_paid_out = 0;
    house.version = 0;
    house.bump = ctx.bumps.house;

    // emit event
    emit!(HouseInitialized {
        owner: house.owner,
        house: house.key(),
        oracle_queue,
        oracle_fee,
    });

    Ok(())
}
