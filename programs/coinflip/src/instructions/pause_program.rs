use crate::{constants::*, error::CoinflipError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct PauseProgram<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [HOUSE_SEED.as_bytes()],
        bump = house.bump
    )]
    pub house: Account<'info, House>,
}

impl<'info> PauseProgram<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.house.status != HouseStatus::Paused,
            CoinflipError::AlreadyPaused
        );

        require_keys_eq!(
            self.signer.key(),
            self.house.owner,
            CoinflipError::NotOwner
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<PauseProgram>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let house = &mut ctx.accounts.house;

    // set fields
    house.status = HouseStatus::Paused;

    // emit event
    emit!(ProgramPaused {
        owner: ctx.accounts.signer.key(),
        house: house.key(),
    });

    Ok(())
}
