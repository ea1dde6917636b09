use crate::{constants::*, error::CoinflipError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [HOUSE_SEED.as_bytes()],
        bump = house.bump
    )]
    pub house: Account<'info, House>,
}

impl<'info> UpdateConfig<'info> {
    pub fn validate(&self) -> Result<()> {
        require_keys_eq!(
            self.signer.key(),
            self.house.owner,
            CoinflipError::NotOwner
        );

        Ok(())
    }
}

pub fn handler(
    ctx: Context<UpdateConfig>,
    new_oracle_fee: Option<u64>,
    new_oracle_queue: Option<Pubkey>,
) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let house = &mut ctx.accounts.house;

    // set fields
    if let Some(new_oracle_fee) = new_oracle_fee {
        house.oracle_fee = new_oracle_fee;
    }
    if let Some(new_oracle_queue) = new_oracle_queue {
        house.oracle_queue = new_oracle_queue;
    }

    // update config version
    house.version = house
        .version
        .checked_add(1)
        .ok_or(CoinflipError::Overflow)?;

    emit!(ConfigUpdated {
        owner: house.owner,
        oracle_queue: house.oracle_queue,
        oracle_fee: house.oracle_fee,
        version: house.version,
    });

    Ok(())
}
