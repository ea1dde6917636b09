use crate::{constants::*, error::CoinflipError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [HOUSE_SEED.as_bytes()],
        bump = house.bump
    )]
    pub house: Account<'info, House>,
}

impl<'info> TransferOwnership<'info> {
    pub fn validate(&self, new_owner: Pubkey) -> Result<()> {
        require_keys_eq!(
            self.signer.key(),
            self.house.owner,
            CoinflipError::NotOwner
        );

        require_keys_neq!(
            new_owner,
            self.house.owner,
            CoinflipError::InvalidNewOwner
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    // validate
    ctx.accounts.validate(new_owner)?;

    let house = &mut ctx.accounts.house;
    let previous_owner = house.owner;

    // set fields
    house.owner = new_owner;

    // emit event
    emit!(OwnershipTransferred {
        previous_owner,
        new_owner,
    });

    msg!("House ownership: {} -> {}", previous_owner, new_owner);

    Ok(())
}
