use crate::{constants::*, error::CoinflipError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct WithdrawFunds<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [HOUSE_SEED.as_bytes()],
        bump = house.bump
    )]
    pub house: Account<'info, House>,
}

impl<'info> WithdrawFunds<'info> {
    pub fn validate(&self) -> Result<()> {
        require_keys_eq!(
            self.signer.key(),
            self.house.owner,
            CoinflipError::NotOwner
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<WithdrawFunds>) -> Result<u64> {
    // validate
    ctx.accounts.validate()?;

    let house_info = ctx.accounts.house.to_account_info();
    let balance = house_balance(&house_info)?;
    let amount = withdrawal_amount(&ctx.accounts.house, &ctx.accounts.signer.key(), balance)?;

    // transfer the unreserved balance to the owner
    if amount > 0 {
        transfer_from_house(&house_info, &ctx.accounts.signer.to_account_info(), amount)?;
    }

    emit!(FundsWithdrawn {
        owner: ctx.accounts.signer.key(),
        amount,
        remaining_exposure: ctx.accounts.house.total_exposure,
    });

    Ok(amount)
}
