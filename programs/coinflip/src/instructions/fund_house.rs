use crate::{constants::*, error::CoinflipError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

#[derive(Accounts)]
pub struct FundHouse<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [HOUSE_SEED.as_bytes()],
        bump = house.bump
    )]
    pub house: Account<'info, House>,

    pub system_program: Program<'info, System>,
}

impl<'info> FundHouse<'info> {
    pub fn validate(&self, amount: u64) -> Result<()> {
        require!(amount > 0, CoinflipError::InvalidAmount);

        Ok(())
    }
}

pub fn handler(ctx: Context<FundHouse>, amount: u64) -> Result<()> {
    // validate
    ctx.accounts.validate(amount)?;

    // transfer from signer to house
    let transfer_accounts = Transfer {
        from: ctx.accounts.signer.to_account_info(),
        to: ctx.accounts.house.to_account_info(),
    };
    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        transfer_accounts,
    );
    transfer(transfer_ctx, amount)?;

    let balance = house_balance(&ctx.accounts.house.to_account_info())?;

    // emit event
    emit!(HouseFunded {
        funder: ctx.accounts.signer.key(),
        amount,
        balance,
    });

    Ok(())
}
