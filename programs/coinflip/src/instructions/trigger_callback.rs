use crate::instructions::callback_flip::settle_request;
use crate::{constants::*, error::CoinflipError, state::*};
use anchor_lang::prelude::*;

/// Drives settlement with a chosen request id and randomness. Only usable when
/// the program is built with the `debug-callback` feature.
#[derive(Accounts)]
pub struct TriggerCallback<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [HOUSE_SEED.as_bytes()],
        bump = house.bump
    )]
    pub house: Account<'info, House>,

    #[account(
        mut,
        seeds = [PLAYER_SEED.as_bytes(), player.key().as_ref()],
        bump = player_state.bump
    )]
    pub player_state: Account<'info, PlayerState>,

    /// CHECK: loaded by `load_bet`, must carry `request_id`
    #[account(mut)]
    pub bet: UncheckedAccount<'info>,

    /// CHECK: payout receiver, compared with the bet's player
    #[account(mut)]
    pub player: UncheckedAccount<'info>,
}

impl<'info> TriggerCallback<'info> {
    pub fn validate(&self) -> Result<()> {
        debug_callback_enabled()
    }
}

pub fn debug_callback_enabled() -> Result<()> {
    require!(
        cfg!(feature = "debug-callback"),
        CoinflipError::DebugCallbackDisabled
    );

    Ok(())
}

pub fn handler(ctx: Context<TriggerCallback>, request_id: u64, randomness: [u8; 32]) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let rent = Rent::get()?;
    let house_info = ctx.accounts.house.to_account_info();
    let bet_info = ctx.accounts.bet.to_account_info();
    let player_info = ctx.accounts.player.to_account_info();

    settle_request(
        &mut ctx.accounts.house,
        &house_info,
        &mut ctx.accounts.player_state,
        &bet_info,
        &player_info,
        Some(request_id),
        &randomness,
        &rent,
    )?;

    msg!("Debug callback by {}", ctx.accounts.signer.key());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "debug-callback"))]
    #[test]
    fn test_debug_callback_refused_by_default() {
        assert_eq!(
            debug_callback_enabled().unwrap_err(),
            anchor_lang::error::Error::from(CoinflipError::DebugCallbackDisabled)
        );
    }

    #[cfg(feature = "debug-callback")]
    #[test]
    fn test_debug_callback_allowed_when_built_in() {
        assert!(debug_callback_enabled().is_ok());
    }
}
