use crate::{constants::*, events::*, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use ephemeral_vrf_sdk::anchor::vrf;
use ephemeral_vrf_sdk::instructions::{create_request_randomness_ix, RequestRandomnessParams};
use ephemeral_vrf_sdk::types::SerializableAccountMeta;

#[vrf]
#[derive(Accounts)]
pub struct FlipCoin<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [HOUSE_SEED.as_bytes()],
        bump = house.bump
    )]
    pub house: Account<'info, House>,

    #[account(
        init_if_needed,
        payer = player,
        space = DISCRIMINATOR_SIZE + PlayerState::INIT_SPACE,
        seeds = [PLAYER_SEED.as_bytes(), player.key().as_ref()],
        bump
    )]
    pub player_state: Account<'info, PlayerState>,

    #[account(
        init,
        payer = player,
        space = DISCRIMINATOR_SIZE + Bet::INIT_SPACE,
        seeds = [
            BET_SEED.as_bytes(),
            player.key().as_ref(),
            &player_state.total_bets.to_le_bytes()
        ],
        bump
    )]
    pub bet: Account<'info, Bet>,

    /// CHECK: MagicBlock oracle queue configured on the house
    #[account(mut, address = house.oracle_queue)]
    pub oracle_queue: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> FlipCoin<'info> {
    /// Returns the stake carried by `payment`.
    pub fn validate(&self, payment: u64) -> Result<u64> {
        // balance before this flip's stake lands in the house
        let balance = house_balance(&self.house.to_account_info())?;

        validate_acceptance(&self.house, &self.player_state, balance, payment)
    }
}

pub fn handler(
    ctx: Context<FlipCoin>,
    user_seed: [u8; 32],
    payment: u64,
    side: CoinSide,
) -> Result<u64> {
    // validate
    let stake = ctx.accounts.validate(payment)?;

    let fee = ctx.accounts.house.oracle_fee;
    let player_key = ctx.accounts.player.key();

    // first flip from this player
    if ctx.accounts.player_state.player == Pubkey::default() {
        ctx.accounts.player_state.player = player_key;
        ctx.accounts.player_state.bump = ctx.bumps.player_state;
    }

    let request_id = open_bet(
        &mut ctx.accounts.house,
        &mut ctx.accounts.player_state,
        &mut ctx.accounts.bet,
        player_key,
        stake,
        side,
        user_seed,
        Clock::get()?.unix_timestamp,
        ctx.bumps.bet,
    )?;

    // forward the fee to the oracle
    if fee > 0 {
        let fee_accounts = Transfer {
            from: ctx.accounts.player.to_account_info(),
            to: ctx.accounts.oracle_queue.to_account_info(),
        };
        transfer(
            CpiContext::new(ctx.accounts.system_program.to_account_info(), fee_accounts),
            fee,
        )?;
    }

    // move the stake into the house
    let stake_accounts = Transfer {
        from: ctx.accounts.player.to_account_info(),
        to: ctx.accounts.house.to_account_info(),
    };
    transfer(
        CpiContext::new(ctx.accounts.system_program.to_account_info(), stake_accounts),
        stake,
    )?;

    // request randomness; the callback receives the accounts below in order
    let ix = create_request_randomness_ix(RequestRandomnessParams {
        payer: player_key,
        oracle_queue: ctx.accounts.oracle_queue.key(),
        callback_program_id: crate::ID,
        callback_discriminator: crate::instruction::CallbackFlip::DISCRIMINATOR.to_vec(),
        caller_seed: user_seed,
        accounts_metas: Some(vec![
            SerializableAccountMeta {
                pubkey: ctx.accounts.house.key(),
                is_signer: false,
                is_writable: true,
            },
            SerializableAccountMeta {
                pubkey: ctx.accounts.player_state.key(),
                is_signer: false,
                is_writable: true,
            },
            SerializableAccountMeta {
                pubkey: ctx.accounts.bet.key(),
                is_signer: false,
                is_writable: true,
            },
            SerializableAccountMeta {
                pubkey: player_key,
                is_signer: false,
                is_writable: true,
            },
        ]),
        ..Default::default()
    });
    ctx.accounts
        .invoke_signed_vrf(&ctx.accounts.player.to_account_info(), &ix)?;

    emit!(BetAccepted {
        player: player_key,
        request_id,
        user_seed,
        stake,
        side,
    });

    msg!(
        "Flip accepted: request {} | {} lamports on {:?} | exposure {}",
        request_id,
        stake,
        side,
        ctx.accounts.house.total_exposure,
    );

    Ok(request_id)
}
