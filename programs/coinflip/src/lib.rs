#![allow(unexpected_cfgs)]
#![allow(deprecated)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("ELVoe2MAnn4Rr6UUYg8GpfnDsYgKwkwcwTam1ovkj9Y9");

#[program]
pub mod coinflip {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, oracle_queue: Pubkey, oracle_fee: u64) -> Result<()> {
        initialize::handler(ctx, oracle_queue, oracle_fee)
    }

    pub fn fund_house(ctx: Context<FundHouse>, amount: u64) -> Result<()> {
        fund_house::handler(ctx, amount)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_oracle_fee: Option<u64>,
        new_oracle_queue: Option<Pubkey>,
    ) -> Result<()> {
        update_config::handler(ctx, new_oracle_fee, new_oracle_queue)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        transfer_ownership::handler(ctx, new_owner)
    }

    pub fn pause_program(ctx: Context<PauseProgram>) -> Result<()> {
        pause_program::handler(ctx)
    }

    pub fn unpause_program(ctx: Context<UnpauseProgram>) -> Result<()> {
        unpause_program::handler(ctx)
    }

    pub fn flip_coin(
        ctx: Context<FlipCoin>,
        user_seed: [u8; 32],
        payment: u64,
        side: CoinSide,
    ) -> Result<u64> {
        flip_coin::handler(ctx, user_seed, payment, side)
    }

    pub fn callback_flip(ctx: Context<CallbackFlip>, randomness: [u8; 32]) -> Result<()> {
        callback_flip::handler(ctx, randomness)
    }

    pub fn trigger_callback(
        ctx: Context<TriggerCallback>,
        request_id: u64,
        randomness: [u8; 32],
    ) -> Result<()> {
        trigger_callback::handler(ctx, request_id, randomness)
    }

    pub fn withdraw_funds(ctx: Context<WithdrawFunds>) -> Result<u64> {
        withdraw_funds::handler(ctx)
    }
}
