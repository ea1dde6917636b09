use crate::{constants::*, error::CoinflipError};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct House {
    // --- Authorities ---
    pub owner: Pubkey,        // The only key allowed to withdraw or reconfigure.
    pub oracle_queue: Pubkey, // VRF queue that receives randomness requests and fees.

    // --- Fee Config ---
    pub oracle_fee: u64, // Lamports forwarded to the oracle on every flip.

    // --- Exposure ---
    pub total_exposure: u64, // Sum of stakes over all pending bets.
    pub pending_bets: u64,   // Number of pending bets.

    // --- Global State ---
    pub status: HouseStatus,
    pub request_counter: u64, // Last issued request id. Ids start at 1 and are never reused.
    pub total_wagered: u64,
    pub total_paid_out: u64,

    // --- Metadata ---
    pub version: u8,
    pub bump: u8,
}

impl House {
    /// Lamports that must stay in the house so every pending bet can be paid
    /// even if all of them win.
    pub fn reserved_liquidity(&self) -> Result<u64> {
        self.total_exposure
            .checked_mul(PAYOUT_MULTIPLIER)
            .ok_or(CoinflipError::Overflow.into())
    }

    /// Portion of `balance` not promised to pending bets.
    pub fn withdrawable(&self, balance: u64) -> Result<u64> {
        Ok(balance.saturating_sub(self.reserved_liquidity()?))
    }

    pub fn next_request_id(&mut self) -> Result<u64> {
        self.request_counter = self
            .request_counter
            .checked_add(1)
            .ok_or(CoinflipError::Overflow)?;
        Ok(self.request_counter)
    }

    pub fn reserve(&mut self, stake: u64) -> Result<()> {
        self.total_exposure = self
            .total_exposure
            .checked_add(stake)
            .ok_or(CoinflipError::Overflow)?;
        self.pending_bets = self
            .pending_bets
            .checked_add(1)
            .ok_or(CoinflipError::Overflow)?;
        self.total_wagered = self
            .total_wagered
            .checked_add(stake)
            .ok_or(CoinflipError::Overflow)?;
        Ok(())
    }

    pub fn release(&mut self, stake: u64) -> Result<()> {
        self.total_exposure = self
            .total_exposure
            .checked_sub(stake)
            .ok_or(CoinflipError::Underflow)?;
        self.pending_bets = self
            .pending_bets
            .checked_sub(1)
            .ok_or(CoinflipError::Underflow)?;
        Ok(())
    }

    pub fn record_payout(&mut self, payout: u64) -> Result<()> {
        self.total_paid_out = self
            .total_paid_out
            .checked_add(payout)
            .ok_or(CoinflipError::Overflow)?;
        Ok(())
    }
}
