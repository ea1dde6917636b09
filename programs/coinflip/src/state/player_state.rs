use crate::error::CoinflipError;
use anchor_lang::prelude::*;

/// Per-player wager slot.
/// Seeds: [b"player", player.key()]
#[account]
#[derive(InitSpace)]
pub struct PlayerState {
    pub player: Pubkey,
    pub pending_request: Option<u64>, // Set while the player's bet awaits the oracle.
    pub total_bets: u64,
    pub total_wins: u64,
    pub bump: u8,
}

impl PlayerState {
    pub fn has_pending(&self) -> bool {
        self.pending_request.is_some()
    }

    pub fn open(&mut self, request_id: u64) -> Result<()> {
        require!(!self.has_pending(), CoinflipError::ResolutionInProgress);
        self.pending_request = Some(request_id);
        self.total_bets = self
            .total_bets
            .checked_add(1)
            .ok_or(CoinflipError::Overflow)?;
        Ok(())
    }

    pub fn close(&mut self, request_id: u64, won: bool) -> Result<()> {
        require!(
            self.pending_request == Some(request_id),
            CoinflipError::UnknownRequest
        );
        self.pending_request = None;
        if won {
            self.total_wins = self
                .total_wins
                .checked_add(1)
                .ok_or(CoinflipError::Overflow)?;
        }
        Ok(())
    }
}
