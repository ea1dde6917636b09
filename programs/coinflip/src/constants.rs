use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const HOUSE_SEED: &str = "house";
#[constant]
pub const PLAYER_SEED: &str = "player";
#[constant]
pub const BET_SEED: &str = "bet";

pub const DISCRIMINATOR_SIZE: usize = 8;

/// A winning bet is paid `stake * PAYOUT_MULTIPLIER`.
#[constant]
pub const PAYOUT_MULTIPLIER: u64 = 2;

/// Rolls land in `1..=ROLL_RANGE`; anything above `HEADS_THRESHOLD` is Heads.
pub const ROLL_RANGE: u8 = 100;
pub const HEADS_THRESHOLD: u8 = 50;

/// Enum for house status flags
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum HouseStatus {
    Active,
    Paused,
}

/// Enum for the two faces a player can call
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum CoinSide {
    Heads,
    Tails,
}

/// Enum for bet status
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum BetStatus {
    Pending,
    Won,
    Lost,
}

impl BetStatus {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, BetStatus::Pending)
    }
}
