use crate::{constants::*, error::CoinflipError};
use anchor_lang::prelude::*;

/// Reduces 32 bytes of VRF output, read as a big-endian 256-bit integer,
/// to a roll in `1..=ROLL_RANGE`.
pub fn roll_from_randomness(randomness: &[u8; 32]) -> u8 {
    let range = ROLL_RANGE as u32;
    let remainder = randomness
        .iter()
        .fold(0u32, |acc, byte| (acc * 256 + *byte as u32) % range);

    remainder as u8 + 1
}

pub fn side_for_roll(roll: u8) -> CoinSide {
    if roll > HEADS_THRESHOLD {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}

pub fn payout_for_stake(stake: u64) -> Result<u64> {
    stake
        .checked_mul(PAYOUT_MULTIPLIER)
        .ok_or(CoinflipError::Overflow.into())
}
