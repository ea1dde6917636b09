use crate::constants::*;
use anchor_lang::prelude::*;

/// Seeds: [b"bet", player.key(), nonce.to_le_bytes()]
/// Lives only while the bet is pending; settlement closes it.
#[account]
#[derive(InitSpace, Debug)]
pub struct Bet {
    // --- Identify ---
    pub request_id: u64, // Issued from the house counter, never reused.
    pub player: Pubkey,
    pub nonce: u64, // Player's bet count when the bet was opened.

    // --- Bet Info ---
    pub stake: u64,          // Lamports at risk, oracle fee excluded.
    pub side: CoinSide,      // The side the player called.
    pub user_seed: [u8; 32], // Caller seed forwarded to the oracle.

    // --- State ---
    pub status: BetStatus,

    // --- Metadata ---
    pub created_at: i64,
    pub bump: u8,
}

impl Bet {
    pub fn pda(player: &Pubkey, nonce: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[BET_SEED.as_bytes(), player.as_ref(), &nonce.to_le_bytes()],
            &crate::ID,
        )
    }
}
