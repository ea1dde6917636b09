use anchor_lang::prelude::*;

#[error_code]
pub enum CoinflipError {
    // General & Admin Errors (0x1000 - 0x1999)
    #[msg("Only the house owner can perform this action")]
    NotOwner = 0x1000,

    #[msg("House is paused, no new bets are accepted")]
    HousePaused = 0x1001,

    #[msg("House is already paused")]
    AlreadyPaused = 0x1002,

    #[msg("House is already active")]
    AlreadyActive = 0x1003,

    #[msg("New owner must differ from the current owner")]
    InvalidNewOwner = 0x1004,

    #[msg("Debug callback is not compiled into this build")]
    DebugCallbackDisabled = 0x1005,

    // Betting Errors (0x2000 - 0x2999)
    #[msg("Payment must exceed the oracle fee")]
    InvalidPayment = 0x2000,

    #[msg("Player already has a bet awaiting resolution")]
    ResolutionInProgress = 0x2001,

    #[msg("House cannot cover this bet on top of pending bets")]
    InsufficientLiquidity = 0x2002,

    #[msg("Amount must be greater than 0")]
    InvalidAmount = 0x2003,

    // Settlement Errors (0x3000 - 0x3999)
    #[msg("No pending bet matches this request")]
    UnknownRequest = 0x3000,

    #[msg("Callback did not come from the randomness oracle")]
    UnauthorizedCaller = 0x3001,

    #[msg("House balance cannot cover the payout")]
    PayoutFailed = 0x3002,

    #[msg("Player account does not match the bet")]
    PlayerMismatch = 0x3003,

    // Math Errors (0x4000 - 0x4999)
    #[msg("Arithmetic overflow")]
    Overflow = 0x4000,

    #[msg("Arithmetic underflow")]
    Underflow = 0x4001,
}
