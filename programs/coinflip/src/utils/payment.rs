use crate::error::CoinflipError;
use anchor_lang::prelude::*;

/// Splits a flip payment into the oracle fee and the stake.
/// The payment must strictly exceed the fee so every bet carries a stake.
pub fn split_payment(payment: u64, oracle_fee: u64) -> Result<u64> {
    require!(payment > oracle_fee, CoinflipError::InvalidPayment);

    let stake = payment
        .checked_sub(oracle_fee)
        .ok_or(CoinflipError::Underflow)?;

    Ok(stake)
}
