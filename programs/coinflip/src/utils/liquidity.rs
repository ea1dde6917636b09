use crate::{constants::*, error::CoinflipError};
use anchor_lang::prelude::*;

/// Lamports the house can spend: everything above its rent-exempt minimum.
pub fn spendable_balance(lamports: u64, rent_exempt_minimum: u64) -> u64 {
    lamports.saturating_sub(rent_exempt_minimum)
}

pub fn house_balance(house: &AccountInfo) -> Result<u64> {
    Ok(balance_above_rent(house, &Rent::get()?))
}

pub fn balance_above_rent(house: &AccountInfo, rent: &Rent) -> u64 {
    spendable_balance(house.lamports(), rent.minimum_balance(house.data_len()))
}

/// Moves lamports out of the program-owned house account.
pub fn transfer_from_house(house: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    let mut house_lamports = house.try_borrow_mut_lamports()?;
    let remaining = (**house_lamports)
        .checked_sub(amount)
        .ok_or(CoinflipError::PayoutFailed)?;
    **house_lamports = remaining;

    let mut to_lamports = to.try_borrow_mut_lamports()?;
    let credited = (**to_lamports)
        .checked_add(amount)
        .ok_or(CoinflipError::Overflow)?;
    **to_lamports = credited;

    Ok(())
}

/// Liquidity left for a new bet. `balance` is read before the new stake is
/// credited; every pending bet keeps `PAYOUT_MULTIPLIER * stake` out of reach.
pub fn available_liquidity(balance: u64, total_exposure: u64) -> Result<u64> {
    let reserved = total_exposure
        .checked_mul(PAYOUT_MULTIPLIER)
        .ok_or(CoinflipError::Overflow)?;
    Ok(balance.saturating_sub(reserved))
}

pub fn ensure_liquidity(balance: u64, total_exposure: u64, stake: u64) -> Result<()> {
    require!(
        available_liquidity(balance, total_exposure)? >= stake,
        CoinflipError::InsufficientLiquidity
    );
    Ok(())
}
