use crate::{constants::*, error::CoinflipError, state::*, utils::*};
use anchor_lang::prelude::*;

/// Outcome of a settled bet. Lamports are moved by the caller after the
/// ledger has been updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub request_id: u64,
    pub player: Pubkey,
    pub stake: u64,
    pub roll: u8,
    pub outcome: CoinSide,
    pub payout: u64,
}

impl Settlement {
    pub fn won(&self) -> bool {
        self.payout > 0
    }
}

/// Checks a flip against the committed house state and returns the stake.
/// `balance` is the house balance before the new stake is credited.
pub fn validate_acceptance(
    house: &House,
    player_state: &PlayerState,
    balance: u64,
    payment: u64,
) -> Result<u64> {
    require!(
        house.status == HouseStatus::Active,
        CoinflipError::HousePaused
    );

    let stake = split_payment(payment, house.oracle_fee)?;

    require!(
        !player_state.has_pending(),
        CoinflipError::ResolutionInProgress
    );

    ensure_liquidity(balance, house.total_exposure, stake)?;

    Ok(stake)
}

/// Records an accepted bet: issues the request id, fills the player's slot
/// and reserves the stake, all in one step.
#[allow(clippy::too_many_arguments)]
pub fn open_bet(
    house: &mut House,
    player_state: &mut PlayerState,
    bet: &mut Bet,
    player: Pubkey,
    stake: u64,
    side: CoinSide,
    user_seed: [u8; 32],
    now: i64,
    bump: u8,
) -> Result<u64> {
    require!(stake > 0, CoinflipError::InvalidPayment);

    // the bet address is derived from the count before this bet
    let nonce = player_state.total_bets;
    let request_id = house.next_request_id()?;
    player_state.open(request_id)?;
    house.reserve(stake)?;

    bet.request_id = request_id;
    bet.player = player;
    bet.nonce = nonce;
    bet.stake = stake;
    bet.side = side;
    bet.user_seed = user_seed;
    bet.status = BetStatus::Pending;
    bet.created_at = now;
    bet.bump = bump;

    Ok(request_id)
}

/// Resolves a pending bet with the oracle's randomness. Fails without
/// touching any state if the bet is not pending for this player or the house
/// cannot pay a win.
pub fn settle_bet(
    house: &mut House,
    player_state: &mut PlayerState,
    bet: &mut Bet,
    balance: u64,
    randomness: &[u8; 32],
) -> Result<Settlement> {
    require!(!bet.status.is_resolved(), CoinflipError::UnknownRequest);
    require!(
        player_state.pending_request == Some(bet.request_id),
        CoinflipError::UnknownRequest
    );
    require_keys_eq!(
        player_state.player,
        bet.player,
        CoinflipError::PlayerMismatch
    );

    let roll = roll_from_randomness(randomness);
    let outcome = side_for_roll(roll);
    let payout = if outcome == bet.side {
        payout_for_stake(bet.stake)?
    } else {
        0
    };
    // only reachable if the double reserve was bypassed
    require!(balance >= payout, CoinflipError::PayoutFailed);

    house.release(bet.stake)?;
    house.record_payout(payout)?;
    player_state.close(bet.request_id, payout > 0)?;

    bet.status = if payout > 0 {
        BetStatus::Won
    } else {
        BetStatus::Lost
    };

    Ok(Settlement {
        request_id: bet.request_id,
        player: bet.player,
        stake: bet.stake,
        roll,
        outcome,
        payout,
    })
}

/// Amount the owner may take out of the house right now.
pub fn withdrawal_amount(house: &House, caller: &Pubkey, balance: u64) -> Result<u64> {
    require_keys_eq!(*caller, house.owner, CoinflipError::NotOwner);
    house.withdrawable(balance)
}
