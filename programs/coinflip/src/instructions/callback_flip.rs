use crate::{constants::*, error::CoinflipError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_lang::system_program;

// =============================================================
//  Callback: VRF delivers randomness, settle the bet
// =============================================================

#[derive(Accounts)]
pub struct CallbackFlip<'info> {
    /// MagicBlock VRF program identity, only the oracle can sign as it
    #[account(
        address = ephemeral_vrf_sdk::consts::VRF_PROGRAM_IDENTITY @ CoinflipError::UnauthorizedCaller
    )]
    pub vrf_program_identity: Signer<'info>,

    #[account(
        mut,
        seeds = [HOUSE_SEED.as_bytes()],
        bump = house.bump
    )]
    pub house: Account<'info, House>,

    #[account(
        mut,
        seeds = [PLAYER_SEED.as_bytes(), player.key().as_ref()],
        bump = player_state.bump
    )]
    pub player_state: Account<'info, PlayerState>,

    /// CHECK: loaded by `load_bet` so unknown or settled requests map to UnknownRequest
    #[account(mut)]
    pub bet: UncheckedAccount<'info>,

    /// CHECK: payout receiver, compared with the bet's player
    #[account(mut)]
    pub player: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<CallbackFlip>, randomness: [u8; 32]) -> Result<()> {
    let rent = Rent::get()?;
    let house_info = ctx.accounts.house.to_account_info();
    let bet_info = ctx.accounts.bet.to_account_info();
    let player_info = ctx.accounts.player.to_account_info();

    settle_request(
        &mut ctx.accounts.house,
        &house_info,
        &mut ctx.accounts.player_state,
        &bet_info,
        &player_info,
        None,
        &randomness,
        &rent,
    )?;

    Ok(())
}

/// Reads a bet account, failing with UnknownRequest unless it is one of our
/// bets sitting at the address derived from its player and nonce.
pub fn load_bet(bet_info: &AccountInfo) -> Result<Bet> {
    require_keys_eq!(*bet_info.owner, crate::ID, CoinflipError::UnknownRequest);

    let data = bet_info.try_borrow_data()?;
    let bet = Bet::try_deserialize(&mut &data[..]).map_err(|_| CoinflipError::UnknownRequest)?;

    let (expected_pda, _) = Bet::pda(&bet.player, bet.nonce);
    require_keys_eq!(bet_info.key(), expected_pda, CoinflipError::UnknownRequest);

    Ok(bet)
}

/// Refunds the bet's rent to its player and hands the account back to the
/// system program.
pub fn close_bet(bet_info: &AccountInfo, player_info: &AccountInfo) -> Result<()> {
    let refund = bet_info.lamports();
    {
        let mut player_lamports = player_info.try_borrow_mut_lamports()?;
        let credited = (**player_lamports)
            .checked_add(refund)
            .ok_or(CoinflipError::Overflow)?;
        **player_lamports = credited;
    }
    **bet_info.try_borrow_mut_lamports()? = 0;

    bet_info.try_borrow_mut_data()?.fill(0);
    bet_info.assign(&system_program::ID);

    Ok(())
}

/// Settles the bet behind `bet_info`. Ledger and exposure are updated before
/// any lamports leave the house, then the bet account is closed. Any failure
/// aborts the whole instruction and the bet stays pending.
#[allow(clippy::too_many_arguments)]
pub fn settle_request(
    house: &mut House,
    house_info: &AccountInfo,
    player_state: &mut PlayerState,
    bet_info: &AccountInfo,
    player_info: &AccountInfo,
    expected_request: Option<u64>,
    randomness: &[u8; 32],
    rent: &Rent,
) -> Result<Settlement> {
    let mut bet = load_bet(bet_info)?;
    if let Some(request_id) = expected_request {
        require!(bet.request_id == request_id, CoinflipError::UnknownRequest);
    }
    require_keys_eq!(player_info.key(), bet.player, CoinflipError::PlayerMismatch);

    let balance = balance_above_rent(house_info, rent);
    let settlement = settle_bet(house, player_state, &mut bet, balance, randomness)?;

    if settlement.won() {
        transfer_from_house(house_info, player_info, settlement.payout)?;
    }
    close_bet(bet_info, player_info)?;

    if settlement.won() {
        emit!(Won {
            player: settlement.player,
            request_id: settlement.request_id,
            roll: settlement.roll,
            stake: settlement.stake,
        });
    } else {
        emit!(Lost {
            player: settlement.player,
            request_id: settlement.request_id,
            roll: settlement.roll,
            stake: settlement.stake,
        });
    }

    msg!(
        "Flip resolved: request {} | roll {} ({:?}) | payout {} | exposure {}",
        settlement.request_id,
        settlement.roll,
        settlement.outcome,
        settlement.payout,
        house.total_exposure,
    );

    Ok(settlement)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEE: u64 = 1_000;
    const STAKE: u64 = 10;
    const BET_RENT: u64 = 1_500_000;

    // Random values whose roll lands on each side.
    const HEADS: u8 = 80;
    const TAILS: u8 = 20;

    fn randomness_from(value: u8) -> [u8; 32] {
        let mut randomness = [0u8; 32];
        randomness[31] = value;
        randomness
    }

    fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: CoinflipError) {
        assert_eq!(
            result.unwrap_err(),
            anchor_lang::error::Error::from(expected)
        );
    }

    struct TestAccount {
        key: Pubkey,
        lamports: u64,
        data: Vec<u8>,
        owner: Pubkey,
    }

    impl TestAccount {
        fn info(&mut self) -> AccountInfo<'_> {
            AccountInfo::new(
                &self.key,
                false,
                true,
                &mut self.lamports,
                &mut self.data,
                &self.owner,
                false,
                0,
            )
        }
    }

    fn bet_account(bet: &Bet, key: Pubkey) -> TestAccount {
        let mut data = Vec::new();
        bet.try_serialize(&mut data).unwrap();
        data.resize(DISCRIMINATOR_SIZE + Bet::INIT_SPACE, 0);

        TestAccount {
            key,
            lamports: BET_RENT,
            data,
            owner: crate::ID,
        }
    }

    /// One pending bet of `STAKE` against a house holding `reserve` plus the
    /// stake above its rent-exempt minimum.
    struct Fixture {
        rent: Rent,
        house: House,
        house_account: TestAccount,
        player_state: PlayerState,
        bet_account: TestAccount,
        player_account: TestAccount,
    }

    /// Everything settlement may touch.
    type Snapshot = (Vec<u8>, u64, u64, u64, u64, u64, Option<u64>);

    impl Fixture {
        fn new(reserve: u64, side: CoinSide) -> Self {
            let rent = Rent::default();
            let player = Pubkey::new_unique();
            let house_space = DISCRIMINATOR_SIZE + House::INIT_SPACE;

            let mut house = House {
                owner: Pubkey::new_unique(),
                oracle_queue: Pubkey::new_unique(),
                oracle_fee: FEE,
                total_exposure: 0,
                pending_bets: 0,
                status: HouseStatus::Active,
                request_counter: 0,
                total_wagered: 0,
                total_paid_out: 0,
                version: 0,
                bump: 254,
            };
            let mut player_state = PlayerState {
                player,
                pending_request: None,
                total_bets: 0,
                total_wins: 0,
                bump: 255,
            };
            let mut bet = Bet {
                request_id: 0,
                player: Pubkey::default(),
                nonce: 0,
                stake: 0,
                side: CoinSide::Heads,
                user_seed: [0u8; 32],
                status: BetStatus::Pending,
                created_at: 0,
                bump: 0,
            };

            let (bet_key, bet_bump) = Bet::pda(&player, player_state.total_bets);
            open_bet(
                &mut house,
                &mut player_state,
                &mut bet,
                player,
                STAKE,
                side,
                [3u8; 32],
                1_700_000_000,
                bet_bump,
            )
            .unwrap();

            Self {
                house_account: TestAccount {
                    key: Pubkey::new_unique(),
                    lamports: rent.minimum_balance(house_space) + reserve + STAKE,
                    data: vec![0u8; house_space],
                    owner: crate::ID,
                },
                bet_account: bet_account(&bet, bet_key),
                player_account: TestAccount {
                    key: player,
                    lamports: 0,
                    data: Vec::new(),
                    owner: system_program::ID,
                },
                rent,
                house,
                player_state,
            }
        }

        fn settle(&mut self, expected_request: Option<u64>, value: u8) -> Result<Settlement> {
            let house_info = self.house_account.info();
            let bet_info = self.bet_account.info();
            let player_info = self.player_account.info();

            settle_request(
                &mut self.house,
                &house_info,
                &mut self.player_state,
                &bet_info,
                &player_info,
                expected_request,
                &randomness_from(value),
                &self.rent,
            )
        }

        fn snapshot(&self) -> Snapshot {
            (
                self.bet_account.data.clone(),
                self.bet_account.lamports,
                self.house_account.lamports,
                self.player_account.lamports,
                self.house.total_exposure,
                self.house.total_paid_out,
                self.player_state.pending_request,
            )
        }
    }

    #[test]
    fn test_load_bet_reads_pending_bet() {
        let mut fixture = Fixture::new(100, CoinSide::Heads);

        let bet = load_bet(&fixture.bet_account.info()).unwrap();
        assert_eq!(bet.request_id, 1);
        assert_eq!(bet.player, fixture.player_account.key);
        assert_eq!(bet.nonce, 0);
        assert_eq!(bet.stake, STAKE);
        assert_eq!(bet.status, BetStatus::Pending);
    }

    #[test]
    fn test_load_bet_rejects_foreign_owner() {
        let mut fixture = Fixture::new(100, CoinSide::Heads);
        fixture.bet_account.owner = Pubkey::new_unique();

        assert_error(
            load_bet(&fixture.bet_account.info()),
            CoinflipError::UnknownRequest,
        );
    }

    #[test]
    fn test_load_bet_rejects_wrong_address() {
        let mut fixture = Fixture::new(100, CoinSide::Heads);
        fixture.bet_account.key = Pubkey::new_unique();

        assert_error(
            load_bet(&fixture.bet_account.info()),
            CoinflipError::UnknownRequest,
        );
    }

    #[test]
    fn test_load_bet_rejects_other_account_types() {
        let mut fixture = Fixture::new(100, CoinSide::Heads);
        fixture.bet_account.data[0] ^= 0xff;

        assert_error(
            load_bet(&fixture.bet_account.info()),
            CoinflipError::UnknownRequest,
        );
    }

    #[test]
    fn test_load_bet_rejects_empty_account() {
        let mut fixture = Fixture::new(100, CoinSide::Heads);
        fixture.bet_account.data = Vec::new();

        assert_error(
            load_bet(&fixture.bet_account.info()),
            CoinflipError::UnknownRequest,
        );
    }

    #[test]
    fn test_win_pays_double_and_closes_bet() {
        let mut fixture = Fixture::new(100, CoinSide::Heads);
        let house_lamports = fixture.house_account.lamports;

        let settlement = fixture.settle(None, HEADS).unwrap();
        assert!(settlement.won());
        assert_eq!(settlement.roll, 81);
        assert_eq!(settlement.payout, 2 * STAKE);

        // Payout plus the bet's rent back.
        assert_eq!(fixture.player_account.lamports, 2 * STAKE + BET_RENT);
        assert_eq!(fixture.house_account.lamports, house_lamports - 2 * STAKE);
        assert_eq!(fixture.bet_account.lamports, 0);
        assert!(fixture.bet_account.data.iter().all(|byte| *byte == 0));

        assert_eq!(fixture.house.total_exposure, 0);
        assert_eq!(fixture.house.pending_bets, 0);
        assert_eq!(fixture.player_state.pending_request, None);
        assert_eq!(fixture.player_state.total_wins, 1);
    }

    #[test]
    fn test_loss_refunds_only_rent() {
        let mut fixture = Fixture::new(100, CoinSide::Heads);
        let house_lamports = fixture.house_account.lamports;

        let settlement = fixture.settle(None, TAILS).unwrap();
        assert!(!settlement.won());

        assert_eq!(fixture.player_account.lamports, BET_RENT);
        assert_eq!(fixture.house_account.lamports, house_lamports);
        assert_eq!(fixture.bet_account.lamports, 0);
        assert_eq!(fixture.house.total_exposure, 0);
        assert_eq!(fixture.player_state.total_wins, 0);
    }

    #[test]
    fn test_replayed_callback_finds_closed_bet() {
        let mut fixture = Fixture::new(100, CoinSide::Heads);
        fixture.settle(None, HEADS).unwrap();

        let before = fixture.snapshot();
        assert_error(fixture.settle(None, HEADS), CoinflipError::UnknownRequest);
        assert_eq!(fixture.snapshot(), before);
    }

    #[test]
    fn test_payout_account_must_be_bet_player() {
        let mut fixture = Fixture::new(100, CoinSide::Heads);
        fixture.player_account.key = Pubkey::new_unique();

        let before = fixture.snapshot();
        assert_error(fixture.settle(None, HEADS), CoinflipError::PlayerMismatch);
        assert_eq!(fixture.snapshot(), before);
        assert_eq!(fixture.house.pending_bets, 1);
    }

    #[test]
    fn test_expected_request_must_match_bet() {
        let mut fixture = Fixture::new(100, CoinSide::Heads);

        let before = fixture.snapshot();
        assert_error(fixture.settle(Some(2), HEADS), CoinflipError::UnknownRequest);
        assert_eq!(fixture.snapshot(), before);

        let settlement = fixture.settle(Some(1), HEADS).unwrap();
        assert_eq!(settlement.request_id, 1);
    }

    #[test]
    fn test_payout_shortfall_leaves_accounts_untouched() {
        let mut fixture = Fixture::new(100, CoinSide::Heads);

        // Drained below the payout out of band.
        let house_space = DISCRIMINATOR_SIZE + House::INIT_SPACE;
        fixture.house_account.lamports = fixture.rent.minimum_balance(house_space) + STAKE / 2;

        let before = fixture.snapshot();
        assert_error(fixture.settle(None, HEADS), CoinflipError::PayoutFailed);
        assert_eq!(fixture.snapshot(), before);
        assert_eq!(fixture.house.pending_bets, 1);
    }
}
