use anchor_lang::prelude::*;

use crate::error::DispenserError;
use crate::ledger::TokenLedger;
use crate::utils::tiers::cap_for_year;
use crate::utils::time::{self, PeriodTimes};

/// Singleton dispenser state PDA.
#[account]
#[derive(Default, Debug)]
pub struct Dispenser {
    /// Mint of the dispensed token.
    pub token: Pubkey,
    /// May only reassign `receiver`.
    pub owner: Pubkey,
    /// Sole wallet allowed to claim.
    pub receiver: Pubkey,
    /// Once the tier cap falls to or below this, the whole balance is claimable.
    pub monthly_min: u64,
    /// Tier-4 cap; every other tier derives from it.
    pub monthly_max: u64,
    /// Creation time (Unix seconds).
    pub start: i64,
    /// Period boundary recorded by the most recent successful claim.
    pub last_claimed_period_start_time: i64,
    /// Running total for the period at `last_claimed_period_start_time`.
    pub claimed_this_month: u64,
    /// Canonical PDA bump; signs vault transfers.
    pub bump: u8,
}

impl Dispenser {
    pub const SIZE: usize =
        32 + // token
        32 + // owner
        32 + // receiver
        8 +  // monthly_min
        8 +  // monthly_max
        8 +  // start
        8 +  // last_claimed_period_start_time
        8 +  // claimed_this_month
        1;   // bump
}

/// Result of an entitlement query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaxClaimable {
    pub max_tokens: u64,
    pub is_new_month: bool,
    pub times: PeriodTimes,
}

/// What a successful claim did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub amount: u64,
    pub year_index: u64,
    pub month_index: u64,
    pub claimed_this_month: u64,
}

impl Dispenser {
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        token: Pubkey,
        owner: Pubkey,
        receiver: Pubkey,
        monthly_min: u64,
        monthly_max: u64,
        start: i64,
        bump: u8,
    ) -> Result<()> {
        require!(token != Pubkey::default(), DispenserError::InvalidToken);
        require!(monthly_max > 0, DispenserError::InvalidMonthlyMax);
        require!(receiver != Pubkey::default(), DispenserError::InvalidReceiver);

        self.token = token;
        self.owner = owner;
        self.receiver = receiver;
        self.monthly_min = monthly_min;
        self.monthly_max = monthly_max;
        self.start = start;
        self.last_claimed_period_start_time = start;
        self.claimed_this_month = 0;
        self.bump = bump;
        Ok(())
    }

    /// Entitlement left at `now`. `balance` is only consulted in the termination tier.
    pub fn max_claimable(&self, now: i64, balance: u64) -> Result<MaxClaimable> {
        let times = time::compute_times(now, self.start)?;

        let tier_amount = cap_for_year(times.year_index, self.monthly_max);
        let amount = if tier_amount <= self.monthly_min {
            balance
        } else {
            tier_amount
        };

        let is_new_month = times.current_period_start > self.last_claimed_period_start_time;
        let max_tokens = if is_new_month {
            amount
        } else {
            // A balance drop in the termination tier can leave claimed > amount.
            amount.saturating_sub(self.claimed_this_month)
        };

        Ok(MaxClaimable {
            max_tokens,
            is_new_month,
            times,
        })
    }

    /// Validates and pays out `amount` to the receiver. State is only written
    /// after the ledger confirms the transfer.
    pub fn claim<L: TokenLedger>(
        &mut self,
        caller: Pubkey,
        amount: u64,
        now: i64,
        ledger: &mut L,
    ) -> Result<ClaimReceipt> {
        require_keys_eq!(caller, self.receiver, DispenserError::InvalidClaimCaller);

        let quote = self.max_claimable(now, ledger.balance()?)?;
        require!(
            quote.max_tokens > 0 && amount > 0,
            DispenserError::ClaimingZero
        );
        require!(
            amount <= quote.max_tokens,
            DispenserError::MonthlyClaimTooHigh
        );

        let (period_start, claimed) = if quote.is_new_month {
            (quote.times.current_period_start, amount)
        } else {
            let claimed = self
                .claimed_this_month
                .checked_add(amount)
                .ok_or(DispenserError::MathOverflow)?;
            (self.last_claimed_period_start_time, claimed)
        };

        let receiver = self.receiver;
        match ledger.transfer(&receiver, amount) {
            Ok(true) => {}
            Ok(false) | Err(_) => return err!(DispenserError::PaymentFailed),
        }

        self.last_claimed_period_start_time = period_start;
        self.claimed_this_month = claimed;

        Ok(ClaimReceipt {
            amount,
            year_index: quote.times.year_index,
            month_index: quote.times.month_index,
            claimed_this_month: claimed,
        })
    }

    pub fn change_receiver(&mut self, caller: Pubkey, new_receiver: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.owner, DispenserError::NotOwner);
        require!(
            new_receiver != Pubkey::default(),
            DispenserError::InvalidReceiver
        );
        self.receiver = new_receiver;
        Ok(())
    }
}
