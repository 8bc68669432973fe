use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{DISPENSER_SEED, VAULT_SEED};
use crate::error::DispenserError;
use crate::state::Dispenser;
use crate::utils::time;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleTimes {
    pub year_index: u64,
    pub month_index: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimableTokens {
    pub max_tokens: u64,
    pub is_new_month: bool,
}

pub fn get_times(ctx: Context<Quote>) -> Result<ScheduleTimes> {
    let now = Clock::get()?.unix_timestamp;
    let t = time::compute_times(now, ctx.accounts.dispenser.start)?;
    Ok(ScheduleTimes {
        year_index: t.year_index,
        month_index: t.month_index,
    })
}

pub fn calculate_max_tokens_this_month(ctx: Context<Quote>) -> Result<ClaimableTokens> {
    let now = Clock::get()?.unix_timestamp;
    let q = ctx
        .accounts
        .dispenser
        .max_claimable(now, ctx.accounts.vault.amount)?;

    emit!(ClaimQuote {
        year_index: q.times.year_index,
        month_index: q.times.month_index,
        max_tokens: q.max_tokens,
        is_new_month: q.is_new_month,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(ClaimableTokens {
        max_tokens: q.max_tokens,
        is_new_month: q.is_new_month,
    })
}

pub fn get_contract_balance(ctx: Context<Quote>) -> Result<u64> {
    Ok(ctx.accounts.vault.amount)
}

#[derive(Accounts)]
pub struct Quote<'info> {
    #[account(seeds = [DISPENSER_SEED], bump = dispenser.bump)]
    pub dispenser: Account<'info, Dispenser>,

    #[account(
        seeds = [VAULT_SEED, dispenser.key().as_ref()],
        bump,
        constraint = vault.mint == dispenser.token @ DispenserError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct ClaimQuote {
    pub year_index: u64,
    pub month_index: u64,
    pub max_tokens: u64,
    pub is_new_month: bool,
    pub vault_balance: u64,
}
