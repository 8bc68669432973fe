use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{DISPENSER_SEED, VAULT_SEED};
use crate::error::DispenserError;
use crate::ledger::VaultLedger;
use crate::state::Dispenser;

pub fn claim(ctx: Context<Claim>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.receiver.key();

    // Capture AccountInfos before taking the mutable borrow of the dispenser.
    let mut ledger = VaultLedger {
        token_program: ctx.accounts.token_program.to_account_info(),
        vault: ctx.accounts.vault.to_account_info(),
        vault_amount: ctx.accounts.vault.amount,
        destination: ctx.accounts.receiver_token_account.to_account_info(),
        destination_owner: ctx.accounts.receiver_token_account.owner,
        authority: ctx.accounts.dispenser.to_account_info(),
        authority_bump: ctx.accounts.dispenser.bump,
    };

    let d = &mut ctx.accounts.dispenser;
    let receipt = d.claim(caller, amount, now, &mut ledger)?;

    msg!(
        "claimed {} in year {} month {} ({} this month)",
        receipt.amount,
        receipt.year_index,
        receipt.month_index,
        receipt.claimed_this_month
    );
    emit!(Claimed {
        receiver: d.receiver,
        amount: receipt.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut, seeds = [DISPENSER_SEED], bump = dispenser.bump)]
    pub dispenser: Account<'info, Dispenser>,

    #[account(
        mut,
        seeds = [VAULT_SEED, dispenser.key().as_ref()],
        bump,
        constraint = vault.mint == dispenser.token @ DispenserError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = receiver_token_account.mint == dispenser.token @ DispenserError::InvalidTokenMint,
        constraint = receiver_token_account.owner == receiver.key() @ DispenserError::InvalidTokenAccount,
    )]
    pub receiver_token_account: Account<'info, TokenAccount>,

    pub receiver: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Claimed {
    pub receiver: Pubkey,
    pub amount: u64,
}
