use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{DISPENSER_SEED, VAULT_SEED};
use crate::error::DispenserError;
use crate::state::Dispenser;

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, DispenserError::InvalidAmount);

    let d = &ctx.accounts.dispenser;
    require_keys_eq!(ctx.accounts.vault.mint, d.token, DispenserError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.funder_token_account.mint,
        d.token,
        DispenserError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.funder_token_account.owner,
        ctx.accounts.funder.key(),
        DispenserError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;
    msg!("deposited {} (vault {})", amount, ctx.accounts.vault.amount);

    emit!(Deposited {
        funder: ctx.accounts.funder.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(seeds = [DISPENSER_SEED], bump = dispenser.bump)]
    pub dispenser: Account<'info, Dispenser>,

    #[account(
        mut,
        seeds = [VAULT_SEED, dispenser.key().as_ref()],
        bump,
        constraint = vault.mint == dispenser.token @ DispenserError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Deposited {
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
