use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{DISPENSER_SEED, VAULT_SEED};
use crate::state::Dispenser;

pub fn initialize(
    ctx: Context<Initialize>,
    monthly_min: u64,
    monthly_max: u64,
    receiver: Pubkey,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let token = ctx.accounts.mint.key();
    let owner = ctx.accounts.owner.key();

    let d = &mut ctx.accounts.dispenser;
    d.initialize(
        token,
        owner,
        receiver,
        monthly_min,
        monthly_max,
        now,
        ctx.bumps.dispenser,
    )?;

    msg!(
        "dispenser initialized: min={} max={} start={}",
        monthly_min,
        monthly_max,
        now
    );
    emit!(DispenserInitialized {
        token,
        owner,
        receiver,
        monthly_min,
        monthly_max,
        start: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + Dispenser::SIZE,
        seeds = [DISPENSER_SEED],
        bump
    )]
    pub dispenser: Account<'info, Dispenser>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = dispenser,
        seeds = [VAULT_SEED, dispenser.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct DispenserInitialized {
    pub token: Pubkey,
    pub owner: Pubkey,
    pub receiver: Pubkey,
    pub monthly_min: u64,
    pub monthly_max: u64,
    pub start: i64,
}
