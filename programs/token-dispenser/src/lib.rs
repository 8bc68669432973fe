use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("9JcX7DofXkzz3n9jvbHT7Sew4qb2acA7Mp1LXNwRN22j");

#[program]
pub mod token_dispenser {
    use super::*;

    /// Creates the dispenser PDA and its vault. `start` is the current cluster time.
    pub fn initialize(
        ctx: Context<Initialize>,
        monthly_min: u64,
        monthly_max: u64,
        receiver: Pubkey,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, monthly_min, monthly_max, receiver)
    }

    /// Moves tokens from the funder into the vault.
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::deposit(ctx, amount)
    }

    /// Receiver-only. Pays out up to this month's remaining entitlement.
    pub fn claim(ctx: Context<Claim>, amount: u64) -> Result<()> {
        instructions::claim::claim(ctx, amount)
    }

    pub fn change_receiver(ctx: Context<ChangeReceiver>, new_receiver: Pubkey) -> Result<()> {
        instructions::change_receiver::change_receiver(ctx, new_receiver)
    }

    pub fn get_times(ctx: Context<Quote>) -> Result<ScheduleTimes> {
        instructions::quote::get_times(ctx)
    }

    pub fn calculate_max_tokens_this_month(ctx: Context<Quote>) -> Result<ClaimableTokens> {
        instructions::quote::calculate_max_tokens_this_month(ctx)
    }

    pub fn get_contract_balance(ctx: Context<Quote>) -> Result<u64> {
        instructions::quote::get_contract_balance(ctx)
    }
}
