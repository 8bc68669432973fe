use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::constants::DISPENSER_SEED;

/// The slice of the token ledger the dispenser needs: its own balance and
/// outbound transfers.
pub trait TokenLedger {
    /// Amount currently held by the dispenser.
    fn balance(&self) -> Result<u64>;

    /// Moves `amount` to `to`. `Ok(false)` means the ledger declined the transfer.
    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<bool>;
}

/// SPL Token vault owned by the dispenser PDA.
pub struct VaultLedger<'info> {
    pub token_program: AccountInfo<'info>,
    pub vault: AccountInfo<'info>,
    pub vault_amount: u64,
    pub destination: AccountInfo<'info>,
    /// Wallet that owns `destination`.
    pub destination_owner: Pubkey,
    /// Dispenser PDA, the vault authority.
    pub authority: AccountInfo<'info>,
    pub authority_bump: u8,
}

impl<'info> TokenLedger for VaultLedger<'info> {
    fn balance(&self) -> Result<u64> {
        Ok(self.vault_amount)
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<bool> {
        if *to != self.destination_owner || amount > self.vault_amount {
            return Ok(false);
        }

        let bump = self.authority_bump;
        let signer_seeds: &[&[&[u8]]] = &[&[DISPENSER_SEED, &[bump]]];
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.vault.clone(),
                    to: self.destination.clone(),
                    authority: self.authority.clone(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        self.vault_amount -= amount;
        Ok(true)
    }
}
