use anchor_lang::prelude::*;

use crate::constants::DISPENSER_SEED;
use crate::state::Dispenser;

pub fn change_receiver(ctx: Context<ChangeReceiver>, new_receiver: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let d = &mut ctx.accounts.dispenser;
    d.change_receiver(owner, new_receiver)?;

    msg!("receiver changed to {}", new_receiver);
    emit!(ReceiverChanged { new_receiver });
    Ok(())
}

#[derive(Accounts)]
pub struct ChangeReceiver<'info> {
    #[account(mut, seeds = [DISPENSER_SEED], bump = dispenser.bump)]
    pub dispenser: Account<'info, Dispenser>,

    pub owner: Signer<'info>,
}

#[event]
pub struct ReceiverChanged {
    pub new_receiver: Pubkey,
}
