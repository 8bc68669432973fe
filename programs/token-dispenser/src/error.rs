use anchor_lang::prelude::*;

/// Custom error codes for the token dispenser program.
#[error_code]
pub enum DispenserError {
    #[msg("Invalid token mint address")]
    InvalidToken,

    #[msg("Monthly max must be greater than zero")]
    InvalidMonthlyMax,

    #[msg("Invalid receiver address")]
    InvalidReceiver,

    #[msg("Only the receiver can claim")]
    InvalidClaimCaller,

    #[msg("Unauthorized: owner signature required")]
    NotOwner,

    #[msg("Nothing to claim")]
    ClaimingZero,

    #[msg("Requested amount exceeds this month's entitlement")]
    MonthlyClaimTooHigh,

    #[msg("Token transfer failed")]
    PaymentFailed,

    #[msg("Timestamp is before the dispenser start")]
    BeforeStart,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,
}
