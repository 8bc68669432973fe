//! Program-wide constants.

/// Length of a schedule year in seconds (365 days, no leap handling).
pub const YEAR_LENGTH: i64 = 31_536_000;

/// Length of a schedule month in seconds (a twelfth of a year, truncated).
pub const MONTH_LENGTH: i64 = YEAR_LENGTH / 12;

/// Years per halving block of the tier schedule.
pub const YEARS_PER_BLOCK: u64 = 4;

/// Divisors applied to `monthly_max` in years 1..=4.
pub const YEAR_ONE_DIVISOR: u64 = 10;
pub const YEAR_TWO_DIVISOR: u64 = 4;
pub const YEAR_THREE_DIVISOR: u64 = 2;

/// PDA seed of the singleton dispenser state.
pub const DISPENSER_SEED: &[u8] = b"dispenser";

/// PDA seed of the vault token account (followed by the dispenser key).
pub const VAULT_SEED: &[u8] = b"vault";
